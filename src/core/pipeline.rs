//! Streaming conversion pipeline.
//!
//! Reads the input file under the source encoding one line at a time, widens
//! half-width runs, and writes each normalized line to the output file under
//! the target encoding. Memory use stays proportional to the longest line.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use thiserror::Error;

use super::normalizer;
use crate::utils::encoding::LineDecoder;

#[cfg(windows)]
const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_TERMINATOR: &str = "\n";

/// Failure while opening, reading, or writing the conversion files.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot open input file {path}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot create output file {path}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error during conversion")]
    Io(#[from] io::Error),
}

/// Read one line's bytes, terminated by CR, LF, or CRLF (consumed, not
/// stored). Returns `Ok(false)` at end of input; a final line without a
/// terminator is still returned.
///
/// Splitting at the byte level is safe for SHIFT-JIS: neither 0x0D nor 0x0A
/// ever appears as a trail byte.
fn read_line_bytes<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            return Ok(!buf.is_empty());
        }
        match available.iter().position(|&b| b == b'\r' || b == b'\n') {
            Some(pos) => {
                let terminator = available[pos];
                buf.extend_from_slice(&available[..pos]);
                reader.consume(pos + 1);
                if terminator == b'\r' {
                    // CRLF is a single terminator, even across buffer refills
                    if reader.fill_buf()?.first() == Some(&b'\n') {
                        reader.consume(1);
                    }
                }
                return Ok(true);
            }
            None => {
                let len = available.len();
                buf.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }
}

/// Convert one file, returning the number of lines written.
///
/// Input lines may end in CR, LF, or CRLF; the output uses the platform
/// line terminator. The input is opened read-only and left untouched; the
/// output is created or truncated, flushed before returning, and both
/// handles are released on every exit path. A failure mid-stream may leave
/// a partially written output file behind.
pub fn convert_file(
    input_path: &Path,
    input_encoding: &'static Encoding,
    output_path: &Path,
    output_encoding: &'static Encoding,
) -> Result<u64, ConvertError> {
    let input = File::open(input_path).map_err(|source| ConvertError::OpenInput {
        path: input_path.to_path_buf(),
        source,
    })?;
    let output = File::create(output_path).map_err(|source| ConvertError::CreateOutput {
        path: output_path.to_path_buf(),
        source,
    })?;

    let mut reader = BufReader::new(input);
    let mut writer = BufWriter::new(output);
    let mut decoder = LineDecoder::new(input_encoding);
    let mut line_bytes = Vec::new();
    let mut lines_written = 0u64;

    while read_line_bytes(&mut reader, &mut line_bytes)? {
        let line = decoder.decode_line(&line_bytes);
        let normalized = normalizer::normalize(&line);

        let (encoded, _, _) = output_encoding.encode(&normalized);
        writer.write_all(&encoded)?;
        let (terminator, _, _) = output_encoding.encode(LINE_TERMINATOR);
        writer.write_all(&terminator)?;
        lines_written += 1;
    }

    writer.flush()?;
    Ok(lines_written)
}
