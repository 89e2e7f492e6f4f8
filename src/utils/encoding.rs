//! Encoding utilities for decoding legacy text line-by-line.
//!
//! Uses encoding_rs instead of platform conversion APIs for portability.

use encoding_rs::Encoding;

/// Decodes raw line bytes under a declared encoding.
///
/// The first line is sniffed for a byte-order mark; if one is present the
/// sniffed encoding replaces the declared one for the rest of the stream and
/// the mark itself is not emitted. Malformed sequences decode to U+FFFD
/// replacement characters rather than failing.
pub struct LineDecoder {
    encoding: &'static Encoding,
    first: bool,
}

impl LineDecoder {
    pub fn new(encoding: &'static Encoding) -> Self {
        LineDecoder {
            encoding,
            first: true,
        }
    }

    /// Decode one line's bytes (line terminator already stripped).
    pub fn decode_line(&mut self, mut bytes: &[u8]) -> String {
        if self.first {
            self.first = false;
            if let Some((sniffed, bom_len)) = Encoding::for_bom(bytes) {
                self.encoding = sniffed;
                bytes = &bytes[bom_len..];
            }
        }
        let (decoded, _had_errors) = self.encoding.decode_without_bom_handling(bytes);
        decoded.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::SHIFT_JIS;

    #[test]
    fn test_ascii_passthrough() {
        let mut decoder = LineDecoder::new(SHIFT_JIS);
        assert_eq!(decoder.decode_line(b"Hello, World!"), "Hello, World!");
    }

    #[test]
    fn test_shift_jis_decode() {
        // SHIFT-JIS encoding of "日本語"
        let mut decoder = LineDecoder::new(SHIFT_JIS);
        let data: &[u8] = &[0x93, 0xFA, 0x96, 0x7B, 0x8C, 0xEA];
        assert_eq!(decoder.decode_line(data), "日本語");
    }

    #[test]
    fn test_halfwidth_katakana_decode() {
        // Half-width katakana are single bytes 0xA1..0xDF in SHIFT-JIS
        let mut decoder = LineDecoder::new(SHIFT_JIS);
        let data: &[u8] = &[0xB6, 0xC0, 0xB6, 0xC5];
        assert_eq!(decoder.decode_line(data), "ｶﾀｶﾅ");
    }

    #[test]
    fn test_utf8_bom_overrides_declared_encoding() {
        let mut decoder = LineDecoder::new(SHIFT_JIS);
        let mut data = vec![0xEF, 0xBB, 0xBF];
        data.extend_from_slice("日本語".as_bytes());
        assert_eq!(decoder.decode_line(&data), "日本語");
        // Sniffed encoding sticks for later lines
        assert_eq!(decoder.decode_line("続き".as_bytes()), "続き");
    }

    #[test]
    fn test_bom_sniff_only_on_first_line() {
        let mut decoder = LineDecoder::new(SHIFT_JIS);
        assert_eq!(decoder.decode_line(b"first"), "first");
        // BOM-shaped bytes mid-stream are ordinary (malformed) data
        let decoded = decoder.decode_line(&[0xEF, 0xBB, 0xBF]);
        assert!(decoded.contains('\u{FFFD}'));
    }

    #[test]
    fn test_malformed_bytes_substituted() {
        // 0x81 starts a double-byte sequence; 0xFF is not a valid trail byte
        let mut decoder = LineDecoder::new(SHIFT_JIS);
        let decoded = decoder.decode_line(&[0x81, 0xFF, 0x41]);
        assert!(decoded.contains('\u{FFFD}'));
        assert!(decoded.ends_with('A'));
    }

    #[test]
    fn test_empty_line() {
        let mut decoder = LineDecoder::new(SHIFT_JIS);
        assert_eq!(decoder.decode_line(b""), "");
    }
}
