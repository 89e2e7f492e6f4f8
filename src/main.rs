//! SHIFT-JIS to UTF-8 file converter.
//!
//! Reads the input file as SHIFT-JIS, widens half-width katakana to their
//! full-width forms, and writes the result as UTF-8, one output line per
//! input line.

mod core;
mod utils;

use anyhow::Context;
use encoding_rs::{SHIFT_JIS, UTF_8};

use crate::core::pipeline;
use crate::utils::file_helper;

fn print_usage() {
    let program = std::env::args()
        .next()
        .and_then(|arg0| file_helper::get_file_name(&arg0))
        .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_string());
    println!("usage: {} <input file> <output file>", program);
}

fn run() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        print_usage();
        return 1;
    }

    // Extra arguments beyond the first two are ignored
    let input_path = file_helper::absolutize(&args[0]);
    let output_path = file_helper::absolutize(&args[1]);

    let result = pipeline::convert_file(&input_path, SHIFT_JIS, &output_path, UTF_8)
        .context("conversion failed");

    match result {
        Ok(_lines) => 0,
        Err(err) => {
            eprintln!("{err:#}");
            2
        }
    }
}

fn main() {
    std::process::exit(run());
}
