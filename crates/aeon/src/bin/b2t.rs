//! `b2t` — convert an AEON binary file to the text form.
//!
//! Usage:
//!   b2t <input.aeon> <output.txt>

use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: b2t <input.aeon> <output.txt>");
        process::exit(1);
    }

    let input = match fs::read(&args[1]) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("cannot read {}: {e}", args[1]);
            process::exit(1);
        }
    };

    let value = match aeon::decode(&input) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if let Err(e) = fs::write(&args[2], aeon::to_text(&value)) {
        eprintln!("cannot write {}: {e}", args[2]);
        process::exit(1);
    }
}
