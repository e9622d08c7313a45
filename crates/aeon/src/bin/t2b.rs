//! `t2b` — convert an AEON text file to the binary form.
//!
//! Usage:
//!   t2b <input.txt> <output.aeon>

use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: t2b <input.txt> <output.aeon>");
        process::exit(1);
    }

    let input = match fs::read_to_string(&args[1]) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("cannot read {}: {e}", args[1]);
            process::exit(1);
        }
    };

    let value = match aeon::from_text(input.trim()) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let bytes = match aeon::encode(&value) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if let Err(e) = fs::write(&args[2], bytes) {
        eprintln!("cannot write {}: {e}", args[2]);
        process::exit(1);
    }
}
