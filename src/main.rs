//! Payment Files CLI
//!
//! Validates fixed-width payment files and logs the resulting payment events.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- file1_betalningsservice.txt file2_inbetalningstjansten.txt
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: set to `info` to see the emitted payment events

use payment_files::{
    LoggingReceiver, MultiFormatProcessor, PaymentFileProcessor, ProcessError, Result,
};
use std::env;
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(ProcessError::MissingArgument);
    }

    let processor = MultiFormatProcessor::with_default_formats();
    let mut receiver = LoggingReceiver;

    for file in &args[1..] {
        if processor.process_file(Path::new(file), &mut receiver)? {
            println!("{file}: processed");
        } else {
            println!("{file}: no processor for this file");
        }
    }

    Ok(())
}
