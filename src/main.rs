//! Jam CLI
//!
//! Usage: jam [INPUT] [-o output.txt]
//!
//! With an input file, tokenizes it and prints the token listing; without
//! one, starts the interactive REPL.

use clap::Parser;
use colored::Colorize;
use jam::{repl, Driver};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "jam")]
#[command(author = "Jam Team")]
#[command(version = "0.1.0")]
#[command(about = "Jam - tokenizes Jam source code", long_about = None)]
struct Args {
    /// Input Jam source file; starts the REPL when omitted
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Write the token listing to a file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let Some(input) = args.input else {
        return match repl::run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}: {}", "error".red().bold(), e);
                ExitCode::FAILURE
            }
        };
    };

    // Read source file
    let source = match std::fs::read_to_string(&input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!(
                "{}: could not read file '{}': {}",
                "error".red().bold(),
                input.display(),
                e
            );
            return ExitCode::FAILURE;
        }
    };

    let driver = Driver::new(source);
    let listing = match driver.run() {
        Ok(listing) => listing,
        Err(e) => {
            eprintln!("{}: {}: {}", "error".red().bold(), input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    match args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, &listing) {
                eprintln!(
                    "{}: could not write file '{}': {}",
                    "error".red().bold(),
                    path.display(),
                    e
                );
                return ExitCode::FAILURE;
            }
        }
        None => print!("{listing}"),
    }

    ExitCode::SUCCESS
}
