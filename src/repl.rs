//! Interactive line-editing driver.
//!
//! Each non-empty line is scanned independently with a fresh scanner; a
//! string or comment cannot span lines entered separately.

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::driver::render_tokens;
use crate::lexer::Scanner;

const PROMPT: &str = "jam> ";

/// Run the REPL until Ctrl-D or end of input
pub fn run() -> rustyline::Result<()> {
    println!("Welcome to Jam v{}", env!("CARGO_PKG_VERSION"));

    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line.as_str())?;

                match Scanner::new(&line).scan() {
                    Ok(stream) => print!("{}", render_tokens(&stream)),
                    Err(e) => eprintln!("{}: {}", "error".red().bold(), e),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
