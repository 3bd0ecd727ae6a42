use std::path::Path;

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{
    error::ReplError,
    interpreter::{evaluator::core::evaluate, parser::parse, reader::read},
};

/// Prompt shown before each line in interactive mode.
pub const PROMPT: &str = ">>> ";

/// Evaluates one line and returns what the read loop prints for it.
///
/// Parse errors are rendered too, so a bad line never stops the loop. With
/// `show_ast` the syntax tree is printed above the result.
///
/// # Example
/// ```
/// use lioliosh::repl::process_line;
///
/// assert_eq!(process_line("(join {1} {2})", false), "{1 2}");
/// assert_eq!(process_line("(1", false), "<stdin>:1: error: unclosed '('");
/// ```
pub fn process_line(line: &str, show_ast: bool) -> String {
    let tree = match parse(line) {
        Ok(tree) => tree,
        Err(e) => return e.to_string(),
    };
    let value = evaluate(read(&tree));

    if show_ast { format!("{tree}{value}") } else { value.to_string() }
}

/// Runs the interactive read loop until Ctrl-C or Ctrl-D.
///
/// # Errors
/// Returns `ReplError::Readline` if the line editor cannot be created or
/// fails while reading.
pub fn run(show_ast: bool) -> Result<(), ReplError> {
    println!("Lioliosh Version {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+c to Exit\n");

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    tracing::warn!("Failed to add history entry: {}", e);
                }
                println!("{}", process_line(&line, show_ast));
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                tracing::debug!("read loop interrupted");
                return Ok(());
            },
            Err(err) => return Err(err.into()),
        }
    }
}

/// Evaluates every non-blank line of a script file, printing each result.
///
/// # Errors
/// Returns `ReplError::Io` if the file cannot be read.
pub fn run_file(path: &Path, show_ast: bool) -> Result<(), ReplError> {
    let script = std::fs::read_to_string(path).map_err(|source| ReplError::Io { path: path.to_path_buf(),
                                                                                 source })?;

    for line in script.lines().filter(|l| !l.trim().is_empty()) {
        println!("{}", process_line(line, show_ast));
    }

    Ok(())
}
