use std::{path::Path, process::ExitCode};

use clap::Parser;
use lioliosh::repl::{self, process_line};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// lioliosh is a tiny s-expression calculator with quoted lists.
///
/// Without arguments it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lioliosh to read the expressions from a file, one per line.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints the syntax tree of each line before its result.
    #[arg(long)]
    ast: bool,

    /// An expression to evaluate, or a path when `--file` is given.
    contents: Option<String>,
}

fn main() -> ExitCode {
    // Logs go to stderr, filtered by RUST_LOG.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let result = match (&args.contents, args.file) {
        (None, _) => repl::run(args.ast),
        (Some(path), true) => repl::run_file(Path::new(path), args.ast),
        (Some(expression), false) => {
            println!("{}", process_line(expression, args.ast));
            Ok(())
        },
    };

    if let Err(e) = result {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
