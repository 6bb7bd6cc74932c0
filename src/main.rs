use std::{fs, io};

use clap::Parser;
use tokcalc::{DEFAULT_MAX_DEPTH, Evaluator, session};

/// tokcalc is a line-oriented calculator with variables and user-defined
/// functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tokcalc to treat the contents as a path to a script.
    #[arg(short, long)]
    file: bool,

    /// Maximum nesting depth of expressions and function calls. Each line
    /// runs with a fixed stack, so very large values can overflow it.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Do not print a prompt in interactive mode.
    #[arg(short, long)]
    quiet: bool,

    /// A line to evaluate, or a script path with `--file`. Reads stdin
    /// interactively when omitted.
    contents: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let mut evaluator = Evaluator::with_max_depth(args.max_depth);

    let result = match args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                             eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                             std::process::exit(1);
                         });
            session::run(&mut evaluator, script.as_bytes(), io::stdout().lock(), None)
        },
        Some(line) => session::run(&mut evaluator, line.as_bytes(), io::stdout().lock(), None),
        None => {
            let prompt = (!args.quiet).then_some(">>> ");
            session::run(&mut evaluator, io::stdin().lock(), io::stdout().lock(), prompt)
        },
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
