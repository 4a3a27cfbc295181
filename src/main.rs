//! Command-line driver for the lumen front end.
//!
//! Reads source from a file, `--eval`, or stdin, then prints the token
//! stream and/or the canonical rendering of the parsed program. Diagnostics
//! go to stderr and make the process exit with a failure code.

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser as _;
use log::{debug, trace, LevelFilter};
use lumen::{format_error, lexer::lexer::tokenize, parser::parser::parse};

#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Tokenizes and parses lumen source")]
struct Args {
    /// Source file to parse. Reads stdin when omitted and `--eval` is not given
    #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath, conflicts_with = "eval")]
    file: Option<PathBuf>,
    /// Parse this text instead of a file
    #[clap(short = 'e', long = "eval", value_name = "SOURCE")]
    eval: Option<String>,
    /// Print every token
    #[clap(long)]
    tokens: bool,
    /// Print the canonical rendering of the program (the default unless `--tokens` is given)
    #[clap(long)]
    ast: bool,
    /// Raise the log level; repeat for more detail. `RUST_LOG` wins when set
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Returns a display name for the input along with its text.
    fn read_source(&self) -> io::Result<(String, String)> {
        if let Some(source) = &self.eval {
            return Ok((String::from("<eval>"), source.clone()));
        }

        match &self.file {
            Some(path) => Ok((path.display().to_string(), fs::read_to_string(path)?)),
            None => {
                let mut source = String::new();
                io::stdin().read_to_string(&mut source)?;
                Ok((String::from("<stdin>"), source))
            }
        }
    }

    fn print_ast(&self) -> bool {
        self.ast || !self.tokens
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level_filter())
        .parse_default_env()
        .init();
    trace!("starting lumen with args: {args:?}");

    let (name, source) = match args.read_source() {
        Ok(input) => input,
        Err(err) => {
            eprintln!("Error: could not read input: {err}");
            return ExitCode::FAILURE;
        }
    };
    debug!("read {} character(s) from {}", source.chars().count(), name);

    if args.tokens {
        for token in tokenize(&source) {
            println!("{token}");
        }
    }

    let (program, errors) = parse(&source);

    if args.print_ast() {
        println!("{program}");
    }

    for error in &errors {
        eprint!("{}", format_error(error, &source, &name));
    }

    if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::try_parse_from("lumen file.lm --tokens -vv".split(' '))
            .expect("could not parse test string");

        assert_eq!(args.file, Some(PathBuf::from("file.lm")));
        assert!(args.tokens);
        assert!(!args.print_ast());
        assert_eq!(args.log_level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_eval_conflicts_with_file() {
        let result = Args::try_parse_from(["lumen", "file.lm", "-e", "1 + 2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_eval_source() {
        let args = Args::try_parse_from(["lumen", "--eval", "let x = 1;"]).unwrap();
        let (name, source) = args.read_source().unwrap();

        assert_eq!(name, "<eval>");
        assert_eq!(source, "let x = 1;");
        assert!(args.print_ast());
    }
}
