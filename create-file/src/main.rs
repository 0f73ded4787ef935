//! `create_file` binary module.
//!
//! Reads the argument document from `ARGS_FILE` (or stdin), converges the
//! target file, and prints one JSON result document on stdout.

use std::path::PathBuf;

use clap::Parser;
use create_file::exit_codes;
use create_file::io::args::ArgsSource;
use create_file::logging;
use create_file::module::run_module;

#[derive(Parser)]
#[command(
    name = "create_file",
    version,
    about = "Ensure a file exists with exactly the given content"
)]
struct Cli {
    /// JSON argument document. Read from stdin when omitted.
    #[arg(value_name = "ARGS_FILE")]
    args_file: Option<PathBuf>,

    /// Report what would change without writing.
    #[arg(long)]
    check: bool,
}

impl Cli {
    fn source(&self) -> ArgsSource {
        match &self.args_file {
            Some(path) => ArgsSource::File(path.clone()),
            None => ArgsSource::Stdin,
        }
    }
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let output = run_module(&cli.source(), cli.check);
    match output.to_json() {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::FAILED);
        }
    }

    let code = if output.failed {
        exit_codes::FAILED
    } else {
        exit_codes::OK
    };
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args_file() {
        let cli = Cli::parse_from(["create_file", "/tmp/args.json"]);
        assert_eq!(
            cli.source(),
            ArgsSource::File(PathBuf::from("/tmp/args.json"))
        );
        assert!(!cli.check);
    }

    #[test]
    fn parse_stdin_with_check() {
        let cli = Cli::parse_from(["create_file", "--check"]);
        assert_eq!(cli.source(), ArgsSource::Stdin);
        assert!(cli.check);
    }
}
