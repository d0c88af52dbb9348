//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use feira_cli::CliError;

fn main() {
    match feira_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("feira: {err}");
            std::process::exit(1);
        }
    }
}
