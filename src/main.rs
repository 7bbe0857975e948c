use std::process::ExitCode;

use clap::Parser;
use flowlate::cli::Arguments;
use flowlate::cli::ExitStatus;

fn main() -> ExitCode {
    let args = Arguments::parse();

    match flowlate::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
