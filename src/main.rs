use std::process::ExitCode;

use clap::Parser;
use lochelper::cli::{Arguments, ExitStatus, print_error};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match lochelper::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            print_error(&err);
            ExitStatus::from_error(&err).into()
        }
    }
}
