use anyhow::Result;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use report::print_error;

mod args;
mod exit_status;
mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let result = run::run(&args)?;
    report::print(&result, args.verbose);

    Ok(ExitStatus::Success)
}
