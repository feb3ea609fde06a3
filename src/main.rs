//! Binary entrypoint for the `hostfs` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    match hostfs::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
