//! Core library entry for the `hostfs` CLI.
//!
//! All host filesystem access funnels through the `FileSystem` port in
//! [`ports`], backed by the live adapter in production and the in-memory
//! adapter in callers' tests.

pub mod adapters;
pub mod checks;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod paths;
pub mod ports;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_executes_check_name() {
        let result = run(["hostfs", "check-name", "notes.txt"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["hostfs", "unknown"]);
        assert!(result.is_err());
    }
}
