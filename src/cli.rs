//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `hostfs`.
#[derive(Debug, Parser)]
#[command(name = "hostfs", version, about = "Inspect files through one filesystem boundary")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List directory entries.
    List {
        /// Directory to list.
        dir: PathBuf,
        /// Descend into subdirectories.
        #[arg(long)]
        recursive: bool,
    },
    /// Find the nearest ancestor directory containing a file.
    FindUp {
        /// File name to search for.
        filename: String,
        /// Directory to start from; defaults to the current directory.
        #[arg(long)]
        from: Option<PathBuf>,
    },
    /// Check a name for characters unsafe on common filesystems.
    CheckName {
        /// Candidate file or directory name.
        name: String,
    },
    /// Print a file's contents.
    Cat {
        /// File to print.
        file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_list_subcommand() {
        let cli = Cli::parse_from(["hostfs", "list", "/tmp", "--recursive"]);
        assert!(matches!(cli.command, Command::List { recursive: true, .. }));
    }

    #[test]
    fn parses_find_up_subcommand() {
        let cli = Cli::parse_from(["hostfs", "find-up", "Cargo.toml", "--from", "/tmp"]);
        let Command::FindUp { filename, from } = cli.command else {
            panic!("expected find-up");
        };
        assert_eq!(filename, "Cargo.toml");
        assert!(from.is_some());
    }

    #[test]
    fn parses_check_name_subcommand() {
        let cli = Cli::parse_from(["hostfs", "check-name", "notes.txt"]);
        assert!(matches!(cli.command, Command::CheckName { .. }));
    }

    #[test]
    fn parses_cat_subcommand() {
        let cli = Cli::parse_from(["hostfs", "cat", "/tmp/a.txt"]);
        assert!(matches!(cli.command, Command::Cat { .. }));
    }
}
