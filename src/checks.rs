//! Process-fatal checks for operations that must not partially complete.

/// Aborts the process when `condition` is false.
///
/// Prints a `fatal:` line to stderr tagged with the caller's file and line,
/// records it via `log`, and exits with a failure code. Reserved for the
/// one contract where a soft error would be worse than a crash: a partially
/// written output file.
#[track_caller]
pub fn check_exit(condition: bool, message: &str) {
    if !condition {
        let location = std::panic::Location::caller();
        log::error!("{message} ({location})");
        eprintln!("fatal: {message} ({location})");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::check_exit;

    #[test]
    fn passing_check_returns_normally() {
        check_exit(true, "never shown");
    }
}
