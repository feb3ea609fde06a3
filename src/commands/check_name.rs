//! `hostfs check-name` command.

use crate::paths;

/// Execute the `check-name` command.
///
/// # Errors
///
/// Returns an error string if the name contains a character from the
/// portability-reserved set.
pub fn run(name: &str) -> Result<(), String> {
    if paths::has_invalid_chars_for_filesystem(name) {
        return Err(format!("'{name}' contains characters unsafe for filesystems"));
    }
    println!("ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn plain_name_passes() {
        assert!(run("notes.txt").is_ok());
    }

    #[test]
    fn reserved_character_fails() {
        let result = run("a:b");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("unsafe"));
    }
}
