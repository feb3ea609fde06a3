//! Path helpers that perform no I/O of their own.

use std::fmt::Write as _;
use std::path::PathBuf;

/// Characters rejected by the portability check — the common
/// Windows-reserved set, applied on every host.
const INVALID_FILESYSTEM_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Whether `name` contains a character that is unsafe in a file name on
/// some supported filesystem.
///
/// The check is about portability of the name, not the host's own rules,
/// so the character set is fixed regardless of OS. Scans the whole string.
#[must_use]
pub fn has_invalid_chars_for_filesystem(name: &str) -> bool {
    name.chars().any(|c| INVALID_FILESYSTEM_CHARS.contains(&c))
}

/// Renders paths one per line, indented, surrounded by blank lines.
#[must_use]
pub fn format_paths(paths: &[PathBuf]) -> String {
    let mut out = String::from("\n");
    for path in paths {
        let _ = writeln!(out, "    {}", path.display());
    }
    out.push('\n');
    out
}

/// Prints a sequence of paths for a human, one per line.
pub fn print_paths(paths: &[PathBuf]) {
    print!("{}", format_paths(paths));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reserved_character_is_rejected() {
        for c in ['/', '\\', ':', '*', '?', '"', '<', '>', '|'] {
            let name = format!("report{c}2024");
            assert!(has_invalid_chars_for_filesystem(&name), "{c} should be rejected");
        }
    }

    #[test]
    fn plain_names_are_accepted() {
        assert!(!has_invalid_chars_for_filesystem("report2024"));
        assert!(!has_invalid_chars_for_filesystem("notes.txt"));
        assert!(!has_invalid_chars_for_filesystem(""));
    }

    #[test]
    fn format_paths_frames_with_blank_lines() {
        let rendered = format_paths(&[PathBuf::from("/a/b"), PathBuf::from("/c")]);
        assert_eq!(rendered, "\n    /a/b\n    /c\n\n");
    }

    #[test]
    fn format_paths_of_nothing_is_just_the_frame() {
        assert_eq!(format_paths(&[]), "\n\n");
    }
}
