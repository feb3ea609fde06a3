//! `hostfs list` command.

use std::path::Path;

use crate::context::ToolContext;
use crate::paths;

/// Execute the `list` command.
///
/// # Errors
///
/// Returns an error string if the directory cannot be enumerated.
pub fn run_with_context(ctx: &ToolContext, dir: &Path, recursive: bool) -> Result<(), String> {
    let listed = if recursive {
        ctx.fs.get_files_recursive(dir)
    } else {
        ctx.fs.get_files_non_recursive(dir)
    };
    let entries = listed.map_err(|e| e.to_string())?;

    paths::print_paths(&entries);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryFileSystem;

    #[test]
    fn lists_a_seeded_directory() {
        let ctx = ToolContext::in_memory(MemoryFileSystem::with_files(&[
            ("/work/a.txt", "a"),
            ("/work/sub/b.txt", "b"),
        ]));
        assert!(run_with_context(&ctx, Path::new("/work"), false).is_ok());
        assert!(run_with_context(&ctx, Path::new("/work"), true).is_ok());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let ctx = ToolContext::in_memory(MemoryFileSystem::new());
        let result = run_with_context(&ctx, Path::new("/missing"), false);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not found"));
    }
}
