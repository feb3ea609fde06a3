//! `hostfs find-up` command.

use std::path::Path;

use crate::context::ToolContext;

/// Execute the `find-up` command.
///
/// Prints the first ancestor directory (the starting directory included)
/// containing `filename`.
///
/// # Errors
///
/// Returns an error string if no ancestor up to the root contains the file,
/// or if the current directory cannot be determined.
pub fn run_with_context(
    ctx: &ToolContext,
    filename: &str,
    from: Option<&Path>,
) -> Result<(), String> {
    let start = match from {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()
            .map_err(|e| format!("cannot determine current directory: {e}"))?,
    };

    let found = ctx.fs.find_file_recursively_up(&start, filename);
    if found.as_os_str().is_empty() {
        return Err(format!("{filename} not found in {} or any parent", start.display()));
    }
    println!("{}", found.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryFileSystem;

    #[test]
    fn finds_marker_in_an_ancestor() {
        let ctx = ToolContext::in_memory(MemoryFileSystem::with_files(&[
            ("/repo/tool.toml", "t"),
            ("/repo/a/b/x.txt", "x"),
        ]));
        assert!(run_with_context(&ctx, "tool.toml", Some(Path::new("/repo/a/b"))).is_ok());
    }

    #[test]
    fn miss_is_reported_as_an_error() {
        let ctx = ToolContext::in_memory(MemoryFileSystem::with_files(&[("/repo/a/x.txt", "x")]));
        let result = run_with_context(&ctx, "tool.toml", Some(Path::new("/repo/a")));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("tool.toml"));
    }
}
