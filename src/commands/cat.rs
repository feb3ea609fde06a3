//! `hostfs cat` command.

use std::path::Path;

use crate::context::ToolContext;

/// Execute the `cat` command.
///
/// # Errors
///
/// Returns an error string if the file cannot be read.
pub fn run_with_context(ctx: &ToolContext, file: &Path) -> Result<(), String> {
    let contents = ctx.fs.read_contents(file).map_err(|e| e.to_string())?;
    print!("{contents}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryFileSystem;

    #[test]
    fn prints_an_existing_file() {
        let ctx = ToolContext::in_memory(MemoryFileSystem::with_files(&[("/a.txt", "alpha\n")]));
        assert!(run_with_context(&ctx, Path::new("/a.txt")).is_ok());
    }

    #[test]
    fn missing_file_is_an_error() {
        let ctx = ToolContext::in_memory(MemoryFileSystem::new());
        let result = run_with_context(&ctx, Path::new("/missing.txt"));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not found"));
    }
}
