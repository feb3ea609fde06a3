//! Command dispatch and handlers.

pub mod cat;
pub mod check_name;
pub mod find_up;
pub mod list;

use crate::cli::Command;
use crate::context::ToolContext;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = ToolContext::live();
    dispatch_with_context(command, &ctx)
}

/// Dispatch a command with the given tool context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(command: &Command, ctx: &ToolContext) -> Result<(), String> {
    match command {
        Command::List { dir, recursive } => list::run_with_context(ctx, dir, *recursive),
        Command::FindUp { filename, from } => {
            find_up::run_with_context(ctx, filename, from.as_deref())
        }
        Command::CheckName { name } => check_name::run(name),
        Command::Cat { file } => cat::run_with_context(ctx, file),
    }
}
