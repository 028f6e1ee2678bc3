use crate::command::{Command, CommandResult, Mode};
use crate::commands::acknowledge;
use crate::context::SessionContext;

/// undo
/// Revert the last change to the canvas.
pub struct UndoCommand;

impl Command for UndoCommand {
    fn execute(&self, args: &[String], _ctx: &mut SessionContext) -> CommandResult {
        Ok(acknowledge(Mode::Undo, args))
    }
}
