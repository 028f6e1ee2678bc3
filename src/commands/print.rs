use crate::command::{Command, CommandResult, Mode};
use crate::commands::acknowledge;
use crate::context::SessionContext;

/// print
/// Render the canvas to the terminal.
pub struct PrintCommand;

impl Command for PrintCommand {
    fn execute(&self, args: &[String], _ctx: &mut SessionContext) -> CommandResult {
        Ok(acknowledge(Mode::Print, args))
    }
}
