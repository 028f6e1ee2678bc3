use crate::command::{Command, CommandResult, Mode};
use crate::commands::acknowledge;
use crate::context::SessionContext;

/// load <PATH>
/// Read a BMP file from disk and add it to the list of loaded images.
pub struct LoadCommand;

impl Command for LoadCommand {
    fn execute(&self, args: &[String], _ctx: &mut SessionContext) -> CommandResult {
        Ok(acknowledge(Mode::Load, args))
    }
}
