use crate::command::{Command, CommandResult, Mode};
use crate::commands::acknowledge;
use crate::context::SessionContext;

/// bmps
/// List the loaded images with their IDs.
pub struct BmpsCommand;

impl Command for BmpsCommand {
    fn execute(&self, args: &[String], _ctx: &mut SessionContext) -> CommandResult {
        Ok(acknowledge(Mode::Bmps, args))
    }
}
