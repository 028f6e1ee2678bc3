use crate::command::{Command, CommandResult, Mode};
use crate::commands::acknowledge;
use crate::context::SessionContext;

/// switch <LAYER_ID>
/// Make another layer the current one.
pub struct SwitchCommand;

impl Command for SwitchCommand {
    fn execute(&self, args: &[String], _ctx: &mut SessionContext) -> CommandResult {
        Ok(acknowledge(Mode::Switch, args))
    }
}
