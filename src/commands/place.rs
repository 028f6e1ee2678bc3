use crate::command::{Command, CommandResult, Mode};
use crate::commands::acknowledge;
use crate::context::SessionContext;

/// place <BMP_ID> <POS_X> <POS_Y> <BLEND_MODE>
/// Put a loaded image onto the current layer at the given position.
pub struct PlaceCommand;

impl Command for PlaceCommand {
    fn execute(&self, args: &[String], _ctx: &mut SessionContext) -> CommandResult {
        Ok(acknowledge(Mode::Place, args))
    }
}
