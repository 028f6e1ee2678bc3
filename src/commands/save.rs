use crate::command::{Command, CommandResult, Mode};
use crate::commands::acknowledge;
use crate::context::SessionContext;

/// save <FILE_PATH>
/// Write the composited canvas to a BMP file.
pub struct SaveCommand;

impl Command for SaveCommand {
    fn execute(&self, args: &[String], _ctx: &mut SessionContext) -> CommandResult {
        Ok(acknowledge(Mode::Save, args))
    }
}
