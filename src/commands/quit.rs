use crate::command::{Command, CommandResult, Reply};
use crate::context::SessionContext;

/// quit
/// Leave the shell.
pub struct QuitCommand;

impl Command for QuitCommand {
    fn execute(&self, _args: &[String], ctx: &mut SessionContext) -> CommandResult {
        log::info!("quitting after {} commands", ctx.dispatched);
        Ok(Reply::Quit)
    }
}
