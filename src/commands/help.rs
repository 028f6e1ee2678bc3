use crate::command::{Command, CommandResult, Reply, COMMANDS};
use crate::context::SessionContext;

/// help
/// List every command together with the arguments it expects.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, _args: &[String], _ctx: &mut SessionContext) -> CommandResult {
        Ok(Reply::Output(command_reference()))
    }
}

/// One line per command: name followed by its argument synopsis.
pub fn command_reference() -> String {
    let mut output = String::from("Available commands:\n");
    for spec in COMMANDS {
        if spec.synopsis.is_empty() {
            output.push_str(&format!("  {}\n", spec.name));
        } else {
            output.push_str(&format!("  {} {}\n", spec.name, spec.synopsis));
        }
    }
    // no trailing newline, the loop adds one
    output.pop();
    output
}
