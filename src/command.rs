use crate::context::SessionContext;
use crate::error::ShellError;
use crate::tokenizer::{count_words, next_word, words};
use std::collections::HashMap;
use std::fmt;

/// Every command the shell understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Quit,
    Help,
    Load,
    Crop,
    Place,
    Undo,
    Print,
    Switch,
    Tree,
    Bmps,
    Save,
}

pub struct CommandSpec {
    pub mode: Mode,
    pub name: &'static str,
    /// Token count including the command word itself.
    pub arity: usize,
    pub synopsis: &'static str,
}

/// Matched top to bottom. Rows are in `Mode` declaration order.
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec { mode: Mode::Quit, name: "quit", arity: 1, synopsis: "" },
    CommandSpec { mode: Mode::Help, name: "help", arity: 1, synopsis: "" },
    CommandSpec { mode: Mode::Load, name: "load", arity: 2, synopsis: "<PATH>" },
    CommandSpec {
        mode: Mode::Crop,
        name: "crop",
        arity: 6,
        synopsis: "<BMP_ID> <TOP_X> <TOP_Y> <BOTTOM_X> <BOTTOM_Y>",
    },
    CommandSpec {
        mode: Mode::Place,
        name: "place",
        arity: 5,
        synopsis: "<BMP_ID> <POS_X> <POS_Y> <BLEND_MODE>",
    },
    CommandSpec { mode: Mode::Undo, name: "undo", arity: 1, synopsis: "" },
    CommandSpec { mode: Mode::Print, name: "print", arity: 1, synopsis: "" },
    CommandSpec { mode: Mode::Switch, name: "switch", arity: 2, synopsis: "<LAYER_ID>" },
    CommandSpec { mode: Mode::Tree, name: "tree", arity: 1, synopsis: "" },
    CommandSpec { mode: Mode::Bmps, name: "bmps", arity: 1, synopsis: "" },
    CommandSpec { mode: Mode::Save, name: "save", arity: 2, synopsis: "<FILE_PATH>" },
];

impl Mode {
    pub fn spec(self) -> &'static CommandSpec {
        &COMMANDS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn arity(self) -> usize {
        self.spec().arity
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Work out which command `line` names.
///
/// The first word only has to *start with* a command name, so `quitnow`
/// resolves to `quit`. Unknown names and a wrong word count report the same
/// message to the user.
pub fn resolve(line: &str, word_count: usize) -> Result<Mode, ShellError> {
    let first = next_word(line);
    let spec = COMMANDS
        .iter()
        .find(|spec| first.starts_with(spec.name))
        .ok_or(ShellError::UnknownCommand)?;

    if word_count != spec.arity {
        return Err(ShellError::WrongArgumentCount {
            command: spec.name,
            expected: spec.arity,
            found: word_count,
        });
    }
    Ok(spec.mode)
}

/// Resolve a line and split off the arguments after the command word.
pub fn parse_line(line: &str) -> Result<(Mode, Vec<String>), ShellError> {
    let mode = resolve(line, count_words(line))?;
    let args = words(line).skip(1).map(str::to_string).collect();
    Ok((mode, args))
}

/// What a handler wants the loop to do next.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Quit,
}

pub type CommandResult = Result<Reply, ShellError>;

pub trait Command {
    fn execute(&self, args: &[String], ctx: &mut SessionContext) -> CommandResult;
}

pub struct CommandRegistry {
    commands: HashMap<Mode, Box<dyn Command + Send + Sync>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register_command(&mut self, mode: Mode, cmd: Box<dyn Command + Send + Sync>) {
        self.commands.insert(mode, cmd);
    }

    pub fn get(&self, mode: Mode) -> Option<&(dyn Command + Send + Sync)> {
        self.commands.get(&mode).map(|cmd| cmd.as_ref())
    }

    pub fn default_commands() -> Self {
        let mut reg = Self::new();
        reg.register_command(Mode::Quit, Box::new(crate::commands::quit::QuitCommand));
        reg.register_command(Mode::Help, Box::new(crate::commands::help::HelpCommand));
        reg.register_command(Mode::Load, Box::new(crate::commands::load::LoadCommand));
        reg.register_command(Mode::Crop, Box::new(crate::commands::crop::CropCommand));
        reg.register_command(Mode::Place, Box::new(crate::commands::place::PlaceCommand));
        reg.register_command(Mode::Undo, Box::new(crate::commands::undo::UndoCommand));
        reg.register_command(Mode::Print, Box::new(crate::commands::print::PrintCommand));
        reg.register_command(Mode::Switch, Box::new(crate::commands::switch::SwitchCommand));
        reg.register_command(Mode::Tree, Box::new(crate::commands::tree::TreeCommand));
        reg.register_command(Mode::Bmps, Box::new(crate::commands::bmps::BmpsCommand));
        reg.register_command(Mode::Save, Box::new(crate::commands::save::SaveCommand));
        reg
    }

    /// Run the handler registered for `mode`.
    pub fn dispatch(&self, mode: Mode, args: &[String], ctx: &mut SessionContext) -> CommandResult {
        match self.get(mode) {
            Some(command) => {
                ctx.dispatched += 1;
                command.execute(args, ctx)
            }
            None => {
                log::warn!("no handler registered for '{}'", mode);
                Err(ShellError::UnknownCommand)
            }
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::default_commands()
    }
}
