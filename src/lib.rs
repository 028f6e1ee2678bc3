// interactive shell for compositing BMP images onto a canvas
// only the command loop is real so far; image commands print placeholders
pub mod command;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod input;
pub mod shell;
pub mod tokenizer;

pub use command::{Command, CommandRegistry, CommandResult, Mode, Reply};
pub use config::CanvasSize;
pub use context::SessionContext;
pub use error::{ShellError, ShellResult};
pub use shell::Shell;
