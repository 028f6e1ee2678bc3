//! Error taxonomy for the shell.
//!
//! Every variant renders as the text that follows the `[ERROR] ` prefix on
//! the user's terminal. Only a handful are raised today; the rest belong to
//! the image commands that still print placeholders.

use std::io;
use thiserror::Error;

pub const ERROR_PREFIX: &str = "[ERROR]";

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Out of memory!")]
    OutOfMemory,
    #[error("Wrong number of parameters! Usage: bmpshell <width> <height>")]
    WrongParameterCount,
    #[error("Invalid canvas size specified!")]
    InvalidCanvasSize,
    #[error("Command unknown!")]
    UnknownCommand,
    // Same text as UnknownCommand; users see one message for both.
    #[error("Command unknown!")]
    WrongArgumentCount {
        command: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // Raised once the image commands are implemented.
    #[error("Cannot open file!")]
    CannotOpenFile,
    #[error("Invalid file!")]
    InvalidFile,
    #[error("Invalid BMP ID!")]
    InvalidBmpId,
    #[error("Invalid crop coordinates!")]
    InvalidCropCoordinates,
    #[error("Invalid blend mode!")]
    InvalidBlendMode,
    #[error("Invalid layer ID!")]
    InvalidLayerId,
    #[error("Invalid placement!")]
    InvalidPlacement,
    #[error("Nothing to undo!")]
    NothingToUndo,
}

impl ShellError {
    /// Errors that end the process instead of returning to the prompt.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ShellError::OutOfMemory | ShellError::Io(_))
    }

    /// Process exit code for errors that terminate the program.
    ///
    /// Local errors never reach `main`, so they fall back to `1` as well.
    pub fn exit_code(&self) -> u8 {
        match self {
            ShellError::WrongParameterCount => 2,
            ShellError::InvalidCanvasSize => 3,
            _ => 1,
        }
    }

    /// The single line printed for this error.
    pub fn report_line(&self) -> String {
        format!("{} {}", ERROR_PREFIX, self)
    }
}

impl From<std::collections::TryReserveError> for ShellError {
    fn from(_: std::collections::TryReserveError) -> Self {
        ShellError::OutOfMemory
    }
}

pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line_has_prefix() {
        assert_eq!(
            ShellError::UnknownCommand.report_line(),
            "[ERROR] Command unknown!"
        );
        assert_eq!(
            ShellError::OutOfMemory.report_line(),
            "[ERROR] Out of memory!"
        );
    }

    #[test]
    fn test_wrong_argument_count_reads_as_unknown() {
        let err = ShellError::WrongArgumentCount {
            command: "load",
            expected: 2,
            found: 3,
        };
        assert_eq!(err.to_string(), ShellError::UnknownCommand.to_string());
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ShellError::OutOfMemory.exit_code(), 1);
        assert_eq!(ShellError::WrongParameterCount.exit_code(), 2);
        assert_eq!(ShellError::InvalidCanvasSize.exit_code(), 3);
    }

    #[test]
    fn test_fatal_errors() {
        assert!(ShellError::OutOfMemory.is_fatal());
        assert!(ShellError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "closed")).is_fatal());
        assert!(!ShellError::UnknownCommand.is_fatal());
        assert!(!ShellError::InvalidCanvasSize.is_fatal());
    }
}
