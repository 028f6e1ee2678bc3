use crate::error::{ShellError, ShellResult};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Canvas dimensions, fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> ShellResult<Self> {
        if width == 0 || height == 0 {
            return Err(ShellError::InvalidCanvasSize);
        }
        Ok(Self { width, height })
    }

    /// Build the canvas from the raw positional arguments.
    pub fn from_args(args: &[String]) -> ShellResult<Self> {
        match args {
            [width, height] => {
                let width = parse_dimension(width).ok_or(ShellError::InvalidCanvasSize)?;
                let height = parse_dimension(height).ok_or(ShellError::InvalidCanvasSize)?;
                Self::new(width, height)
            }
            _ => Err(ShellError::WrongParameterCount),
        }
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

/// Digits only; a sign, space or any other character rejects the value.
pub fn parse_dimension(raw: &str) -> Option<u32> {
    if !DIGITS.is_match(raw) {
        return None;
    }
    raw.parse().ok()
}
