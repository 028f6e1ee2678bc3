//! Command handlers, one per mode.
//!
//! Only `help` and `quit` do real work today. The image commands print a
//! placeholder line naming their mode and return to the prompt.

use crate::command::{Mode, Reply};

pub mod bmps;
pub mod crop;
pub mod help;
pub mod load;
pub mod place;
pub mod print;
pub mod quit;
pub mod save;
pub mod switch;
pub mod tree;
pub mod undo;

/// Placeholder reply for a command whose feature is not built yet.
pub(crate) fn acknowledge(mode: Mode, args: &[String]) -> Reply {
    log::debug!("{} called with {:?}", mode, args);
    Reply::Output(format!("{} mode selected", mode))
}
