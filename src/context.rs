use crate::config::CanvasSize;

/// State handed to every command handler.
///
/// The layer tree and the registry of loaded BMPs will live here once the
/// image commands exist.
pub struct SessionContext {
    pub canvas: CanvasSize,
    pub dispatched: usize, // commands run so far
}

impl SessionContext {
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            dispatched: 0,
        }
    }

    pub fn banner(&self) -> String {
        format!(
            "Welcome to bmpshell!\nCanvas size: {}\nType 'help' to list the available commands.",
            self.canvas
        )
    }
}
