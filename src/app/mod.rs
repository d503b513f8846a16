//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::Model;
pub use update::{Message, update};

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    manual_open: bool,
    mouse_enabled: bool,
}

impl App {
    pub const fn new() -> Self {
        Self {
            manual_open: false,
            mouse_enabled: true,
        }
    }

    /// Start with the manual already open.
    #[must_use]
    pub const fn with_manual_open(mut self, open: bool) -> Self {
        self.manual_open = open;
        self
    }

    /// Enable or disable mouse capture.
    #[must_use]
    pub const fn with_mouse_enabled(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
