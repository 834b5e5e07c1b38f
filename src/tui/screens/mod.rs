//! TUI screen implementations.

pub mod console;
pub mod help;

pub use console::{ConsoleMessage, ConsoleState, ConsoleView, draw_console};
pub use help::{HelpState, draw_help};
