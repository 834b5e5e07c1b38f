//! Reusable TUI widgets.

pub mod alert;
pub mod status_bar;

pub use alert::{alert_actions, draw_alert};
pub use status_bar::{StatusBarContext, draw_status_bar, severity_color};
