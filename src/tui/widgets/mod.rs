//! Reusable TUI widgets.

pub mod alert;
pub mod controls;
pub mod summary;

pub use alert::{Alert, draw_alert};
pub use controls::{
    CONTROL_HEIGHT, draw_button, draw_picker, draw_slider, draw_text_input, draw_toggle,
};
pub use summary::{SUMMARY_HEIGHT, draw_summary};
