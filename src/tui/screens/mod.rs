//! TUI screen implementations.

pub mod account_form;
pub mod help;

pub use account_form::{AccountFormState, Control, draw_account_form};
pub use help::{HelpState, draw_help};
