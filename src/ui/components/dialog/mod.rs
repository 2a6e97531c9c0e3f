//! Dialog components for TUI

mod base;
mod error_dialog;

pub use error_dialog::{ErrorDialog, DEFAULT_MAX_WIDTH};
