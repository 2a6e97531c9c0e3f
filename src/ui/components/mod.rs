//! Reusable UI components

mod button;
mod dialog;

pub use dialog::{ErrorDialog, DEFAULT_MAX_WIDTH as DEFAULT_DIALOG_WIDTH};
