//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and view management
//! - `input`: Key event handling
//! - `actions`: Operations on the conflict session
//! - `render`: UI rendering
//! - `editor`: External editor launcher

mod actions;
mod editor;
mod input;
mod render;
mod state;

pub use editor::ExternalEditor;
pub use state::{App, AppOptions, View};
