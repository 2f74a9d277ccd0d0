//! View components
//!
//! Each view represents a screen in the application.

mod resolve;

pub use resolve::{ResolveAction, ResolveView};
