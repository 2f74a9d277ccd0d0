//! Knot - merge conflict resolver for Git
//!
//! A TUI for walking through the conflict hunks left by a merge, picking a
//! side or editing by hand, and staging files once they are clean.
//!
//! This library provides:
//! - [`conflict`]: Marker parsing, conflict index, resolution and staging
//! - [`git`]: Git command execution and the repository backend
//! - [`app`]: Application state and logic
//! - [`config`]: User configuration
//! - [`keys`]: Key binding definitions
//! - [`model`]: Domain models
//! - [`ui`]: User interface components

pub mod app;
pub mod cli;
pub mod config;
pub mod conflict;
pub mod git;
pub mod keys;
pub mod logging;
pub mod model;
pub mod ui;
