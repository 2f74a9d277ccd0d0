//! git command execution layer
//!
//! Runs the git CLI to discover unmerged paths and stage resolved files, and
//! implements the conflict engine's [`Backend`](crate::conflict::Backend)
//! on top of it.

mod backend;
pub mod constants;
mod executor;
mod interactive;
/// Parser module (public for integration testing)
pub mod parser;

pub use backend::GitBackend;
pub use executor::GitExecutor;

use std::io;
use thiserror::Error;

/// Errors that can occur when executing git commands
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("Failed to parse git output: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,

    #[error("git {version} is too old (minimum {minimum})")]
    UnsupportedVersion { version: String, minimum: String },
}
