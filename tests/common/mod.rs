//! Common test utilities for integration and scenario tests.
//!
//! This module provides helpers for creating temporary git repositories
//! with merge conflicts, and an in-memory backend for engine tests.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod memory_backend;
pub mod test_repo;

pub use memory_backend::MemoryBackend;
pub use test_repo::TestRepo;

/// Whether a usable `git` binary is on PATH
pub fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

/// Return early from a test when git is not installed
#[macro_export]
macro_rules! skip_if_no_git {
    () => {
        if !$crate::common::git_available() {
            eprintln!("skipping: git not available");
            return;
        }
    };
}
