//! git-specific constants
//!
//! Command names, flags and output patterns used by the executor.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// Minimum supported git version (`--porcelain=v1` with `-z`)
pub const MIN_GIT_VERSION: &str = "2.11.0";

/// git subcommands
pub mod commands {
    pub const REV_PARSE: &str = "rev-parse";
    pub const STATUS: &str = "status";
    pub const ADD: &str = "add";
    pub const VAR: &str = "var";
}

/// git command flags
pub mod flags {
    /// Run as if started in the given directory
    pub const REPO_PATH: &str = "-C";
    pub const SHOW_TOPLEVEL: &str = "--show-toplevel";
    pub const PORCELAIN_V1: &str = "--porcelain=v1";
    /// NUL-terminated records, paths never quoted
    pub const NUL_TERMINATED: &str = "-z";
    pub const NO_UNTRACKED: &str = "--untracked-files=no";
    /// Separates options from pathspecs
    pub const END_OF_OPTIONS: &str = "--";
    pub const VERSION: &str = "--version";
}

/// Special git values
pub mod special {
    /// `git var` key that resolves GIT_EDITOR, core.editor, VISUAL and EDITOR
    pub const EDITOR_VAR: &str = "GIT_EDITOR";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
}
