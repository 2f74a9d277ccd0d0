//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::GitError;
use super::constants::{self, commands, errors, flags, special};
use super::parser::parse_version;

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// git binary to invoke
    program: String,
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self {
            program: constants::GIT_COMMAND.to_string(),
            repo_path: None,
        }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
            ..Self::new()
        }
    }

    /// Use a different git binary
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub(crate) fn repo_path(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }

    pub(crate) fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }
        cmd
    }

    /// Run a git command with the given arguments
    ///
    /// Messages are forced to the C locale so error patterns can be matched.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = self.command();
        cmd.args(args).env("LC_ALL", "C");
        debug!(program = %self.program, ?args, "running git");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Get the git version (e.g. "2.43.0")
    pub fn version(&self) -> Result<String, GitError> {
        let output = self.run(&[flags::VERSION])?;
        let (major, minor, patch) = parse_version(&output)
            .ok_or_else(|| GitError::ParseError(format!("unrecognised version: {}", output.trim())))?;
        Ok(format!("{}.{}.{}", major, minor, patch))
    }

    /// Check if git version is supported
    pub fn check_version(&self) -> Result<(), GitError> {
        let version = self.version()?;
        if !is_version_supported(&version, constants::MIN_GIT_VERSION) {
            return Err(GitError::UnsupportedVersion {
                version,
                minimum: constants::MIN_GIT_VERSION.to_string(),
            });
        }
        Ok(())
    }

    /// Absolute path of the working tree root
    pub fn toplevel(&self) -> Result<PathBuf, GitError> {
        let output = self.run(&[commands::REV_PARSE, flags::SHOW_TOPLEVEL])?;
        let root = output.trim_end_matches(['\n', '\r']);
        if root.is_empty() {
            return Err(GitError::ParseError(
                "rev-parse returned an empty toplevel".to_string(),
            ));
        }
        Ok(PathBuf::from(root))
    }

    /// Run `git status` in NUL-terminated porcelain v1 form
    pub fn status_raw(&self) -> Result<String, GitError> {
        self.run(&[
            commands::STATUS,
            flags::PORCELAIN_V1,
            flags::NUL_TERMINATED,
            flags::NO_UNTRACKED,
        ])
    }

    /// Run `git add -- <path>`
    pub fn add(&self, path: &str) -> Result<(), GitError> {
        self.run(&[commands::ADD, flags::END_OF_OPTIONS, path])?;
        Ok(())
    }

    /// The editor git itself would launch
    pub fn editor(&self) -> Result<String, GitError> {
        let output = self.run(&[commands::VAR, special::EDITOR_VAR])?;
        Ok(output.trim().to_string())
    }
}

/// Compare version strings (simple semver comparison)
fn is_version_supported(version: &str, minimum: &str) -> bool {
    let parse = |v: &str| -> Option<(u32, u32, u32)> {
        let mut parts = v.split('.').map(|p| p.parse::<u32>().ok());
        let major = parts.next()??;
        let minor = parts.next()??;
        let patch = parts.next().flatten().unwrap_or(0);
        Some((major, minor, patch))
    };

    match (parse(version), parse(minimum)) {
        (Some(v), Some(m)) => v >= m,
        _ => false,
    }
}
