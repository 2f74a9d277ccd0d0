//! Interactive commands
//!
//! These spawn a child process with inherited stdio, requiring the caller to
//! disable raw mode before invocation. Separated from executor.rs because
//! the I/O pattern differs (Stdio::inherit vs captured output).

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use super::executor::GitExecutor;

impl GitExecutor {
    /// Open `file` in an editor
    ///
    /// `configured` wins when set; otherwise git's own choice is used
    /// (`git var GIT_EDITOR`). The editor string may carry arguments, e.g.
    /// `code --wait`.
    pub fn open_in_editor(&self, file: &Path, configured: Option<&str>) -> io::Result<ExitStatus> {
        let editor = match configured.map(str::trim).filter(|c| !c.is_empty()) {
            Some(cmd) => cmd.to_string(),
            None => self
                .editor()
                .map_err(|e| io::Error::other(e.to_string()))?,
        };

        let mut cmd = editor_command(&editor)?;
        cmd.arg(file)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
    }
}

/// Split an editor string into program and leading arguments
fn editor_command(editor: &str) -> io::Result<Command> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "no editor configured"))?;
    let mut cmd = Command::new(program);
    cmd.args(parts);
    Ok(cmd)
}
