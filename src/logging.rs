//! Log file setup
//!
//! The terminal belongs to the UI, so tracing output goes to a file.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Default log file, `<data dir>/knot/knot.log`
pub fn default_log_file() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("knot").join("knot.log"))
}

/// Pick the filter directive: command line, then `RUST_LOG`, then config
pub fn filter_directive(cli_level: Option<&str>, env: Option<&str>, config_level: &str) -> String {
    cli_level
        .or(env.filter(|v| !v.trim().is_empty()))
        .unwrap_or(config_level)
        .to_string()
}

/// Install the global subscriber
///
/// Returns `None` when no log file location is available. The returned guard
/// must be held until exit so buffered lines are flushed.
pub fn init(cli_level: Option<&str>, config: &LogConfig) -> std::io::Result<Option<WorkerGuard>> {
    let Some(path) = config.file.clone().or_else(default_log_file) else {
        return Ok(None);
    };
    let (dir, file_name) = split_log_path(&path)?;
    std::fs::create_dir_all(&dir)?;

    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(cli_level, env.as_deref(), &config.level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .init();

    Ok(Some(guard))
}

fn split_log_path(path: &Path) -> std::io::Result<(PathBuf, PathBuf)> {
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("log file path has no file name: {}", path.display()),
        )
    })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, PathBuf::from(file_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_precedence() {
        assert_eq!(filter_directive(Some("debug"), Some("warn"), "info"), "debug");
        assert_eq!(filter_directive(None, Some("warn"), "info"), "warn");
        assert_eq!(filter_directive(None, Some(" "), "error"), "error");
        assert_eq!(filter_directive(None, None, "info"), "info");
    }

    #[test]
    fn test_split_log_path() {
        let (dir, file) = split_log_path(Path::new("/var/log/knot.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/var/log"));
        assert_eq!(file, PathBuf::from("knot.log"));

        let (dir, _) = split_log_path(Path::new("knot.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));

        assert!(split_log_path(Path::new("/")).is_err());
    }
}
