//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

/// Walk, resolve and stage merge conflicts in a Git repository
#[derive(Debug, Parser)]
#[command(name = "knot", version, about)]
pub struct Cli {
    /// Repository (or any directory inside it); defaults to the current directory
    pub path: Option<PathBuf>,

    /// Configuration file (default: <config dir>/knot/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log filter, overrides RUST_LOG and the config file (e.g. debug, knot=trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}
