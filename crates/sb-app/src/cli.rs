use std::path::PathBuf;

use clap::Parser;

/// sb: a minimal tabbed web browser.
#[derive(Parser, Debug)]
#[command(name = "sb", version, about, disable_version_flag = true)]
pub struct Args {
    /// Page to open in the first tab instead of the home page.
    pub uri: Option<String>,

    /// Print version and exit.
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `sb=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub dump_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

/// The `--version` line.
pub fn version_line() -> String {
    format!("sb {}", env!("CARGO_PKG_VERSION"))
}
