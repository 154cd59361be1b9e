use std::path::PathBuf;

use clap::Parser;

use gitprobe::config::DEFAULT_TIMEOUT_SECS;

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON file containing an array of target URLs
    pub filename: PathBuf,

    /// Log each URL's classification as it is probed
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    /// Enable detailed debug logging (includes transport failures)
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Per-URL request timeout in seconds
    #[arg(short = 't', long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: f64,

    /// Maximum simultaneous in-flight probes
    #[arg(short = 'c', long, value_parser = clap::value_parser!(u16).range(1..=64), default_value_t = 8)]
    pub concurrency: u16,

    /// Emit every target's classification as JSON instead of plain lines
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
