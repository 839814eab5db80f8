use clap::{Parser, ValueEnum};
use soonami_config::{DisplayConfig, DisplayFormat, TimeZoneChoice};

/// Output shape accepted on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for DisplayFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Top-level CLI parser for the `soonami` binary.
#[derive(Debug, Parser)]
#[command(
    name = "soonami",
    version,
    about = "Soonami - show the most significant recent earthquake"
)]
pub struct Cli {
    /// Output format: text, json (overrides display.format)
    #[arg(short, long)]
    pub format: Option<FormatArg>,

    /// Show the event time in UTC instead of the local zone
    #[arg(long)]
    pub utc: bool,

    /// Quiet mode (errors only in the log)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Never show the fetch spinner
    #[arg(long)]
    pub no_progress: bool,
}

impl Cli {
    /// Layer command-line choices over the loaded display config.
    pub fn apply_overrides(&self, display: &mut DisplayConfig) {
        if let Some(format) = self.format {
            display.format = format.into();
        }
        if self.utc {
            display.timezone = TimeZoneChoice::Utc;
        }
    }
}
