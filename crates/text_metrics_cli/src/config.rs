//! Command-line flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use metrics_logging::{LevelFilter, LogDestination};

/// Count words in HTML or plain-text files, ignoring markup tags.
#[derive(Parser, Debug)]
#[command(name = "wordcount", version, about)]
pub struct CliConfig {
    /// Files to count. Reads stdin when empty or for `-`; stdin is read once
    /// and a repeated `-` repeats its count.
    pub paths: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Count whitespace tokens without stripping markup.
    #[arg(long)]
    pub plain: bool,

    /// Charset label or content-type to decode input with.
    #[arg(long, env = "WORDCOUNT_CHARSET")]
    pub charset: Option<String>,

    /// Where to send log output.
    #[arg(long, value_enum, default_value_t = LogTarget::Off)]
    pub log: LogTarget,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Off,
    Terminal,
    File,
    Both,
}

impl CliConfig {
    pub fn log_destination(&self) -> LogDestination {
        match self.log {
            LogTarget::Off => LogDestination::Off,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
