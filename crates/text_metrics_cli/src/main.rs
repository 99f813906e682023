//! `wordcount`: approximate word counts for markup-bearing text.
mod app;
mod config;

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Parser;

use crate::config::CliConfig;

fn main() -> Result<()> {
    let config = CliConfig::parse();
    metrics_logging::initialize(
        config.log_destination(),
        config.log_level(),
        Path::new(metrics_logging::DEFAULT_LOG_FILE),
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    app::run(&config, stdin.lock(), &mut stdout.lock())
}
