#![warn(missing_docs)]

//! `osd-alert` binary.

use anyhow::Result;
use clap::Parser;
use osd_alert::cli::Cli;
use osd_alert::AlertConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AlertConfig::from_file(path)?,
        None => AlertConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::debug!(
        "osd-alert starting: node={}, cluster={}",
        config.node_id,
        config.cluster_id
    );

    cli.run(&config)
}
