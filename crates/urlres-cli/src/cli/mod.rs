//! CLI for the urlres URL resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlres_core::config;

use commands::run_resolve;

/// Top-level CLI for urlres.
#[derive(Debug, Parser)]
#[command(name = "urlres")]
#[command(about = "urlres: inspect where a URL resolves to", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the XDG config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch one URL (without following redirects) and print its outcome record.
    Resolve {
        /// HTTP/HTTPS URL to resolve.
        url: String,
        /// Print the record as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { url, json } => run_resolve(&cfg, &url, json)?,
        }

        Ok(())
    }
}
