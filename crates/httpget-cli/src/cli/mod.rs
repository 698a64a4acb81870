//! CLI for httpget.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use httpget_core::config;
use httpget_core::Mechanism;
use std::path::Path;

use commands::{run_compare, run_get, run_normalize};

/// Top-level CLI for httpget.
#[derive(Debug, Parser)]
#[command(name = "httpget")]
#[command(about = "httpget: fetch a page over libcurl or reqwest and compare the two", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a URL and print the body.
    Get {
        /// HTTP/HTTPS URL to fetch.
        url: String,
        /// Request mechanism: curl or reqwest (defaults to the configured one).
        #[arg(long, short)]
        mechanism: Option<Mechanism>,
        /// Print the normalized echo page instead of the raw body.
        #[arg(long)]
        normalize: bool,
    },

    /// Fetch a URL with both mechanisms and check the normalized bodies match.
    Compare {
        /// HTTP/HTTPS URL of an echo endpoint.
        url: String,
    },

    /// Print the normalized form of a saved echo page.
    Normalize {
        /// Path to the saved HTML.
        path: String,
    },
}

impl CliCommand {
    /// Returns the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get {
                url,
                mechanism,
                normalize,
            } => run_get(&cfg, &url, mechanism, normalize),
            CliCommand::Compare { url } => run_compare(&cfg, &url),
            CliCommand::Normalize { path } => run_normalize(Path::new(&path)),
        }
    }
}
