//! Command-line configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::hafas::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, HafasConfig};

/// Look up live journey status and trainset names.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the hafas-rest-api provider
    #[arg(long, env = "JOURNEY_PROVIDER_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "JOURNEY_PROVIDER_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// Language for service message texts
    #[arg(long, env = "JOURNEY_PROVIDER_LANGUAGE", global = true)]
    pub language: Option<String>,

    /// Serve trips from a directory of JSON files instead of the provider
    #[arg(long, env = "JOURNEY_MOCK_DIR", global = true)]
    pub mock_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch one journey's route polyline and service messages as JSON
    Journey {
        /// Provider journey identifier
        id: String,
    },

    /// Look up the name of a trainset
    Trainset {
        /// Trainset identifier, e.g. ICE0304
        id: String,

        /// JSON table to use instead of the bundled one
        #[arg(long)]
        names: Option<PathBuf>,
    },
}

impl Cli {
    /// Provider client configuration from the global options.
    pub fn hafas_config(&self) -> HafasConfig {
        let config = HafasConfig::new()
            .with_base_url(&self.base_url)
            .with_timeout(self.timeout);
        match &self.language {
            Some(language) => config.with_language(language),
            None => config,
        }
    }
}
