//! Command-line arguments for the stock analyzer.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use stock_common::config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_LANG, DEFAULT_REGION};
use stock_common::report::MissingStyle;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// API key for the quote service.
    #[arg(long, env = "YFAPI_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Root URL of the quote service.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Market region of the lookup.
    #[arg(long, default_value = DEFAULT_REGION)]
    pub region: String,

    /// Response language of the lookup.
    #[arg(long, default_value = DEFAULT_LANG)]
    pub lang: String,

    /// Path to a text file with tickers; skips the interactive prompts.
    /// Tickers may be separated by commas, spaces, or new lines.
    #[arg(long)]
    pub path: Option<String>,

    /// Rendering of tickers the service does not know.
    #[arg(long, value_enum, default_value_t = MissingStyle::Blank)]
    pub missing: MissingStyle,
}

impl Args {
    /// Endpoint settings taken from the arguments.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.trim().to_string(),
            region: self.region.trim().to_string(),
            lang: self.lang.trim().to_string(),
            api_key: self.api_key.trim().to_string(),
        }
    }
}
