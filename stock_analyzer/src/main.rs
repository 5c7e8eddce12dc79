//! Stock Analyzer: compares price, forward P/E and price-to-book of up to ten stocks.
//!
//! Asks for the number of stocks and the tickers (or reads them from a file), sends one
//! quote lookup for all of them, and prints a fixed-width comparison table to stdout.
//!
//! Usage example (CLI):
//! ```bash
//! YFAPI_KEY=... stock_analyzer
//! stock_analyzer --api-key ... --path ./tickers.txt --missing na
//! ```
//!
//! The ticker file should contain symbols separated by commas, spaces, or new lines.
//! See `stock_common::tickers` for details.
#![warn(missing_docs)]
mod args;
mod input;
mod session;

use crate::args::Args;
use crate::input::InputCollector;
use clap::Parser;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use stock_common::config::AnalyzerConfig;
use stock_common::fetcher::QuoteFetcher;
use stock_common::tickers::{Ticker, TickerParser, TickerRequest};
use stock_common::{AnalyzerError, Result};

fn main() -> Result<(), AnalyzerError> {
    init_logger();
    let args = Args::parse();
    let config = AnalyzerConfig::default();
    let mut stdout = io::stdout().lock();

    let tickers = match &args.path {
        Some(path) => read_ticker_file(&normalize_path(path), &config, &mut stdout)?,
        None => InputCollector::new(io::stdin().lock(), &mut stdout).collect(&config)?,
    };
    let request = TickerRequest::new(tickers, &config);
    info!("Tickers: {:?}", request.tickers());

    let fetcher = QuoteFetcher::new(args.api_config())?;
    session::run_report(&config, &request, &fetcher, args.missing, &mut stdout)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Reads tickers from `path`, keeping the first `max_stocks` of them.
fn read_ticker_file<W: Write>(
    path: &Path,
    config: &AnalyzerConfig,
    out: &mut W,
) -> Result<Vec<Ticker>> {
    let file = File::open(path)?;
    debug!("Reading tickers from {}", path.display());
    read_ticker_list(BufReader::new(file), config, out)
}

/// Parses a ticker list and applies the stock limit with the same warning as the prompt.
fn read_ticker_list<R: BufRead, W: Write>(
    reader: R,
    config: &AnalyzerConfig,
    out: &mut W,
) -> Result<Vec<Ticker>> {
    let mut tickers = Ticker::parse_from_file(reader)?;
    if tickers.len() > config.max_stocks {
        warn!(
            "{} tickers listed, keeping the first {}",
            tickers.len(),
            config.max_stocks
        );
        writeln!(out, "Only {} stocks are allowed.", config.max_stocks)?;
        tickers.truncate(config.max_stocks);
    }
    Ok(tickers)
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
