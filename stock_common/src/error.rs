//! Error types shared by the library and the analyzer binary.
//!
//! The `AnalyzerError` enum unifies the failure cases of a single run: console and file
//! I/O, ticker input, the HTTP transport and decoding of the quote response. Recoverable
//! conditions (clamped counts, unknown tickers, missing metrics) never reach this type;
//! everything that does is fatal for the run.
use std::io;

use thiserror::Error;

/// Unified error type shared by the library and the binary.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// I/O error originating from the console or a ticker file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Console input ended or could not be interpreted.
    #[error("Input error: {0}")]
    Input(String),

    /// A ticker symbol that is empty after trimming.
    #[error("Invalid ticker: {0:?}")]
    InvalidTicker(String),

    /// Error while reading tickers from a file.
    #[error("Parse tickers file error: {0}")]
    ParseTickersFile(String),

    /// Transport failure reported by the HTTP client.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The quote service answered with a non-success status code.
    #[error("Quote service returned HTTP {status}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: u16,
    },

    /// The response body is not a quote document.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
