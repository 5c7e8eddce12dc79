//! Fetching the raw quote response over HTTP.
//!
//! One blocking GET per run, no retries. A non-success status is fatal and its body is
//! never handed to the matcher.
use log::{debug, info};
use reqwest::blocking::Client;

use crate::config::ApiConfig;
use crate::error::AnalyzerError;
use crate::net::{API_KEY_HEADER, quote_url};
use crate::tickers::TickerRequest;

/// Source of raw quote lookup responses.
pub trait QuoteSource {
    /// Returns the response body for one lookup of all tickers in `request`.
    fn fetch(&self, request: &TickerRequest) -> Result<String, AnalyzerError>;
}

/// HTTP client for the quote lookup endpoint.
pub struct QuoteFetcher {
    client: Client,
    api: ApiConfig,
}

impl QuoteFetcher {
    /// Creates a fetcher with the HTTP client defaults.
    pub fn new(api: ApiConfig) -> Result<Self, AnalyzerError> {
        let client = Client::builder().build()?;
        Ok(Self { client, api })
    }
}

impl QuoteSource for QuoteFetcher {
    fn fetch(&self, request: &TickerRequest) -> Result<String, AnalyzerError> {
        let url = quote_url(&self.api, request);
        info!("Requesting quotes for {} tickers", request.len());
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.api.api_key.as_str())
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyzerError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        debug!("Received {} bytes", body.len());
        Ok(body)
    }
}
