//! Quote records decoded from the lookup response and their matching to requested tickers.
//!
//! The response is a JSON document shaped like
//! `{"quoteResponse": {"result": [{"symbol": "AAPL", "regularMarketPrice": 150.1, ...}]}}`.
//! Each element of `result` becomes a [`QuoteRecord`]; every other field of the element is
//! kept as-is so records can carry more metrics than the table shows. An undecodable body
//! fails the whole query.

use log::{debug, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::AnalyzerError;
use crate::metric::Metric;
use crate::tickers::{Ticker, TickerRequest};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteEnvelope {
    quote_response: QuoteResults,
}

#[derive(Debug, Deserialize)]
struct QuoteResults {
    result: Vec<QuoteRecord>,
}

/// Market data for a single symbol, immutable once decoded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuoteRecord {
    /// Symbol the service reports for this record.
    pub symbol: String,
    /// Remaining fields of the record keyed by their JSON name.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl QuoteRecord {
    /// Numeric value of `metric`; `None` when the field is absent, `null` or not a number.
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        self.fields
            .get(metric.to_string().as_str())
            .and_then(Value::as_f64)
    }
}

/// Decodes a lookup response body into its quote records.
pub fn parse_records(body: &str) -> Result<Vec<QuoteRecord>, AnalyzerError> {
    let envelope: QuoteEnvelope = serde_json::from_str(body)?;
    Ok(envelope.quote_response.result)
}

/// Requested tickers paired with their matched record, in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteSet {
    entries: Vec<(Ticker, Option<QuoteRecord>)>,
}

impl QuoteSet {
    /// Pairs each requested ticker with the first record whose symbol equals it exactly.
    pub fn match_records(request: &TickerRequest, records: &[QuoteRecord]) -> Self {
        let entries = request
            .tickers()
            .iter()
            .map(|ticker| {
                let record = records.iter().find(|r| r.symbol == ticker.as_str()).cloned();
                match &record {
                    Some(_) => debug!("Matched quote record for {}", ticker),
                    None => warn!("No quote record for {}", ticker),
                }
                (ticker.clone(), record)
            })
            .collect();
        Self { entries }
    }

    /// Decodes `body` and matches it against `request`.
    pub fn from_response(request: &TickerRequest, body: &str) -> Result<Self, AnalyzerError> {
        let records = parse_records(body)?;
        debug!("Decoded {} quote records", records.len());
        Ok(Self::match_records(request, &records))
    }

    /// All entries in request order.
    pub fn entries(&self) -> &[(Ticker, Option<QuoteRecord>)] {
        &self.entries
    }

    /// Tickers without a matching record, in request order.
    pub fn unmatched(&self) -> impl Iterator<Item = &Ticker> {
        self.entries
            .iter()
            .filter(|(_, record)| record.is_none())
            .map(|(ticker, _)| ticker)
    }

    /// Number of entries, equal to the number of requested tickers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` for an empty request.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
