//! Run configuration passed explicitly into each component.

use strum::IntoEnumIterator;

use crate::metric::Metric;

/// Maximum number of tickers in one query.
pub const MAX_STOCKS: usize = 10;
/// Default quote service root.
pub const DEFAULT_BASE_URL: &str = "https://yfapi.net";
/// Default market region of the quote lookup.
pub const DEFAULT_REGION: &str = "US";
/// Default response language of the quote lookup.
pub const DEFAULT_LANG: &str = "en";

/// Limits and table layout of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Upper bound for the number of tickers.
    pub max_stocks: usize,
    /// Table rows, in display order.
    pub metrics: Vec<Metric>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_stocks: MAX_STOCKS,
            metrics: Metric::iter().collect(),
        }
    }
}

/// Outcome of applying `max_stocks` to a requested count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockCount {
    /// The count was within limits (zero for non-positive requests).
    Accepted(usize),
    /// The count exceeded the limit and was lowered to it.
    Clamped(usize),
}

impl StockCount {
    /// Effective number of tickers to collect.
    pub fn value(self) -> usize {
        match self {
            StockCount::Accepted(n) | StockCount::Clamped(n) => n,
        }
    }
}

impl AnalyzerConfig {
    /// Applies the stock limit to a count typed by the user.
    ///
    /// Zero and negative counts yield an empty request.
    pub fn clamp_count(&self, requested: i64) -> StockCount {
        match usize::try_from(requested) {
            Err(_) => StockCount::Accepted(0),
            Ok(n) if n > self.max_stocks => StockCount::Clamped(self.max_stocks),
            Ok(n) => StockCount::Accepted(n),
        }
    }
}

/// Where and how to reach the quote service.
#[derive(Clone)]
pub struct ApiConfig {
    /// Service root without a trailing slash, e.g. `https://yfapi.net`.
    pub base_url: String,
    /// Value of the `region` query parameter.
    pub region: String,
    /// Value of the `lang` query parameter.
    pub lang: String,
    /// Credential sent in the `x-api-key` header.
    pub api_key: String,
}

impl ApiConfig {
    /// Configuration for the default endpoint with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            region: DEFAULT_REGION.to_string(),
            lang: DEFAULT_LANG.to_string(),
            api_key: api_key.into(),
        }
    }
}

// Keeps the key out of logs and panic messages.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("region", &self.region)
            .field("lang", &self.lang)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
