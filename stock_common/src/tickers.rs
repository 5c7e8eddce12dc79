//! Ticker symbols and the ordered request built from them.
//!
//! Symbols are free-form: no syntax check happens here. A symbol the quote service does not
//! know is detected later, when it has no record in the response.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;

/// Trait providing file parsing for tickers.
pub trait TickerParser {
    /// Parses tickers from a buffered reader.
    ///
    /// Symbols may be separated by commas, whitespace or new lines. Empty fragments are
    /// skipped; every other fragment is parsed with `FromStr`.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Ticker>, AnalyzerError>;
}

impl TickerParser for Ticker {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, AnalyzerError> {
        let mut tickers = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(AnalyzerError::Io)?;
            for fragment in line.split(|c: char| c == ',' || c.is_whitespace()) {
                if fragment.is_empty() {
                    continue;
                }
                match fragment.parse::<Self>() {
                    Ok(ticker) => tickers.push(ticker),
                    Err(e) => return Err(AnalyzerError::ParseTickersFile(e.to_string())),
                }
            }
        }
        Ok(tickers)
    }
}

/// Upper-cased ticker symbol, e.g. `AAPL`.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct Ticker(String);

impl Ticker {
    /// Symbol text as sent to the quote service.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ticker {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AnalyzerError::InvalidTicker(s.to_string()));
        }
        Ok(Ticker(trimmed.to_uppercase()))
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered tickers of one run, capped at `AnalyzerConfig::max_stocks`.
///
/// Order is preserved exactly as entered and duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerRequest {
    tickers: Vec<Ticker>,
}

impl TickerRequest {
    /// Builds a request, dropping anything beyond the configured maximum.
    pub fn new(mut tickers: Vec<Ticker>, config: &AnalyzerConfig) -> Self {
        tickers.truncate(config.max_stocks);
        Self { tickers }
    }

    /// Requested tickers in input order.
    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    /// Number of requested tickers.
    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    /// `true` when nothing was requested.
    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tickers(symbols: &[&str]) -> Vec<Ticker> {
        symbols.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let ticker: Ticker = "  aapl\n".parse().unwrap();
        assert_eq!(ticker.as_str(), "AAPL");
        assert_eq!(ticker.to_string(), "AAPL");
    }

    #[test]
    fn parse_rejects_blank_symbol() {
        assert!(matches!(
            "   ".parse::<Ticker>(),
            Err(AnalyzerError::InvalidTicker(_))
        ));
    }

    #[test]
    fn file_parser_accepts_mixed_separators() {
        let input = Cursor::new("aapl, msft\n\nbrk-b\tgoog,,\n");
        let parsed = Ticker::parse_from_file(input).unwrap();
        assert_eq!(parsed, tickers(&["AAPL", "MSFT", "BRK-B", "GOOG"]));
    }

    #[test]
    fn request_keeps_order_and_duplicates() {
        let config = AnalyzerConfig::default();
        let request = TickerRequest::new(tickers(&["msft", "aapl", "msft"]), &config);
        let symbols: Vec<&str> = request.tickers().iter().map(Ticker::as_str).collect();
        assert_eq!(symbols, vec!["MSFT", "AAPL", "MSFT"]);
    }

    #[test]
    fn request_is_capped_at_max_stocks() {
        let config = AnalyzerConfig::default();
        let symbols: Vec<String> = (0..14).map(|i| format!("T{i}")).collect();
        let input: Vec<Ticker> = symbols.iter().map(|s| s.parse().unwrap()).collect();
        let request = TickerRequest::new(input, &config);
        assert_eq!(request.len(), 10);
        assert_eq!(request.tickers()[9].as_str(), "T9");
    }
}
