//! Quote endpoint constants and the query builder.

use url::form_urlencoded::byte_serialize;

use crate::config::ApiConfig;
use crate::tickers::TickerRequest;

/// Path of the quote lookup below the service root.
pub const QUOTE_PATH: &str = "/v6/finance/quote";
/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";
/// URL-encoded comma placed between symbols.
pub const SYMBOL_SEPARATOR: &str = "%2C";

/// Percent-encodes one query parameter value.
fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

/// Joins the requested symbols into one `symbols` parameter value, keeping input order.
///
/// Each symbol is percent-encoded on its own, so `#`, `&` or `,` inside a symbol cannot
/// cut off or split the symbols after it.
pub fn join_symbols(request: &TickerRequest) -> String {
    request
        .tickers()
        .iter()
        .map(|t| encode(t.as_str()))
        .collect::<Vec<_>>()
        .join(SYMBOL_SEPARATOR)
}

/// Full lookup URL like `https://yfapi.net/v6/finance/quote?region=US&lang=en&symbols=A%2CB`.
pub fn quote_url(api: &ApiConfig, request: &TickerRequest) -> String {
    format!(
        "{}{}?region={}&lang={}&symbols={}",
        api.base_url.trim_end_matches('/'),
        QUOTE_PATH,
        encode(&api.region),
        encode(&api.lang),
        join_symbols(request)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;
    use crate::tickers::Ticker;

    fn request(symbols: &[&str]) -> TickerRequest {
        let tickers: Vec<Ticker> = symbols.iter().map(|s| s.parse().unwrap()).collect();
        TickerRequest::new(tickers, &AnalyzerConfig::default())
    }

    #[test]
    fn single_symbol_has_no_separator() {
        assert_eq!(join_symbols(&request(&["aapl"])), "AAPL");
    }

    #[test]
    fn symbols_are_joined_in_order() {
        assert_eq!(
            join_symbols(&request(&["msft", "aapl", "ibm"])),
            "MSFT%2CAAPL%2CIBM"
        );
    }

    #[test]
    fn reserved_characters_are_escaped_per_symbol() {
        assert_eq!(
            join_symbols(&request(&["a#b", "x&y", "c,d", "msft"])),
            "A%23B%2CX%26Y%2CC%2CD%2CMSFT"
        );
        assert_eq!(join_symbols(&request(&["brk.b", "brk-a"])), "BRK.B%2CBRK-A");
    }

    #[test]
    fn url_carries_region_lang_and_symbols() {
        let mut api = ApiConfig::new("k");
        api.base_url = "http://127.0.0.1:1234/".to_string();
        assert_eq!(
            quote_url(&api, &request(&["aapl", "msft"])),
            "http://127.0.0.1:1234/v6/finance/quote?region=US&lang=en&symbols=AAPL%2CMSFT"
        );
    }
}
