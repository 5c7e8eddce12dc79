use stock_common::config::AnalyzerConfig;
use stock_common::quote::QuoteSet;
use stock_common::report::{MissingStyle, ReportTable};
use stock_common::tickers::{Ticker, TickerRequest};

const RESPONSE: &str = r#"{
    "quoteResponse": {
        "result": [
            {
                "language": "en-US",
                "region": "US",
                "quoteType": "EQUITY",
                "symbol": "AAPL",
                "regularMarketPrice": 150.125,
                "forwardPE": 25.5,
                "priceToBook": 40.0
            }
        ],
        "error": null
    }
}"#;

fn build(symbols: &[&str], config: &AnalyzerConfig) -> (TickerRequest, QuoteSet) {
    let tickers: Vec<Ticker> = symbols.iter().map(|s| s.parse().unwrap()).collect();
    let request = TickerRequest::new(tickers, config);
    let set = QuoteSet::from_response(&request, RESPONSE).unwrap();
    (request, set)
}

#[test]
fn known_and_unknown_ticker_side_by_side() {
    let config = AnalyzerConfig::default();
    let (_, set) = build(&["aapl", "msft"], &config);

    let unmatched: Vec<&str> = set.unmatched().map(Ticker::as_str).collect();
    assert_eq!(unmatched, vec!["MSFT"]);

    let table = ReportTable::new(&config.metrics, &set, MissingStyle::Blank).to_string();
    let expected = [
        format!("{}{:>8}{:>8}", " ".repeat(22), "AAPL", "MSFT"),
        format!("{:<22}{:>8}{:>8}", "Price Per Share", "150.13", ""),
        format!("{:<22}{:>8}{:>8}", "Forward PE Ratio", "25.50", ""),
        format!("{:<22}{:>8}{:>8}", "Price To Book Ratio", "40.00", ""),
    ];
    assert_eq!(table, expected.join("\n") + "\n");
}

#[test]
fn unknown_ticker_with_na_style() {
    let config = AnalyzerConfig::default();
    let (_, set) = build(&["msft", "aapl"], &config);

    let table = ReportTable::new(&config.metrics, &set, MissingStyle::Na).to_string();
    let rows: Vec<&str> = table.lines().collect();
    assert_eq!(rows[1], format!("{:<22}{:>8}{:>8}", "Price Per Share", "N/A", "150.13"));
    assert_eq!(rows[3], format!("{:<22}{:>8}{:>8}", "Price To Book Ratio", "N/A", "40.00"));
}

#[test]
fn header_has_one_column_per_ticker() {
    let config = AnalyzerConfig::default();
    for n in 1..=10 {
        let symbols: Vec<String> = (0..n).map(|i| format!("S{i}")).collect();
        let refs: Vec<&str> = symbols.iter().map(String::as_str).collect();
        let (request, set) = build(&refs, &config);
        assert_eq!(request.len(), n);

        let table = ReportTable::new(&config.metrics, &set, MissingStyle::Blank).to_string();
        let header = table.lines().next().unwrap();
        assert_eq!(header.len(), 22 + 8 * n);
        assert_eq!(header.split_whitespace().collect::<Vec<_>>(), refs);
    }
}
