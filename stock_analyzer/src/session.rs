//! One request/print cycle: fetch, match, report.
use log::info;
use std::io::Write;
use stock_common::Result;
use stock_common::config::AnalyzerConfig;
use stock_common::fetcher::QuoteSource;
use stock_common::quote::QuoteSet;
use stock_common::report::{MissingStyle, ReportTable};
use stock_common::tickers::TickerRequest;

/// Fetches quotes for `request`, prints a notice per unknown ticker and then the table.
///
/// An empty request makes no lookup. Transport and decode failures abort before anything
/// of the table is printed.
pub fn run_report<S: QuoteSource, W: Write>(
    config: &AnalyzerConfig,
    request: &TickerRequest,
    source: &S,
    missing: MissingStyle,
    out: &mut W,
) -> Result<()> {
    if request.is_empty() {
        info!("Empty request, skipping quote lookup");
        writeln!(out, "No stocks requested.")?;
        return Ok(());
    }

    let body = source.fetch(request)?;
    let quotes = QuoteSet::from_response(request, &body)?;

    for ticker in quotes.unmatched() {
        writeln!(out, "{} is not a valid ticker", ticker)?;
    }

    write!(out, "{}", ReportTable::new(&config.metrics, &quotes, missing))?;
    out.flush()?;
    Ok(())
}
