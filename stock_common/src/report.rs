//! Fixed-width comparison table.
//!
//! Layout: a header line with a blank label column followed by the tickers, then one line
//! per metric with the label left-aligned and each value right-aligned with two decimals.
//!
//! ```text
//!                           AAPL    MSFT
//! Price Per Share         150.13
//! Forward PE Ratio         25.50
//! Price To Book Ratio      40.00
//! ```

use std::fmt;

use clap::ValueEnum;
use strum_macros::Display;

use crate::metric::Metric;
use crate::quote::{QuoteRecord, QuoteSet};

/// Width of the label column.
pub const LABEL_WIDTH: usize = 22;
/// Width of each ticker column.
pub const COLUMN_WIDTH: usize = 8;
/// Cell text for a value that is not available.
pub const NOT_AVAILABLE: &str = "N/A";

/// How cells of a ticker without any quote record are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase")]
pub enum MissingStyle {
    /// Blank cells.
    #[default]
    Blank,
    /// `N/A` in every cell.
    Na,
}

/// Rounds to two decimal places, halves toward positive infinity (`-1.125` gives `-1.12`).
///
/// The half is compared against the fractional part instead of being added, so a value
/// just below a midpoint is not pushed over it by the addition.
pub fn round_cents(value: f64) -> f64 {
    let cents = value * 100.0;
    let floor = cents.floor();
    let rounded = if cents - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded / 100.0
}

/// Table built from one `QuoteSet`; rendered through `Display`.
pub struct ReportTable<'a> {
    metrics: &'a [Metric],
    quotes: &'a QuoteSet,
    missing: MissingStyle,
}

impl<'a> ReportTable<'a> {
    /// Creates a table with one row per metric and one column per entry of `quotes`.
    pub fn new(metrics: &'a [Metric], quotes: &'a QuoteSet, missing: MissingStyle) -> Self {
        Self {
            metrics,
            quotes,
            missing,
        }
    }

    fn write_cell(
        &self,
        f: &mut fmt::Formatter<'_>,
        record: Option<&QuoteRecord>,
        metric: Metric,
    ) -> fmt::Result {
        let width = COLUMN_WIDTH;
        match record {
            Some(record) => match record.metric(metric) {
                Some(value) => write!(f, "{:>width$.2}", round_cents(value)),
                None => write!(f, "{NOT_AVAILABLE:>width$}"),
            },
            None => match self.missing {
                MissingStyle::Blank => write!(f, "{:>width$}", ""),
                MissingStyle::Na => write!(f, "{NOT_AVAILABLE:>width$}"),
            },
        }
    }
}

impl fmt::Display for ReportTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:LABEL_WIDTH$}", "")?;
        for (ticker, _) in self.quotes.entries() {
            write!(f, "{:>COLUMN_WIDTH$}", ticker.as_str())?;
        }
        writeln!(f)?;

        for metric in self.metrics {
            write!(f, "{:<LABEL_WIDTH$}", metric.label())?;
            for (_, record) in self.quotes.entries() {
                self.write_cell(f, record.as_ref(), *metric)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
