//! Metrics shown in the comparison table.

use strum_macros::{Display, EnumIter, EnumString};

/// One row of the comparison table.
///
/// `Display`/`FromStr` use the field name of the quote record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Metric {
    /// Price per share.
    #[strum(serialize = "regularMarketPrice")]
    Price,
    /// Forward price-to-earnings ratio.
    #[strum(serialize = "forwardPE")]
    ForwardPe,
    /// Price-to-book ratio.
    #[strum(serialize = "priceToBook")]
    PriceToBook,
}

impl Metric {
    /// Row label in the first column of the table.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Price => "Price Per Share",
            Metric::ForwardPe => "Forward PE Ratio",
            Metric::PriceToBook => "Price To Book Ratio",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn field_names_match_quote_records() {
        let keys: Vec<String> = Metric::iter().map(|m| m.to_string()).collect();
        assert_eq!(keys, vec!["regularMarketPrice", "forwardPE", "priceToBook"]);
        assert_eq!("forwardPE".parse::<Metric>().unwrap(), Metric::ForwardPe);
    }

    #[test]
    fn labels_fit_the_label_column() {
        for metric in Metric::iter() {
            assert!(metric.label().len() <= crate::report::LABEL_WIDTH);
        }
    }
}
