//!
//! Quote lookup and comparison-table building shared by the analyzer binary.
//!
//! This crate aggregates:
//! - `error`: unified error type `AnalyzerError` used across the workspace.
//! - `result`: handy `Result<T, AnalyzerError>` alias.
//! - `config`: stock limit, metric list and endpoint settings.
//! - `tickers`: ticker symbols and the ordered request.
//! - `metric`: metrics shown in the table.
//! - `net`: endpoint constants and the query builder.
//! - `fetcher`: blocking HTTP lookup.
//! - `quote`: response decoding and ticker matching.
//! - `report`: fixed-width table rendering.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod fetcher;
pub mod metric;
pub mod net;
pub mod quote;
pub mod report;
pub mod result;
pub mod tickers;

pub use error::AnalyzerError;
pub use result::Result;
