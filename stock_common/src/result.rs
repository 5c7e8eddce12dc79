//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `AnalyzerError`, so functions can simply return `Result<T>`.
use crate::error::AnalyzerError;

/// Workspace-wide `Result` alias with `AnalyzerError` as the default error.
pub type Result<T, E = AnalyzerError> = std::result::Result<T, E>;
