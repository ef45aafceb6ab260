//! Errors reported by rule and attribute sources
//!
//! The routing and aggregation logic never fails on bad data. These errors
//! only describe adapter failures, which callers resolve to empty sequences.

use thiserror::Error;

/// Failure while fetching rules or attribute values from a backing store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    #[error("Source timed out after {0}ms")]
    Timeout(u64),

    #[error("Invalid data from source: {0}")]
    InvalidData(String),
}
