//! Error types for filter chain execution.

use thiserror::Error;

/// Errors raised while running a filter chain.
///
/// Every error aborts the remainder of the chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A chain segment names a filter the registry does not know.
    #[error("unknown filter '{name}' at position {position}")]
    UnknownFilter { name: String, position: usize },

    /// A parameter token could not be coerced, or too many were supplied.
    #[error(
        "invalid parameter {index} for filter '{filter}' at position {position}: \
         got '{token}', expected {expected}"
    )]
    InvalidFilterParameter {
        filter: String,
        position: usize,
        index: usize,
        token: String,
        expected: String,
    },
}

/// A parameter coercion failure, before it is tied to a chain position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamError {
    /// 1-based parameter index.
    pub index: usize,
    pub token: String,
    pub expected: String,
}

impl ParamError {
    pub fn new(index: usize, token: &str, expected: impl Into<String>) -> Self {
        Self {
            index,
            token: token.to_string(),
            expected: expected.into(),
        }
    }

    /// Attach the filter name and chain position.
    pub fn into_filter_error(self, filter: &str, position: usize) -> FilterError {
        FilterError::InvalidFilterParameter {
            filter: filter.to_string(),
            position,
            index: self.index,
            token: self.token,
            expected: self.expected,
        }
    }
}
