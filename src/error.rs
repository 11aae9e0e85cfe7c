//! Crate error types.

use thiserror::Error;

/// Errors raised while classifying feeds or resolving filter options.
///
/// Cosmetic lookups (labels, entity names) never produce errors; they
/// return `None` so that sentence composition can skip the fragment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeedError {
    /// The URL path does not match any known feed route.
    #[error("feed not recognised: `{0}`")]
    UnrecognizedFeed(String),

    /// A filter dimension name outside the seven recognized dimensions.
    ///
    /// Reaching this is a programmer error, not a malformed-input condition.
    #[error("unknown filter dimension: `{0}`")]
    UnknownDimension(String),

    /// A query-parameter key outside the seven canonical filter keys.
    #[error("unknown filter key: `{0}`")]
    UnknownFilterKey(String),
}
