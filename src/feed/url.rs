//! Feed URL parsing - decoded path plus ordered query parameters.

use std::sync::OnceLock;

use percent_encoding::percent_decode_str;

use super::FeedQuery;
use crate::error::FeedError;

/// A parsed feed URL: decoded path and query multimap.
///
/// Accepts absolute URLs and site-root-relative paths; fragments are
/// dropped, the query string is preserved as an ordered multimap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedUrl {
    path: String,
    query: FeedQuery,
}

impl FeedUrl {
    /// Parse an absolute or relative feed URL string.
    pub fn parse(input: &str) -> Result<Self, FeedError> {
        // Dummy base so relative paths parse; absolute inputs replace it.
        static BASE: OnceLock<url::Url> = OnceLock::new();
        let base = BASE.get_or_init(|| url::Url::parse("http://feed-url.invalid").unwrap());

        let trimmed = input.trim();
        let parsed = base
            .join(trimmed)
            .map_err(|_| FeedError::UnrecognizedFeed(trimmed.to_string()))?;

        // url returns the path percent-encoded; decode for matching.
        let path = percent_decode_str(parsed.path())
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| parsed.path().to_string());

        Ok(Self {
            path,
            query: FeedQuery::from_pairs(parsed.query_pairs()),
        })
    }

    /// Decoded URL path, query and fragment stripped.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn query(&self) -> &FeedQuery {
        &self.query
    }

    pub fn into_query(self) -> FeedQuery {
        self.query
    }
}
