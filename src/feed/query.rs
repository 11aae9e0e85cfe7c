//! Ordered multi-valued query parameters.

use std::borrow::Cow;

use serde::Serialize;

/// Query parameters of a feed URL.
///
/// Invariants:
/// - Parameter order is order of first appearance in the query string
/// - `key[]=a&key[]=b` array syntax and repeated bare keys both
///   accumulate values under one key, in order
/// - Unrecognized keys are kept; filtering them is the describer's job
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedQuery {
    params: Vec<(String, Vec<String>)>,
}

impl FeedQuery {
    /// Build from decoded `(key, value)` pairs, normalizing `[]` array
    /// suffixes away.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Cow<'a, str>, Cow<'a, str>)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let key = key.strip_suffix("[]").unwrap_or(&key);
            query.push(key, &value);
        }
        query
    }

    fn push(&mut self, key: &str, value: &str) {
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => values.push(value.to_string()),
            None => self
                .params
                .push((key.to_string(), vec![value.to_string()])),
        }
    }

    /// All values for a key, `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    /// First value for a key.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key)?.first().map(String::as_str)
    }

    /// Check if the key appears at all, even with an empty value.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Check if the key has at least one non-blank value.
    pub fn has_value(&self, key: &str) -> bool {
        self.get(key)
            .is_some_and(|values| values.iter().any(|v| !v.trim().is_empty()))
    }

    /// Iterate `(key, values)` entries in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.params
            .iter()
            .map(|(k, values)| (k.as_str(), values.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
