//! Locale tag for locale-sensitive option labels.

use serde::{Deserialize, Serialize};

/// BCP 47-ish locale code (e.g. `en`, `cy`, `fr`).
///
/// Only organisation option sets are locale-sensitive: the grouping call
/// and the "all" label both receive the locale. Everything else renders
/// in English regardless.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale(String);

impl Locale {
    /// English, the fallback for every localized label.
    pub const ENGLISH: &'static str = "en";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the locale code as a string slice.
    #[inline]
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Check if this is the English fallback locale.
    #[inline]
    pub fn is_english(&self) -> bool {
        self.0 == Self::ENGLISH
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(Self::ENGLISH.to_string())
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default().code(), "en");
        assert!(Locale::default().is_english());
    }

    #[test]
    fn test_from_str() {
        let locale = Locale::from("cy");
        assert_eq!(locale.code(), "cy");
        assert!(!locale.is_english());
    }
}
