//! Filter dimensions and their canonical query-parameter keys.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FeedError;

/// A named axis of document filtering.
///
/// Each dimension maps one-to-one to the query-parameter key a feed URL
/// uses for it. The mapping is a bijection: every dimension has exactly
/// one key and every key belongs to exactly one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterDimension {
    /// Broad document class (announcements, policies, publications).
    DocumentType,
    /// Publication sub-type (statistics, guidance, ...).
    PublicationType,
    /// Publishing organisation / department.
    Organisation,
    /// Policy topic.
    Topic,
    /// Announcement sub-type (press releases, speeches, ...).
    AnnouncementType,
    /// Command / act paper status.
    OfficialDocument,
    /// World location.
    Location,
}

impl FilterDimension {
    /// All seven dimensions, in canonical order.
    pub const ALL: [Self; 7] = [
        Self::DocumentType,
        Self::PublicationType,
        Self::Organisation,
        Self::Topic,
        Self::AnnouncementType,
        Self::OfficialDocument,
        Self::Location,
    ];

    /// Dimension name (matches the serde representation).
    pub fn name(self) -> &'static str {
        match self {
            Self::DocumentType => "document_type",
            Self::PublicationType => "publication_type",
            Self::Organisation => "organisation",
            Self::Topic => "topic",
            Self::AnnouncementType => "announcement_type",
            Self::OfficialDocument => "official_document",
            Self::Location => "location",
        }
    }

    /// Canonical query-parameter key for this dimension.
    pub fn filter_key(self) -> &'static str {
        match self {
            Self::DocumentType => "document_type",
            Self::PublicationType => "publication_filter_option",
            Self::Organisation => "departments",
            Self::Topic => "topics",
            Self::AnnouncementType => "announcement_filter_option",
            Self::OfficialDocument => "official_document_status",
            Self::Location => "world_locations",
        }
    }

    /// Resolve a query-parameter key back to its dimension.
    pub fn from_filter_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.filter_key() == key)
    }

    /// Check if a query-parameter key is one of the seven canonical keys.
    #[inline]
    pub fn is_valid_filter_key(key: &str) -> bool {
        Self::from_filter_key(key).is_some()
    }
}

impl FromStr for FilterDimension {
    type Err = FeedError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name() == name)
            .ok_or_else(|| FeedError::UnknownDimension(name.to_string()))
    }
}

impl std::fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
