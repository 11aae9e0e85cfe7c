//! Feed path classification - URL path to feed subject mapping.

use serde::{Deserialize, Serialize};

use crate::error::FeedError;

/// Site-wide listing feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalFeed {
    /// Everything published, regardless of document class.
    Documents,
    Publications,
    Announcements,
}

impl GlobalFeed {
    /// Display name for this feed (also the leading sentence fragment).
    pub fn name(self) -> &'static str {
        match self {
            Self::Documents => "documents",
            Self::Publications => "publications",
            Self::Announcements => "announcements",
        }
    }
}

/// Kind of taxonomy entity a per-entity feed belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Policy activity feed; the display name comes from the published
    /// edition title rather than a taxonomy name.
    Policy,
    Organisation,
    Topic,
    TopicalEvent,
    WorldLocation,
    Person,
    Role,
}

impl EntityKind {
    /// Feed-type name (matches the serde representation).
    pub fn name(self) -> &'static str {
        match self {
            Self::Policy => "policy",
            Self::Organisation => "organisation",
            Self::Topic => "topic",
            Self::TopicalEvent => "topical_event",
            Self::WorldLocation => "world_location",
            Self::Person => "person",
            Self::Role => "role",
        }
    }
}

/// Classified subject of a feed URL, a pure function of its path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedSubject {
    /// One of the three site-wide listing feeds.
    Global(GlobalFeed),
    /// A single taxonomy entity's feed.
    Entity { kind: EntityKind, slug: String },
}

impl FeedSubject {
    /// Feed-type name: `documents`, `publications`, `announcements`,
    /// `policy`, `organisation`, `topic`, `topical_event`,
    /// `world_location`, `person` or `role`.
    pub fn feed_type(&self) -> &'static str {
        match self {
            Self::Global(kind) => kind.name(),
            Self::Entity { kind, .. } => kind.name(),
        }
    }

    /// Entity slug, `None` for global feeds.
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::Global(_) => None,
            Self::Entity { slug, .. } => Some(slug),
        }
    }
}

/// Ordered routing table mapping feed paths to subjects.
///
/// Global paths are matched exactly, in order, before entity roots. An
/// entity path is `/<prefix>/<root>/<slug>.atom` (or
/// `/<prefix>/policies/<slug>/activity.atom` for policies); the root
/// segment selects the entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    globals: Vec<(String, GlobalFeed)>,
    entity_roots: Vec<(&'static str, EntityKind)>,
}

impl RouteTable {
    /// Table with custom canonical paths for the three global feeds.
    pub fn new(
        documents: impl Into<String>,
        publications: impl Into<String>,
        announcements: impl Into<String>,
    ) -> Self {
        Self {
            globals: vec![
                (documents.into(), GlobalFeed::Documents),
                (publications.into(), GlobalFeed::Publications),
                (announcements.into(), GlobalFeed::Announcements),
            ],
            entity_roots: vec![
                ("policies", EntityKind::Policy),
                ("organisations", EntityKind::Organisation),
                ("topics", EntityKind::Topic),
                ("topical-events", EntityKind::TopicalEvent),
                ("world", EntityKind::WorldLocation),
                ("people", EntityKind::Person),
                ("ministers", EntityKind::Role),
            ],
        }
    }

    /// Classify a decoded URL path into a feed subject.
    ///
    /// Query strings must already be stripped; classification depends on
    /// the path alone.
    pub fn classify(&self, path: &str) -> Result<FeedSubject, FeedError> {
        if let Some((_, kind)) = self.globals.iter().find(|(p, _)| p == path) {
            return Ok(FeedSubject::Global(*kind));
        }

        let unrecognized = || FeedError::UnrecognizedFeed(path.to_string());

        // Second path component is the taxonomy root:
        // "/government/organisations/x.atom" -> "organisations"
        let root = path.split('/').nth(2).ok_or_else(unrecognized)?;
        let kind = self
            .entity_roots
            .iter()
            .find(|(r, _)| *r == root)
            .map(|(_, k)| *k)
            .ok_or_else(unrecognized)?;

        let slug = match kind {
            EntityKind::Policy => Self::slug_from_activity_path(path),
            _ => Self::slug_from_atom_path(path),
        }
        .ok_or_else(unrecognized)?;

        Ok(FeedSubject::Entity {
            kind,
            slug: slug.to_string(),
        })
    }

    /// Trailing slug of `.../<slug>.atom`.
    fn slug_from_atom_path(path: &str) -> Option<&str> {
        let stem = path.strip_suffix(".atom")?;
        let slug = stem.rsplit('/').next()?;
        (!slug.is_empty()).then_some(slug)
    }

    /// Trailing slug of `.../<slug>/activity.atom` (policy feeds).
    fn slug_from_activity_path(path: &str) -> Option<&str> {
        let stem = path.strip_suffix("/activity.atom")?;
        let slug = stem.rsplit('/').next()?;
        (!slug.is_empty()).then_some(slug)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(
            "/government/feed.atom",
            "/government/publications.atom",
            "/government/announcements.atom",
        )
    }
}
