//! Taxonomy collaborators - the read-only data the catalog and the
//! description builder consume.
//!
//! The persistence layer behind these traits is out of scope; embedders
//! supply implementations backed by whatever store they have.
//! [`InMemoryTaxonomy`] covers tests and static deployments.

mod memory;
pub mod presets;

pub use memory::InMemoryTaxonomy;

use crate::feed::EntityKind;
use crate::filter::{FilterOption, OptionGroup};
use crate::locale::Locale;

/// A `(label, slug, group key)` row for grouped type option sets.
pub type TypeRow = (String, String, String);

/// Supplies the taxonomy-backed option sets.
///
/// Organisations are the only locale-sensitive dimension: both the
/// grouping and the "all" label receive the locale.
pub trait TaxonomySource {
    /// Organisations grouped by organisation type, for the given locale.
    fn organisations_grouped(&self, locale: &Locale) -> Vec<OptionGroup>;

    /// Localized "all" label for the organisation set. `None` falls back
    /// to the English default.
    fn organisation_all_label(&self, _locale: &Locale) -> Option<String> {
        None
    }

    /// Topics grouped by classification type.
    fn topics_grouped(&self) -> Vec<OptionGroup>;

    /// World locations. Order does not matter; the catalog sorts by name.
    fn world_locations(&self) -> Vec<FilterOption>;

    /// Publication type rows, bucketed by group key at catalog level.
    fn publication_types(&self) -> Vec<TypeRow>;

    /// Announcement type rows, bucketed by group key at catalog level.
    fn announcement_types(&self) -> Vec<TypeRow>;
}

/// A resolved taxonomy entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyEntry {
    pub name: String,
    pub kind: EntityKind,
}

/// Resolves entity slugs to their display names.
pub trait TaxonomyLookup {
    /// Find an entity by kind and slug. Absence is expected (deleted or
    /// unknown slugs) and degrades the description rather than failing it.
    fn find_by_slug(&self, kind: EntityKind, slug: &str) -> Option<TaxonomyEntry>;
}

/// Resolves policy document slugs to published edition titles.
pub trait ContentStore {
    /// Title of the currently published edition, `None` if the document
    /// is unknown or nothing is published.
    fn published_edition_title(&self, slug: &str) -> Option<String>;
}
