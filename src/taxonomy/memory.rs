//! In-memory taxonomy for tests and static deployments.

use rustc_hash::FxHashMap;

use super::{ContentStore, TaxonomyEntry, TaxonomyLookup, TaxonomySource, TypeRow};
use crate::feed::EntityKind;
use crate::filter::{FilterOption, OptionGroup};
use crate::locale::Locale;

/// Builder-style implementation of all three taxonomy traits.
///
/// # Example
///
/// ```
/// use feedscribe::{EntityKind, InMemoryTaxonomy};
///
/// let taxonomy = InMemoryTaxonomy::default()
///     .organisation("Ministerial department", "Ministry of Justice", "ministry-of-justice")
///     .topic("Policy area", "Housing", "housing")
///     .location("France", "france")
///     .entity(EntityKind::Person, "jane-smith", "Jane Smith")
///     .published_edition("housing-reform", "Housing reform");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaxonomy {
    names: FxHashMap<(EntityKind, String), String>,
    titles: FxHashMap<String, String>,
    organisations: Vec<OptionGroup>,
    organisation_all_labels: FxHashMap<String, String>,
    topics: Vec<OptionGroup>,
    locations: Vec<FilterOption>,
    publication_types: Vec<TypeRow>,
    announcement_types: Vec<TypeRow>,
}

impl InMemoryTaxonomy {
    /// Empty taxonomy seeded with the standard publication and
    /// announcement type tables.
    pub fn with_standard_types() -> Self {
        Self {
            publication_types: super::presets::standard_publication_types(),
            announcement_types: super::presets::standard_announcement_types(),
            ..Self::default()
        }
    }

    /// Register an entity name for slug resolution.
    pub fn entity(
        mut self,
        kind: EntityKind,
        slug: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.names.insert((kind, slug.into()), name.into());
        self
    }

    /// Register an organisation under a type group. Also registers the
    /// slug for entity-name resolution.
    pub fn organisation(
        mut self,
        type_group: &str,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        let (name, slug) = (name.into(), slug.into());
        push_grouped(&mut self.organisations, type_group, &name, &slug);
        self.entity(EntityKind::Organisation, slug, name)
    }

    /// Localized "all" label for the organisation option set.
    pub fn organisation_all_label_for(
        mut self,
        locale: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.organisation_all_labels
            .insert(locale.into(), label.into());
        self
    }

    /// Register a topic under a classification group. Also registers the
    /// slug for entity-name resolution.
    pub fn topic(
        mut self,
        type_group: &str,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        let (name, slug) = (name.into(), slug.into());
        push_grouped(&mut self.topics, type_group, &name, &slug);
        self.entity(EntityKind::Topic, slug, name)
    }

    /// Register a world location. Also registers the slug for
    /// entity-name resolution.
    pub fn location(mut self, name: impl Into<String>, slug: impl Into<String>) -> Self {
        let (name, slug) = (name.into(), slug.into());
        self.locations.push(FilterOption::new(&*name, &*slug));
        self.entity(EntityKind::WorldLocation, slug, name)
    }

    /// Register a publication type row.
    pub fn publication_type(
        mut self,
        label: impl Into<String>,
        slug: impl Into<String>,
        group_key: impl Into<String>,
    ) -> Self {
        self.publication_types
            .push((label.into(), slug.into(), group_key.into()));
        self
    }

    /// Register an announcement type row.
    pub fn announcement_type(
        mut self,
        label: impl Into<String>,
        slug: impl Into<String>,
        group_key: impl Into<String>,
    ) -> Self {
        self.announcement_types
            .push((label.into(), slug.into(), group_key.into()));
        self
    }

    /// Register a published edition title for a policy document slug.
    pub fn published_edition(
        mut self,
        slug: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.titles.insert(slug.into(), title.into());
        self
    }
}

fn push_grouped(groups: &mut Vec<OptionGroup>, group_label: &str, name: &str, slug: &str) {
    let option = FilterOption::new(name, slug);
    match groups.iter_mut().find(|g| g.label == group_label) {
        Some(group) => group.options.push(option),
        None => groups.push(OptionGroup::new(group_label, vec![option])),
    }
}

impl TaxonomySource for InMemoryTaxonomy {
    fn organisations_grouped(&self, _locale: &Locale) -> Vec<OptionGroup> {
        self.organisations.clone()
    }

    fn organisation_all_label(&self, locale: &Locale) -> Option<String> {
        self.organisation_all_labels.get(locale.code()).cloned()
    }

    fn topics_grouped(&self) -> Vec<OptionGroup> {
        self.topics.clone()
    }

    fn world_locations(&self) -> Vec<FilterOption> {
        self.locations.clone()
    }

    fn publication_types(&self) -> Vec<TypeRow> {
        self.publication_types.clone()
    }

    fn announcement_types(&self) -> Vec<TypeRow> {
        self.announcement_types.clone()
    }
}

impl TaxonomyLookup for InMemoryTaxonomy {
    fn find_by_slug(&self, kind: EntityKind, slug: &str) -> Option<TaxonomyEntry> {
        self.names
            .get(&(kind, slug.to_string()))
            .map(|name| TaxonomyEntry {
                name: name.clone(),
                kind,
            })
    }
}

impl ContentStore for InMemoryTaxonomy {
    fn published_edition_title(&self, slug: &str) -> Option<String> {
        self.titles.get(slug).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_lookup() {
        let taxonomy = InMemoryTaxonomy::default().entity(
            EntityKind::Person,
            "jane-smith",
            "Jane Smith",
        );

        let entry = taxonomy
            .find_by_slug(EntityKind::Person, "jane-smith")
            .unwrap();
        assert_eq!(entry.name, "Jane Smith");
        assert_eq!(entry.kind, EntityKind::Person);

        // Kind is part of the key.
        assert!(taxonomy.find_by_slug(EntityKind::Role, "jane-smith").is_none());
        assert!(taxonomy.find_by_slug(EntityKind::Person, "unknown").is_none());
    }

    #[test]
    fn test_organisation_registers_name_and_group() {
        let taxonomy = InMemoryTaxonomy::default()
            .organisation("Ministerial department", "Ministry of Justice", "ministry-of-justice")
            .organisation("Ministerial department", "Home Office", "home-office");

        let groups = taxonomy.organisations_grouped(&Locale::default());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].options.len(), 2);

        let entry = taxonomy
            .find_by_slug(EntityKind::Organisation, "ministry-of-justice")
            .unwrap();
        assert_eq!(entry.name, "Ministry of Justice");
    }

    #[test]
    fn test_organisation_all_label_per_locale() {
        let taxonomy =
            InMemoryTaxonomy::default().organisation_all_label_for("cy", "Pob adran");

        assert_eq!(
            taxonomy.organisation_all_label(&Locale::from("cy")),
            Some("Pob adran".to_string())
        );
        assert_eq!(taxonomy.organisation_all_label(&Locale::default()), None);
    }

    #[test]
    fn test_published_edition() {
        let taxonomy =
            InMemoryTaxonomy::default().published_edition("housing-reform", "Housing reform");
        assert_eq!(
            taxonomy.published_edition_title("housing-reform"),
            Some("Housing reform".to_string())
        );
        assert_eq!(taxonomy.published_edition_title("unknown"), None);
    }

    #[test]
    fn test_with_standard_types() {
        let taxonomy = InMemoryTaxonomy::with_standard_types();
        assert!(!taxonomy.publication_types().is_empty());
        assert!(!taxonomy.announcement_types().is_empty());
    }
}
