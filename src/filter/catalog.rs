//! Filter option catalog - dimension and key lookups.

use std::str::FromStr;

use tracing::trace;

use super::{FilterDimension, FilterOption, OptionSet};
use crate::error::FeedError;
use crate::locale::Locale;
use crate::taxonomy::TaxonomySource;

/// English fallback for the organisation "all" label.
const ALL_DEPARTMENTS: &str = "All departments";

/// Resolves filter dimensions and query-parameter keys to option sets
/// and human labels.
///
/// Option sets are built fresh on every call from the borrowed
/// [`TaxonomySource`]; the catalog itself holds no per-request state
/// beyond the locale, so a single catalog can serve concurrent callers.
pub struct FilterOptionsCatalog<'a> {
    source: &'a dyn TaxonomySource,
    locale: Locale,
}

impl<'a> FilterOptionsCatalog<'a> {
    pub fn new(source: &'a dyn TaxonomySource, locale: Locale) -> Self {
        Self { source, locale }
    }

    /// Option set for a dimension.
    pub fn options_for(&self, dimension: FilterDimension) -> OptionSet {
        match dimension {
            FilterDimension::DocumentType => OptionSet::flat(
                "All document types",
                vec![
                    FilterOption::new("Announcements", "announcements"),
                    FilterOption::new("Policies", "policies"),
                    FilterOption::new("Publications", "publications"),
                ],
            ),
            FilterDimension::PublicationType => OptionSet::from_grouped_values(
                "All publication types",
                self.source.publication_types(),
            ),
            FilterDimension::Organisation => OptionSet::grouped(
                self.source
                    .organisation_all_label(&self.locale)
                    .unwrap_or_else(|| ALL_DEPARTMENTS.to_string()),
                self.source.organisations_grouped(&self.locale),
            ),
            FilterDimension::Topic => {
                OptionSet::grouped("All topics", self.source.topics_grouped())
            }
            FilterDimension::AnnouncementType => OptionSet::from_grouped_values(
                "All announcement types",
                self.source.announcement_types(),
            ),
            FilterDimension::OfficialDocument => OptionSet::flat(
                "All documents",
                vec![
                    FilterOption::new("Command or act papers", "command_and_act_papers"),
                    FilterOption::new("Command papers only", "command_papers_only"),
                    FilterOption::new("Act papers only", "act_papers_only"),
                ],
            ),
            FilterDimension::Location => {
                let mut locations = self.source.world_locations();
                locations.sort_by(|a, b| a.label.cmp(&b.label));
                OptionSet::flat("All locations", locations)
            }
        }
    }

    /// Option set for a dimension name. Fails with `UnknownDimension`
    /// for anything outside the seven recognized names.
    pub fn options_for_name(&self, name: &str) -> Result<OptionSet, FeedError> {
        FilterDimension::from_str(name).map(|d| self.options_for(d))
    }

    /// Option set for a canonical query-parameter key. Fails with
    /// `UnknownFilterKey` for anything outside the seven canonical keys.
    pub fn options_for_filter_key(&self, key: &str) -> Result<OptionSet, FeedError> {
        FilterDimension::from_filter_key(key)
            .map(|d| self.options_for(d))
            .ok_or_else(|| FeedError::UnknownFilterKey(key.to_string()))
    }

    /// Human label for a `(key, value)` pair.
    ///
    /// Absence, not an error: unrecognized keys or values yield `None`
    /// so that callers skip the fragment. This keeps descriptions
    /// forward-compatible with unrelated query parameters.
    pub fn label_for(&self, key: &str, value: &str) -> Option<String> {
        let Some(dimension) = FilterDimension::from_filter_key(key) else {
            trace!(key, "not a filter key, skipping");
            return None;
        };
        self.options_for(dimension)
            .label_for(value)
            .map(str::to_string)
    }

    /// Check if a key is one of the seven canonical filter keys.
    #[inline]
    pub fn is_valid_filter_key(key: &str) -> bool {
        FilterDimension::is_valid_filter_key(key)
    }

    /// Check if a `(key, value)` pair names an existing option.
    pub fn is_valid_key_value(&self, key: &str, value: &str) -> bool {
        self.label_for(key, value).is_some()
    }
}

impl std::fmt::Debug for FilterOptionsCatalog<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterOptionsCatalog")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::InMemoryTaxonomy;

    fn sample_taxonomy() -> InMemoryTaxonomy {
        InMemoryTaxonomy::with_standard_types()
            .organisation("Ministerial department", "Ministry of Justice", "ministry-of-justice")
            .organisation("Ministerial department", "Home Office", "home-office")
            .organisation_all_label_for("cy", "Pob adran")
            .topic("Policy area", "Housing", "housing")
            .location("Zimbabwe", "zimbabwe")
            .location("France", "france")
    }

    fn catalog(taxonomy: &InMemoryTaxonomy) -> FilterOptionsCatalog<'_> {
        FilterOptionsCatalog::new(taxonomy, Locale::default())
    }

    #[test]
    fn test_document_type_options() {
        let taxonomy = sample_taxonomy();
        let set = catalog(&taxonomy).options_for(FilterDimension::DocumentType);
        assert_eq!(set.all_label(), "All document types");
        assert_eq!(set.label_for("policies"), Some("Policies"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_official_document_options() {
        let taxonomy = sample_taxonomy();
        let set = catalog(&taxonomy).options_for(FilterDimension::OfficialDocument);
        assert_eq!(set.all_label(), "All documents");
        assert_eq!(
            set.label_for("command_and_act_papers"),
            Some("Command or act papers")
        );
    }

    #[test]
    fn test_locations_sorted_by_name() {
        let taxonomy = sample_taxonomy();
        let set = catalog(&taxonomy).options_for(FilterDimension::Location);
        let labels: Vec<&str> = set.ungrouped().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["France", "Zimbabwe"]);
        assert_eq!(set.all_label(), "All locations");
    }

    #[test]
    fn test_organisation_all_label_locale_fallback() {
        let taxonomy = sample_taxonomy();

        let english = catalog(&taxonomy).options_for(FilterDimension::Organisation);
        assert_eq!(english.all_label(), "All departments");

        let welsh = FilterOptionsCatalog::new(&taxonomy, Locale::from("cy"))
            .options_for(FilterDimension::Organisation);
        assert_eq!(welsh.all_label(), "Pob adran");
    }

    #[test]
    fn test_publication_types_sorted_and_grouped() {
        let taxonomy = sample_taxonomy();
        let set = catalog(&taxonomy).options_for(FilterDimension::PublicationType);
        assert_eq!(set.all_label(), "All publication types");
        assert_eq!(set.label_for("statistics"), Some("Statistics"));

        // Labels sorted within each group.
        for group in set.groups() {
            let labels: Vec<&str> = group.options.iter().map(|o| o.label.as_str()).collect();
            let mut sorted = labels.clone();
            sorted.sort();
            assert_eq!(labels, sorted);
        }
    }

    #[test]
    fn test_options_for_name() {
        let taxonomy = sample_taxonomy();
        let catalog = catalog(&taxonomy);
        assert!(catalog.options_for_name("topic").is_ok());
        assert_eq!(
            catalog.options_for_name("colour"),
            Err(FeedError::UnknownDimension("colour".to_string()))
        );
    }

    #[test]
    fn test_options_for_filter_key() {
        let taxonomy = sample_taxonomy();
        let catalog = catalog(&taxonomy);
        let set = catalog.options_for_filter_key("departments").unwrap();
        assert_eq!(set.label_for("home-office"), Some("Home Office"));
        assert_eq!(
            catalog.options_for_filter_key("page"),
            Err(FeedError::UnknownFilterKey("page".to_string()))
        );
    }

    #[test]
    fn test_label_for_absence_not_error() {
        let taxonomy = sample_taxonomy();
        let catalog = catalog(&taxonomy);
        assert_eq!(
            catalog.label_for("topics", "housing"),
            Some("Housing".to_string())
        );
        // Unknown key and unknown value both degrade to None.
        assert_eq!(catalog.label_for("page", "2"), None);
        assert_eq!(catalog.label_for("topics", "unknown"), None);
    }

    #[test]
    fn test_predicates() {
        let taxonomy = sample_taxonomy();
        let catalog = catalog(&taxonomy);
        assert!(FilterOptionsCatalog::is_valid_filter_key("world_locations"));
        assert!(!FilterOptionsCatalog::is_valid_filter_key("locations"));
        assert!(catalog.is_valid_key_value("world_locations", "france"));
        assert!(!catalog.is_valid_key_value("world_locations", "atlantis"));
    }
}
