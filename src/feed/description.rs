//! Feed description - renders a feed URL's active filters as a sentence.

use tracing::debug;

use super::{EntityKind, FeedQuery, FeedSubject, FeedUrl, RouteTable};
use crate::error::FeedError;
use crate::filter::{FilterDimension, FilterOptionsCatalog};
use crate::taxonomy::{ContentStore, TaxonomyLookup};
use crate::utils::sentence::to_sentence;

/// Keys consumed by dedicated sentence fragments, excluded from the
/// "related to" parameter list.
const NON_LISTABLE_KEYS: [&str; 4] = [
    "publication_filter_option",
    "announcement_filter_option",
    "official_document_status",
    "relevant_to_local_government",
];

/// Builds [`Description`]s from feed URLs.
///
/// Collaborators are injected at construction: the catalog labels filter
/// values, the lookup resolves taxonomy slugs to names, the content
/// store resolves policy slugs to published edition titles.
pub struct DescriptionBuilder<'a> {
    catalog: &'a FilterOptionsCatalog<'a>,
    lookup: &'a dyn TaxonomyLookup,
    content: &'a dyn ContentStore,
    routes: RouteTable,
}

impl<'a> DescriptionBuilder<'a> {
    pub fn new(
        catalog: &'a FilterOptionsCatalog<'a>,
        lookup: &'a dyn TaxonomyLookup,
        content: &'a dyn ContentStore,
    ) -> Self {
        Self {
            catalog,
            lookup,
            content,
            routes: RouteTable::default(),
        }
    }

    /// Replace the default routing table.
    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    /// Parse, classify, and describe a feed URL.
    ///
    /// Fails only on unclassifiable paths; every lookup inside sentence
    /// composition degrades to an omitted fragment instead (the text is
    /// advisory, a missing name must not break the feed page).
    pub fn build(&self, feed_url: &str) -> Result<Description, FeedError> {
        let url = FeedUrl::parse(feed_url)?;
        let subject = self.routes.classify(url.path())?;
        let text = self.compose(&subject, url.query());
        Ok(Description {
            subject,
            params: url.into_query(),
            text,
        })
    }

    /// Join the four fragments with single spaces, omitting empty ones.
    fn compose(&self, subject: &FeedSubject, params: &FeedQuery) -> String {
        let official = official_document_fragment(params);
        let local = local_government_fragment(params, official.is_some());

        [
            self.leading_fragment(subject, params),
            self.parameter_fragment(params),
            official.map(str::to_string),
            local.map(str::to_string),
        ]
        .into_iter()
        .flatten()
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// What the feed lists: a filter-option label (lower-cased), the
    /// global feed name, or the subject entity's display name.
    fn leading_fragment(&self, subject: &FeedSubject, params: &FeedQuery) -> Option<String> {
        let publication_key = FilterDimension::PublicationType.filter_key();
        let announcement_key = FilterDimension::AnnouncementType.filter_key();

        if params.has_value(publication_key) {
            self.labels_for_param(params, publication_key)
                .map(|label| label.to_lowercase())
        } else if params.has_value(announcement_key) {
            self.labels_for_param(params, announcement_key)
                .map(|label| label.to_lowercase())
        } else {
            match subject {
                FeedSubject::Global(kind) => Some(kind.name().to_string()),
                FeedSubject::Entity { kind, slug } => self.subject_name(*kind, slug),
            }
        }
    }

    /// Display name of an entity feed's subject. Absent names degrade
    /// the fragment, they never fail the description.
    fn subject_name(&self, kind: EntityKind, slug: &str) -> Option<String> {
        let name = match kind {
            EntityKind::Policy => self.content.published_edition_title(slug),
            _ => self.lookup.find_by_slug(kind, slug).map(|entry| entry.name),
        };
        if name.is_none() {
            debug!(kind = kind.name(), slug, "feed subject did not resolve");
        }
        name
    }

    /// `related to A, B and C` over the remaining filter parameters.
    ///
    /// Labels from every listable parameter value flow into one English
    /// list, so two values of one parameter read the same as two
    /// parameters with one value each.
    fn parameter_fragment(&self, params: &FeedQuery) -> Option<String> {
        let labels: Vec<String> = params
            .iter()
            .filter(|(key, _)| !NON_LISTABLE_KEYS.contains(key))
            .flat_map(|(key, values)| {
                values
                    .iter()
                    .filter_map(move |value| self.catalog.label_for(key, value))
            })
            .collect();

        if labels.is_empty() {
            None
        } else {
            Some(format!("related to {}", to_sentence(&labels)))
        }
    }

    /// Labels of all values of one parameter, joined with `", "`.
    /// `None` when nothing resolves (unknown key or all values unknown).
    fn labels_for_param(&self, params: &FeedQuery, key: &str) -> Option<String> {
        let labels: Vec<String> = params
            .get(key)?
            .iter()
            .filter_map(|value| self.catalog.label_for(key, value))
            .collect();

        if labels.is_empty() {
            None
        } else {
            Some(labels.join(", "))
        }
    }
}

impl std::fmt::Debug for DescriptionBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescriptionBuilder")
            .field("catalog", self.catalog)
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}

/// Fixed clause for the `official_document_status` parameter. Unknown
/// values render nothing.
fn official_document_fragment(params: &FeedQuery) -> Option<&'static str> {
    match params.first(FilterDimension::OfficialDocument.filter_key())? {
        "command_and_act_papers" => Some("which are command or act papers"),
        "command_papers_only" => Some("which are command papers"),
        "act_papers_only" => Some("which are act papers"),
        _ => None,
    }
}

/// Local-government clause. The parameter is truthy when present with
/// any value except the literal `"0"` - an empty value or `"false"` is
/// still truthy, only presence and `"0"` are distinguished.
fn local_government_fragment(params: &FeedQuery, official_rendered: bool) -> Option<&'static str> {
    let relevant = params
        .first("relevant_to_local_government")
        .is_some_and(|value| value != "0");

    match (relevant, official_rendered) {
        (true, true) => Some("and are relevant to local government"),
        (true, false) => Some("which are relevant to local government"),
        (false, _) => None,
    }
}

/// A classified feed URL and its rendered description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    subject: FeedSubject,
    params: FeedQuery,
    text: String,
}

impl Description {
    /// The composed sentence. Pure function of the input URL.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The classified subject.
    #[inline]
    pub fn subject(&self) -> &FeedSubject {
        &self.subject
    }

    /// Feed-type name (`documents`, `organisation`, ...).
    #[inline]
    pub fn feed_type(&self) -> &'static str {
        self.subject.feed_type()
    }

    /// Entity slug for entity feeds, `None` for global feeds.
    #[inline]
    pub fn feed_object_slug(&self) -> Option<&str> {
        self.subject.slug()
    }

    /// The parsed query parameters, unrecognized keys included.
    #[inline]
    pub fn feed_params(&self) -> &FeedQuery {
        &self.params
    }
}

impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
