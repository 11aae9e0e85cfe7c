//! feedscribe - describe filtered publishing feed URLs in plain English.
//!
//! Given an Atom feed URL from a content-publishing site, this crate
//! classifies what the feed is about (a global listing or a single
//! taxonomy entity) and renders the active query-string filters as one
//! human-readable sentence, e.g.
//! `publications related to Ministry of Justice which are command papers`.
//!
//! Taxonomy data (organisations, topics, locations, type tables) comes
//! from collaborator traits injected at construction; nothing here talks
//! to a database. Name lookups that fail degrade the sentence instead of
//! failing it - the description is advisory text, not a contract.
//!
//! # Example
//!
//! ```
//! use feedscribe::{DescriptionBuilder, FilterOptionsCatalog, InMemoryTaxonomy, Locale};
//!
//! let taxonomy = InMemoryTaxonomy::with_standard_types()
//!     .organisation("Ministerial department", "Ministry of Justice", "ministry-of-justice");
//!
//! let catalog = FilterOptionsCatalog::new(&taxonomy, Locale::default());
//! let builder = DescriptionBuilder::new(&catalog, &taxonomy, &taxonomy);
//!
//! let description = builder
//!     .build("/government/publications.atom?departments[]=ministry-of-justice&official_document_status=command_papers_only")
//!     .unwrap();
//!
//! assert_eq!(
//!     description.text(),
//!     "publications related to Ministry of Justice which are command papers"
//! );
//! assert_eq!(description.feed_type(), "publications");
//! ```

mod error;
mod feed;
mod filter;
mod locale;
mod taxonomy;
mod utils;

pub use error::FeedError;
pub use feed::{
    Description, DescriptionBuilder, EntityKind, FeedQuery, FeedSubject, FeedUrl, GlobalFeed,
    RouteTable,
};
pub use filter::{FilterDimension, FilterOption, FilterOptionsCatalog, OptionGroup, OptionSet};
pub use locale::Locale;
pub use taxonomy::{
    presets, ContentStore, InMemoryTaxonomy, TaxonomyEntry, TaxonomyLookup, TaxonomySource,
    TypeRow,
};
pub use utils::sentence::to_sentence;
