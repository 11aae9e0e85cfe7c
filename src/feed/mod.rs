//! Feed URL parsing, classification, and description.

mod description;
mod query;
mod route;
mod url;

pub use description::{Description, DescriptionBuilder};
pub use query::FeedQuery;
pub use route::{EntityKind, FeedSubject, GlobalFeed, RouteTable};
pub use url::FeedUrl;
