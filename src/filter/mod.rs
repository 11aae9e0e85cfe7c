//! Filter dimensions, option sets, and the options catalog.

mod catalog;
mod dimension;
mod option_set;

pub use catalog::FilterOptionsCatalog;
pub use dimension::FilterDimension;
pub use option_set::{FilterOption, OptionGroup, OptionSet};
