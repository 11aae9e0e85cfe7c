//! Labeled option sets for filter dimensions.

use serde::{Deserialize, Serialize};

/// A single selectable option: human label plus URL-safe value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A labeled group of options (e.g. organisations bucketed by type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    pub label: String,
    pub options: Vec<FilterOption>,
}

impl OptionGroup {
    pub fn new(label: impl Into<String>, options: Vec<FilterOption>) -> Self {
        Self {
            label: label.into(),
            options,
        }
    }
}

/// The full option set of one filter dimension.
///
/// Holds the "all" label shown when nothing is selected, plus flat
/// options and/or labeled groups. Values are unique within a set;
/// `label_for` checks flat options before groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    all_label: String,
    ungrouped: Vec<FilterOption>,
    grouped: Vec<OptionGroup>,
}

impl OptionSet {
    /// Flat option set without groups.
    pub fn flat(all_label: impl Into<String>, options: Vec<FilterOption>) -> Self {
        Self {
            all_label: all_label.into(),
            ungrouped: options,
            grouped: Vec::new(),
        }
    }

    /// Grouped option set without flat options.
    pub fn grouped(all_label: impl Into<String>, groups: Vec<OptionGroup>) -> Self {
        Self {
            all_label: all_label.into(),
            ungrouped: Vec::new(),
            grouped: groups,
        }
    }

    /// Build a grouped set from `(label, value, group key)` rows.
    ///
    /// Rows are sorted alphabetically by label, then bucketed by group
    /// key in order of first appearance after the sort.
    pub fn from_grouped_values(
        all_label: impl Into<String>,
        rows: impl IntoIterator<Item = (String, String, String)>,
    ) -> Self {
        let mut rows: Vec<(String, String, String)> = rows.into_iter().collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        let mut groups: Vec<OptionGroup> = Vec::new();
        for (label, value, group_key) in rows {
            let option = FilterOption::new(label, value);
            match groups.iter_mut().find(|g| g.label == group_key) {
                Some(group) => group.options.push(option),
                None => groups.push(OptionGroup::new(group_key, vec![option])),
            }
        }

        Self::grouped(all_label, groups)
    }

    /// Label shown when no value is selected.
    #[inline]
    pub fn all_label(&self) -> &str {
        &self.all_label
    }

    /// Flat options (empty for purely grouped sets).
    #[inline]
    pub fn ungrouped(&self) -> &[FilterOption] {
        &self.ungrouped
    }

    /// Labeled groups (empty for flat sets).
    #[inline]
    pub fn groups(&self) -> &[OptionGroup] {
        &self.grouped
    }

    /// Iterate all options, flat first, then group by group.
    pub fn iter(&self) -> impl Iterator<Item = &FilterOption> {
        self.ungrouped
            .iter()
            .chain(self.grouped.iter().flat_map(|g| g.options.iter()))
    }

    /// Look up the human label for a value. `None` if the value is not
    /// in this set.
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    /// Check if a value belongs to this set.
    #[inline]
    pub fn contains_value(&self, value: &str) -> bool {
        self.label_for(value).is_some()
    }

    /// Total option count across flat options and groups.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
