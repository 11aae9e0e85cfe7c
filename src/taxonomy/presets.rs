//! Standard publication and announcement type tables.
//!
//! These mirror the conventional filter types a government publishing
//! site exposes. They are plain data; embedders with their own type
//! registry supply rows through [`TaxonomySource`](super::TaxonomySource)
//! instead.

use super::TypeRow;

fn rows(table: &[(&str, &str, &str)]) -> Vec<TypeRow> {
    table
        .iter()
        .map(|(label, slug, group)| (label.to_string(), slug.to_string(), group.to_string()))
        .collect()
}

/// Standard publication filter types as `(label, slug, group key)` rows.
pub fn standard_publication_types() -> Vec<TypeRow> {
    rows(&[
        ("Policy papers", "policy-papers", "Policy"),
        ("Consultations", "consultations", "Policy"),
        ("Impact assessments", "impact-assessments", "Policy"),
        ("Guidance", "guidance", "Guidance"),
        ("Forms", "forms", "Guidance"),
        ("Statistics", "statistics", "Statistics"),
        ("Research and analysis", "research-and-analysis", "Research"),
        ("Independent reports", "independent-reports", "Research"),
        ("Corporate reports", "corporate-reports", "Corporate"),
        ("Correspondence", "correspondence", "Corporate"),
        ("Transparency data", "transparency-data", "Transparency"),
        ("FOI releases", "foi-releases", "Transparency"),
    ])
}

/// Standard announcement filter types as `(label, slug, group key)` rows.
pub fn standard_announcement_types() -> Vec<TypeRow> {
    rows(&[
        ("Press releases", "press-releases", "News"),
        ("News stories", "news-stories", "News"),
        ("Fatality notices", "fatality-notices", "News"),
        ("Speeches", "speeches", "Speeches and statements"),
        ("Statements", "statements", "Speeches and statements"),
        ("Rebuttals", "rebuttals", "News"),
    ])
}
