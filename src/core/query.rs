//! # Query Pipeline
//!
//! Pure functions over the fetched company collection. No I/O, no state:
//! `(records, filters) -> ordered list`, `(records) -> facet values`,
//! `(list, page, rows) -> page slice`. The `App` decides when to re-run
//! them; this module only computes.

use std::collections::BTreeSet;

use crate::api::Company;
use crate::core::state::{ALL_FACET, Filters, SortField};

/// Distinct facet values for the filter controls: `"All"` first, then every
/// distinct `location` / `industry` present in the records, ordinal ascending.
///
/// Equality is exact and case-sensitive — "NY" and "ny" are two facets.
pub fn derive_facets(companies: &[Company]) -> (Vec<String>, Vec<String>) {
    let locations = facet_values(companies.iter().map(|c| c.location.as_str()));
    let industries = facet_values(companies.iter().map(|c| c.industry.as_str()));
    (locations, industries)
}

fn facet_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let distinct: BTreeSet<&str> = values.collect();
    let mut out = Vec::with_capacity(distinct.len() + 1);
    out.push(ALL_FACET.to_string());
    out.extend(distinct.into_iter().map(String::from));
    out
}

/// Filters and sorts the collection. Steps run in a fixed order:
/// search containment, location equality, industry equality, then a stable
/// sort by the selected key. Never mutates its input.
pub fn apply(companies: &[Company], filters: &Filters) -> Vec<Company> {
    let needle = filters.search.trim().to_lowercase();

    let mut list: Vec<Company> = companies
        .iter()
        .filter(|c| needle.is_empty() || matches_search(c, &needle))
        .filter(|c| filters.location == ALL_FACET || c.location == filters.location)
        .filter(|c| filters.industry == ALL_FACET || c.industry == filters.industry)
        .cloned()
        .collect();

    // Vec::sort_by is stable: records with equal keys keep the relative
    // order they had before the sort, in both directions.
    let key = filters.sort_by;
    list.sort_by(|a, b| {
        let ord = sort_key(a, key.field()).cmp(&sort_key(b, key.field()));
        if key.descending() { ord.reverse() } else { ord }
    });

    list
}

/// Literal case-insensitive substring containment over name, description,
/// and website. Not tokenized, not fuzzy.
fn matches_search(c: &Company, needle: &str) -> bool {
    c.name.to_lowercase().contains(needle)
        || c.description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
        || c.website
            .as_deref()
            .is_some_and(|w| w.to_lowercase().contains(needle))
}

/// Sort keys compare as case-folded string representations of the field.
fn sort_key(c: &Company, field: SortField) -> String {
    match field {
        SortField::Name => c.name.to_lowercase(),
        SortField::Founded => c.founded.to_string(),
    }
}

/// The slice of `list` for the given zero-based page, clamped to bounds.
/// An out-of-range page yields an empty slice, never an error — the list
/// may legitimately shrink under the current page when filters change.
pub fn paginate(list: &[Company], page: usize, rows_per_page: usize) -> &[Company] {
    let start = page.saturating_mul(rows_per_page).min(list.len());
    let end = start.saturating_add(rows_per_page).min(list.len());
    &list[start..end]
}
