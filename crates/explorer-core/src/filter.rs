// crates/explorer-core/src/filter.rs
//! # Filter Predicate Engine
//!
//! Pure functions turning `(countries, search, region)` into the two derived
//! values a view renders: the region options and the filtered list.

use crate::model::Country;
use crate::text::{fold_key, NameMatch};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The two user-controlled filter fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    /// Case-insensitive substring of the common name.
    pub search_text: String,
    /// Case-insensitive exact region; empty means every region.
    pub region_filter: String,
}

impl FilterState {
    pub fn new(search_text: impl Into<String>, region_filter: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            region_filter: region_filter.into(),
        }
    }

    /// True when at least one field narrows the list.
    pub fn is_active(&self) -> bool {
        !self.search_text.is_empty() || !self.region_filter.is_empty()
    }

    /// Single-record form of [`filter_countries`]. Folds the needles on
    /// every call; prefer the list functions for whole datasets.
    pub fn matches(&self, country: &Country) -> bool {
        Needles::new(&self.search_text, &self.region_filter).accepts(country)
    }

    pub fn apply<'a>(&self, countries: &'a [Country]) -> Vec<&'a Country> {
        filter_countries(countries, &self.search_text, &self.region_filter)
    }
}

/// One entry of the region drop-down.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionOption {
    /// Region as spelled in the data, e.g. `"Americas"`.
    pub label: String,
    /// Lower-cased label; this is what lands in the filter state.
    pub value: String,
}

/// Both filter fields, folded once.
struct Needles {
    search: String,
    region: String,
}

impl Needles {
    fn new(search_text: &str, region_filter: &str) -> Self {
        Self {
            search: fold_key(search_text),
            region: fold_key(region_filter),
        }
    }

    fn accepts(&self, country: &Country) -> bool {
        (self.region.is_empty() || fold_key(&country.region) == self.region)
            && (self.search.is_empty() || country.name_contains_folded(&self.search))
    }
}

/// Unique regions of `countries`, ascending, without duplicates.
pub fn derive_regions(countries: &[Country]) -> Vec<String> {
    countries
        .iter()
        .map(|c| c.region.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// [`derive_regions`] paired with the value each option submits.
pub fn region_options(countries: &[Country]) -> Vec<RegionOption> {
    derive_regions(countries)
        .into_iter()
        .map(|label| RegionOption {
            value: fold_key(&label),
            label,
        })
        .collect()
}

/// Stable filter: keeps source order, never reorders.
///
/// A country is kept iff its region equals `region_filter` (or the filter is
/// empty) and its common name contains `search_text` (or the search is
/// empty). Both comparisons ignore case.
pub fn filter_countries<'a>(
    countries: &'a [Country],
    search_text: &str,
    region_filter: &str,
) -> Vec<&'a Country> {
    filter_indices(countries, search_text, region_filter)
        .into_iter()
        .map(|i| &countries[i])
        .collect()
}

/// Same predicate as [`filter_countries`], returning positions instead of
/// references so callers can hold the result next to an owned dataset.
pub fn filter_indices(countries: &[Country], search_text: &str, region_filter: &str) -> Vec<usize> {
    let needles = Needles::new(search_text, region_filter);
    countries
        .iter()
        .enumerate()
        .filter(|(_, c)| needles.accepts(c))
        .map(|(i, _)| i)
        .collect()
}
