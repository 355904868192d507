//! Collection view engine.
//!
//! Derives the visible page of a scholarship listing from the loaded
//! collection and the current [`ViewParameters`]:
//!
//! 1. search (name, university, degree; case-insensitive)
//! 2. category filter (exact)
//! 3. country filter (exact)
//! 4. stable sort
//! 5. pagination
//!
//! The engine is pure: the same collection and parameters always produce
//! the same [`ViewResult`], and no input makes it fail.

pub mod facets;
pub mod filter;
pub mod page;
pub mod params;
pub mod sort;
pub mod stats;

use std::collections::HashSet;

use crate::models::ScholarshipRecord;

pub use facets::Facets;
pub use page::{page_slice, total_pages};
pub use params::{FacetFilter, SortKey, ViewParameters};
pub use stats::{
    ApplicationStatusCounts, CatalogStats, ReviewSummary, RoleCounts, average_rating, five_star_count,
};

/// A loaded, read-only scholarship collection with its facet values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    records: Vec<ScholarshipRecord>,
    facets: Facets,
}

impl Collection {
    /// Wrap freshly fetched records.
    ///
    /// Every record is kept. A repeated non-empty `id` is logged. Facets are
    /// computed here, once per load.
    pub fn new(records: Vec<ScholarshipRecord>) -> Self {
        {
            let mut seen = HashSet::new();
            for record in &records {
                if !record.id.is_empty() && !seen.insert(record.id.as_str()) {
                    log::warn!("Duplicate scholarship id {}", record.id);
                }
            }
        }

        let facets = Facets::from_records(&records);
        Self { records, facets }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ScholarshipRecord] {
        &self.records
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<ScholarshipRecord>> for Collection {
    fn from(records: Vec<ScholarshipRecord>) -> Self {
        Self::new(records)
    }
}

/// The rendered state of one listing view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewResult<'a> {
    /// Records on the current page, at most `page_size`
    pub visible_items: Vec<&'a ScholarshipRecord>,
    /// Page count, never less than 1
    pub total_pages: usize,
    /// Page actually shown after clamping
    pub page_number: usize,
    /// Records left after search and filters
    pub filtered_count: usize,
    pub available_categories: &'a [String],
    pub available_countries: &'a [String],
}

impl ViewResult<'_> {
    /// True when nothing matched ("no results" state).
    pub fn is_empty(&self) -> bool {
        self.visible_items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }
}

/// Search, filter, and sort without paginating.
pub fn filter_and_sort<'a>(
    collection: &'a Collection,
    params: &ViewParameters,
) -> Vec<&'a ScholarshipRecord> {
    let mut items = filter::apply(collection.records(), params);
    sort::sort_records(&mut items, params.sort_key());
    items
}

/// Derive the visible page for `params`.
///
/// A page number past the last page (or zero) renders page 1.
pub fn derive_view<'a>(collection: &'a Collection, params: &ViewParameters) -> ViewResult<'a> {
    let items = filter_and_sort(collection, params);
    let page_size = params.page_size();
    let total_pages = page::total_pages(items.len(), page_size);
    let page_number = page::clamp_page(params.page_number(), total_pages);
    let visible_items = page::page_slice(&items, page_number, page_size).to_vec();

    ViewResult {
        visible_items,
        total_pages,
        page_number,
        filtered_count: items.len(),
        available_categories: &collection.facets().categories,
        available_countries: &collection.facets().countries,
    }
}
