//! User-selected view parameters.
//!
//! Changing the search term, a facet filter, or the sort key sends the
//! view back to page 1. Only the page setters move between pages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Sort order for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Newest post date first
    #[default]
    MostRecent,
    /// Lowest application fee first
    FeeAscending,
    /// Highest application fee first
    FeeDescending,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::MostRecent => "most-recent",
            SortKey::FeeAscending => "fee-ascending",
            SortKey::FeeDescending => "fee-descending",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "recent" | "most-recent" => Ok(SortKey::MostRecent),
            "fees-low" | "fee-ascending" => Ok(SortKey::FeeAscending),
            "fees-high" | "fee-descending" => Ok(SortKey::FeeDescending),
            other => Err(AppError::validation(format!(
                "unknown sort key '{other}' (expected recent, fees-low, or fees-high)"
            ))),
        }
    }
}

/// Facet selection: everything, or one exact value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FacetFilter {
    #[default]
    All,
    Only(String),
}

impl FacetFilter {
    /// Parse a selector value. `"all"` selects everything.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            FacetFilter::All
        } else {
            FacetFilter::Only(value.to_string())
        }
    }

    /// Exact, case-sensitive match.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FacetFilter::All => true,
            FacetFilter::Only(expected) => expected == value,
        }
    }
}

impl fmt::Display for FacetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetFilter::All => f.write_str("all"),
            FacetFilter::Only(value) => f.write_str(value),
        }
    }
}

/// Current search/filter/sort/page state of one listing view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewParameters {
    search_term: String,
    category_filter: FacetFilter,
    country_filter: FacetFilter,
    sort_key: SortKey,
    page_number: usize,
    page_size: usize,
}

impl ViewParameters {
    /// Defaults for a freshly mounted view.
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            category_filter: FacetFilter::All,
            country_filter: FacetFilter::All,
            sort_key: SortKey::default(),
            page_number: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn category_filter(&self) -> &FacetFilter {
        &self.category_filter
    }

    pub fn country_filter(&self) -> &FacetFilter {
        &self.country_filter
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.search_term {
            self.search_term = term;
            self.page_number = 1;
        }
    }

    pub fn set_category_filter(&mut self, filter: FacetFilter) {
        if filter != self.category_filter {
            self.category_filter = filter;
            self.page_number = 1;
        }
    }

    pub fn set_country_filter(&mut self, filter: FacetFilter) {
        if filter != self.country_filter {
            self.country_filter = filter;
            self.page_number = 1;
        }
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        if key != self.sort_key {
            self.sort_key = key;
            self.page_number = 1;
        }
    }

    /// Jump to a page. Zero is treated as page 1.
    pub fn set_page_number(&mut self, page: usize) {
        self.page_number = page.max(1);
    }

    /// Advance one page, never past `total_pages`.
    pub fn next_page(&mut self, total_pages: usize) {
        self.page_number = (self.page_number + 1).min(total_pages.max(1));
    }

    /// Go back one page, never before page 1.
    pub fn previous_page(&mut self) {
        self.page_number = self.page_number.saturating_sub(1).max(1);
    }
}

impl Default for ViewParameters {
    fn default() -> Self {
        Self::new(9)
    }
}
