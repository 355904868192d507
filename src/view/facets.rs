//! Filter selector options derived from the loaded collection.

use std::collections::HashSet;

use crate::models::ScholarshipRecord;

/// Distinct category and country values in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub categories: Vec<String>,
    pub countries: Vec<String>,
}

impl Facets {
    /// Collect facet values from an unfiltered collection. Empty values are skipped.
    pub fn from_records(records: &[ScholarshipRecord]) -> Self {
        Self {
            categories: distinct(records.iter().map(|r| r.category.as_str())),
            countries: distinct(records.iter().map(|r| r.university_country.as_str())),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
