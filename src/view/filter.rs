//! Search and facet filters.

use crate::models::ScholarshipRecord;

use super::params::ViewParameters;

/// Case-insensitive substring match on name, university, and degree.
///
/// `needle` must already be lower-cased. An empty needle matches everything.
pub fn matches_search(record: &ScholarshipRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [&record.name, &record.university_name, &record.degree]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Apply search, then category, then country.
pub fn apply<'a, I>(records: I, params: &ViewParameters) -> Vec<&'a ScholarshipRecord>
where
    I: IntoIterator<Item = &'a ScholarshipRecord>,
{
    let needle = params.search_term().to_lowercase();
    records
        .into_iter()
        .filter(|r| matches_search(r, &needle))
        .filter(|r| params.category_filter().matches(&r.category))
        .filter(|r| params.country_filter().matches(&r.university_country))
        .collect()
}
