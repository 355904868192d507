//! Stable listing sort.

use std::cmp::{Ordering, Reverse};

use crate::models::ScholarshipRecord;

use super::params::SortKey;

/// Sort in place. Records with equal keys keep their relative order.
pub fn sort_records(items: &mut [&ScholarshipRecord], key: SortKey) {
    match key {
        // `None` orders before any date, so undated records end up last
        SortKey::MostRecent => items.sort_by_cached_key(|r| Reverse(r.posted_at())),
        SortKey::FeeAscending => items.sort_by(|a, b| compare_fee(a, b)),
        SortKey::FeeDescending => items.sort_by(|a, b| compare_fee(b, a)),
    }
}

fn compare_fee(a: &ScholarshipRecord, b: &ScholarshipRecord) -> Ordering {
    a.fee().partial_cmp(&b.fee()).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, fee: Option<f64>, posted: Option<&str>) -> ScholarshipRecord {
        ScholarshipRecord {
            id: id.to_string(),
            application_fee: fee,
            posted_at: posted.map(str::to_string),
            ..ScholarshipRecord::default()
        }
    }

    fn ids(items: &[&ScholarshipRecord]) -> Vec<String> {
        items.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_most_recent_puts_undated_last() {
        let records = [
            record("old", None, Some("2023-05-01")),
            record("undated", None, None),
            record("new", None, Some("2024-02-01T12:00:00Z")),
            record("garbage", None, Some("yesterday")),
        ];
        let mut items: Vec<_> = records.iter().collect();
        sort_records(&mut items, SortKey::MostRecent);
        assert_eq!(ids(&items), vec!["new", "old", "undated", "garbage"]);
    }

    #[test]
    fn test_fee_sorts_treat_missing_as_zero() {
        let records = [
            record("fifty", Some(50.0), None),
            record("free", None, None),
            record("ten", Some(10.0), None),
        ];
        let mut items: Vec<_> = records.iter().collect();

        sort_records(&mut items, SortKey::FeeAscending);
        assert_eq!(ids(&items), vec!["free", "ten", "fifty"]);

        sort_records(&mut items, SortKey::FeeDescending);
        assert_eq!(ids(&items), vec!["fifty", "ten", "free"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let records = [
            record("a", Some(20.0), Some("2024-01-01")),
            record("b", None, Some("2024-01-01")),
            record("c", Some(20.0), Some("2024-01-01")),
            record("d", Some(0.0), Some("2024-01-01")),
        ];

        let mut items: Vec<_> = records.iter().collect();
        sort_records(&mut items, SortKey::FeeAscending);
        assert_eq!(ids(&items), vec!["b", "d", "a", "c"]);

        let mut items: Vec<_> = records.iter().collect();
        sort_records(&mut items, SortKey::FeeDescending);
        assert_eq!(ids(&items), vec!["a", "c", "b", "d"]);

        let mut items: Vec<_> = records.iter().collect();
        sort_records(&mut items, SortKey::MostRecent);
        assert_eq!(ids(&items), vec!["a", "b", "c", "d"]);
    }
}
