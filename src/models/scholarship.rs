//! Scholarship record data structure.
//!
//! Field names on the wire follow the marketplace backend's JSON shape
//! (`_id`, `scholarshipName`, `applicationFees`, ...). Every field decodes
//! leniently: missing, `null`, or mistyped values fall back to an empty
//! string or `None` instead of failing the record.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::decode;
use crate::error::Result;

/// A single scholarship listing as returned by the marketplace API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ScholarshipRecord {
    /// Opaque unique identifier
    #[serde(rename = "_id", default, deserialize_with = "decode::string")]
    pub id: String,

    /// Scholarship display name
    #[serde(
        rename = "scholarshipName",
        default,
        deserialize_with = "decode::string"
    )]
    pub name: String,

    #[serde(rename = "universityName", default, deserialize_with = "decode::string")]
    pub university_name: String,

    #[serde(
        rename = "universityCountry",
        default,
        deserialize_with = "decode::string"
    )]
    pub university_country: String,

    #[serde(rename = "universityCity", default, deserialize_with = "decode::string")]
    pub university_city: String,

    /// Degree label (Diploma, Bachelor, Masters, PhD, ...)
    #[serde(default, deserialize_with = "decode::string")]
    pub degree: String,

    /// Scholarship category label (Full fund, Partial, Self-fund, ...)
    #[serde(
        rename = "scholarshipCategory",
        default,
        deserialize_with = "decode::string"
    )]
    pub category: String,

    /// Application fee; `None` means free
    #[serde(
        rename = "applicationFees",
        default,
        deserialize_with = "decode::amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub application_fee: Option<f64>,

    /// Raw post date as sent by the backend
    #[serde(
        rename = "scholarshipPostDate",
        default,
        deserialize_with = "decode::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub posted_at: Option<String>,

    #[serde(
        rename = "universityImage",
        default,
        deserialize_with = "decode::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub university_image: Option<String>,

    #[serde(
        rename = "tuitionFees",
        default,
        deserialize_with = "decode::amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub tuition_fees: Option<f64>,

    #[serde(
        rename = "subjectCategory",
        default,
        deserialize_with = "decode::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub subject_category: Option<String>,

    #[serde(
        rename = "applicationDeadline",
        default,
        deserialize_with = "decode::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub deadline: Option<String>,
}

impl ScholarshipRecord {
    /// Application fee with a missing value treated as zero.
    pub fn fee(&self) -> f64 {
        self.application_fee.unwrap_or(0.0)
    }

    /// Display label for the application fee.
    pub fn fee_label(&self) -> String {
        let fee = self.fee();
        if fee <= 0.0 {
            "Free".to_string()
        } else if fee.fract() == 0.0 {
            format!("${fee:.0}")
        } else {
            format!("${fee:.2}")
        }
    }

    /// Parsed post date. Unparseable or missing dates yield `None`.
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.posted_at.as_deref()?)
    }

    /// Format the record for display using a template.
    ///
    /// Supported placeholders:
    /// - `{id}`, `{name}`, `{university}`, `{city}`, `{country}`
    /// - `{degree}`, `{category}`, `{fee}`, `{posted}`
    pub fn format(&self, template: &str) -> String {
        let posted = self
            .posted_at()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());

        template
            .replace("{id}", &self.id)
            .replace("{name}", &self.name)
            .replace("{university}", &self.university_name)
            .replace("{city}", &self.university_city)
            .replace("{country}", &self.university_country)
            .replace("{degree}", &self.degree)
            .replace("{category}", &self.category)
            .replace("{fee}", &self.fee_label())
            .replace("{posted}", &posted)
    }

    /// Decode a collection response body.
    ///
    /// Accepts the API envelope `{ "data": [...] }` or a bare array. A missing
    /// or `null` `data` field is an empty collection. Entries that are not
    /// JSON objects are skipped.
    pub fn parse_collection(body: &str) -> Result<Vec<Self>> {
        decode::collection(body, "scholarship")
    }

    /// Decode a single-record response body (`{ "data": {...} }` or a bare object).
    pub fn parse_one(body: &str) -> Result<Self> {
        decode::single(body, "scholarship")
    }
}

/// Parse an RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS`, or a plain date.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ScholarshipRecord {
        ScholarshipRecord {
            id: "65a1".to_string(),
            name: "Global Excellence".to_string(),
            university_name: "University of Toronto".to_string(),
            university_country: "Canada".to_string(),
            university_city: "Toronto".to_string(),
            degree: "Masters".to_string(),
            category: "Full fund".to_string(),
            application_fee: Some(50.0),
            posted_at: Some("2024-03-15".to_string()),
            ..ScholarshipRecord::default()
        }
    }

    #[test]
    fn test_decode_backend_field_names() {
        let json = r#"{
            "_id": "abc123",
            "scholarshipName": "Alpha Grant",
            "universityName": "MIT",
            "universityCountry": "USA",
            "universityCity": "Cambridge",
            "degree": "PhD",
            "scholarshipCategory": "Full fund",
            "applicationFees": 100,
            "scholarshipPostDate": "2024-01-01T08:30:00.000Z",
            "universityImage": "https://example.com/mit.png"
        }"#;

        let record: ScholarshipRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "abc123");
        assert_eq!(record.name, "Alpha Grant");
        assert_eq!(record.university_country, "USA");
        assert_eq!(record.category, "Full fund");
        assert_eq!(record.application_fee, Some(100.0));
        assert_eq!(
            record.posted_at().unwrap().to_rfc3339(),
            "2024-01-01T08:30:00+00:00"
        );
    }

    #[test]
    fn test_decode_degrades_missing_and_mistyped_fields() {
        let json = r#"{
            "_id": { "$oid": "65f0c0ffee" },
            "scholarshipName": null,
            "degree": 3,
            "applicationFees": "not a number",
            "scholarshipPostDate": "someday"
        }"#;

        let record: ScholarshipRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "65f0c0ffee");
        assert_eq!(record.name, "");
        assert_eq!(record.degree, "3");
        assert_eq!(record.university_name, "");
        assert_eq!(record.application_fee, None);
        assert_eq!(record.fee(), 0.0);
        assert!(record.posted_at().is_none());
    }

    #[test]
    fn test_fee_accepts_numeric_strings_and_rejects_negative() {
        let record: ScholarshipRecord =
            serde_json::from_str(r#"{ "applicationFees": " 25.5 " }"#).unwrap();
        assert_eq!(record.application_fee, Some(25.5));

        let record: ScholarshipRecord =
            serde_json::from_str(r#"{ "applicationFees": -10 }"#).unwrap();
        assert_eq!(record.application_fee, None);
    }

    #[test]
    fn test_fee_label() {
        let mut record = sample_record();
        assert_eq!(record.fee_label(), "$50");

        record.application_fee = Some(12.5);
        assert_eq!(record.fee_label(), "$12.50");

        record.application_fee = Some(0.0);
        assert_eq!(record.fee_label(), "Free");

        record.application_fee = None;
        assert_eq!(record.fee_label(), "Free");
    }

    #[test]
    fn test_posted_at_plain_date_is_utc_midnight() {
        let record = sample_record();
        assert_eq!(
            record.posted_at().unwrap().to_rfc3339(),
            "2024-03-15T00:00:00+00:00"
        );
    }

    #[test]
    fn test_format() {
        let record = sample_record();
        let result = record.format("{name} @ {university} ({country}) - {fee} [{posted}]");
        assert_eq!(
            result,
            "Global Excellence @ University of Toronto (Canada) - $50 [2024-03-15]"
        );
    }

    #[test]
    fn test_parse_collection_envelope() {
        let body = r#"{ "success": true, "data": [
            { "_id": "1", "scholarshipName": "One" },
            "garbage",
            { "_id": "2", "scholarshipName": "Two" }
        ] }"#;

        let records = ScholarshipRecord::parse_collection(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "One");
        assert_eq!(records[1].name, "Two");
    }

    #[test]
    fn test_parse_collection_missing_data_is_empty() {
        assert!(ScholarshipRecord::parse_collection(r#"{ "success": true }"#)
            .unwrap()
            .is_empty());
        assert!(ScholarshipRecord::parse_collection(r#"{ "data": null }"#)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_parse_collection_bare_array() {
        let records = ScholarshipRecord::parse_collection(r#"[{ "_id": "x" }]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "x");
    }

    #[test]
    fn test_parse_collection_rejects_malformed_body() {
        assert!(ScholarshipRecord::parse_collection("<html>").is_err());
        assert!(ScholarshipRecord::parse_collection(r#"{ "data": "oops" }"#).is_err());
        assert!(ScholarshipRecord::parse_collection("42").is_err());
    }

    #[test]
    fn test_parse_one() {
        let record =
            ScholarshipRecord::parse_one(r#"{ "data": { "_id": "9", "degree": "PhD" } }"#)
                .unwrap();
        assert_eq!(record.id, "9");
        assert_eq!(record.degree, "PhD");

        let bare = ScholarshipRecord::parse_one(r#"{ "_id": "10" }"#).unwrap();
        assert_eq!(bare.id, "10");
    }
}
