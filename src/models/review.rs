//! Scholarship review left by a student.

use serde::{Deserialize, Serialize};

use super::decode;
use crate::error::Result;

/// Highest rating a review can give.
pub const MAX_RATING: f64 = 5.0;

/// A review as returned by `/api/reviews`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Review {
    #[serde(rename = "_id", default, deserialize_with = "decode::string")]
    pub id: String,

    #[serde(rename = "scholarshipId", default, deserialize_with = "decode::string")]
    pub scholarship_id: String,

    #[serde(rename = "scholarshipName", default, deserialize_with = "decode::string")]
    pub scholarship_name: String,

    #[serde(rename = "universityName", default, deserialize_with = "decode::string")]
    pub university_name: String,

    #[serde(rename = "userName", default, deserialize_with = "decode::string")]
    pub user_name: String,

    #[serde(rename = "userEmail", default, deserialize_with = "decode::string")]
    pub user_email: String,

    /// Star rating, 0 to 5. Older records send it as `rating`.
    #[serde(
        rename = "ratingPoint",
        alias = "rating",
        default,
        deserialize_with = "decode::amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<f64>,

    #[serde(
        rename = "reviewComment",
        alias = "comment",
        default,
        deserialize_with = "decode::string"
    )]
    pub comment: String,

    #[serde(
        rename = "reviewDate",
        default,
        deserialize_with = "decode::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
}

impl Review {
    /// Rating clamped to `0..=5`; a missing rating counts as 0.
    pub fn rating(&self) -> f64 {
        self.rating.unwrap_or(0.0).min(MAX_RATING)
    }

    pub fn is_five_star(&self) -> bool {
        self.rating() == MAX_RATING
    }

    pub fn parse_collection(body: &str) -> Result<Vec<Self>> {
        decode::collection(body, "review")
    }
}
