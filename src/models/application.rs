//! Scholarship application submitted by a student.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::decode;
use crate::error::Result;

/// Processing stage of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Rejected,
}

impl ApplicationStatus {
    /// Parse a status label case-insensitively. Unknown labels map to `Pending`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "processing" => ApplicationStatus::Processing,
            "completed" => ApplicationStatus::Completed,
            "rejected" => ApplicationStatus::Rejected,
            _ => ApplicationStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Processing => "processing",
            ApplicationStatus::Completed => "completed",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ApplicationStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label
            .as_deref()
            .map(ApplicationStatus::from_label)
            .unwrap_or_default())
    }
}

/// An application as returned by `/api/applications`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Application {
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

    /// Stage of the application. Some records send it as `status`.
    #[serde(rename = "applicationStatus", alias = "status", default)]
    pub status: ApplicationStatus,

    #[serde(
        rename = "paymentStatus",
        default,
        deserialize_with = "decode::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_status: Option<String>,

    #[serde(
        rename = "applicationFees",
        default,
        deserialize_with = "decode::amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub application_fee: Option<f64>,
}

impl Application {
    pub fn parse_collection(body: &str) -> Result<Vec<Self>> {
        decode::collection(body, "application")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_backend_field_names() {
        let json = r#"{
            "_id": "a1",
            "scholarshipId": "s1",
            "userEmail": "ana@example.com",
            "applicationStatus": "Processing",
            "paymentStatus": "paid",
            "applicationFees": "$50"
        }"#;
        let application: Application = serde_json::from_str(json).unwrap();
        assert_eq!(application.status, ApplicationStatus::Processing);
        assert_eq!(application.payment_status.as_deref(), Some("paid"));
        assert_eq!(application.application_fee, Some(50.0));
    }

    #[test]
    fn test_status_alias_and_fallback() {
        let application: Application =
            serde_json::from_str(r#"{ "status": "completed" }"#).unwrap();
        assert_eq!(application.status, ApplicationStatus::Completed);

        let application: Application =
            serde_json::from_str(r#"{ "applicationStatus": null }"#).unwrap();
        assert_eq!(application.status, ApplicationStatus::Pending);

        assert_eq!(
            ApplicationStatus::from_label("on hold"),
            ApplicationStatus::Pending
        );
    }

    #[test]
    fn test_parse_collection() {
        let body = r#"{ "success": true, "data": [ { "_id": "a" }, { "_id": "b" } ] }"#;
        assert_eq!(Application::parse_collection(body).unwrap().len(), 2);
    }
}
