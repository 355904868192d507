//! Signed-in user session.
//!
//! The identity provider issues the token; this crate only carries it to the
//! API and reads the user's role for dashboard dispatch.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::decode;
use crate::error::Result;

/// Marketplace role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    #[default]
    Student,
}

impl Role {
    /// Parse a role label case-insensitively. Unknown labels map to `Student`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            "moderator" => Role::Moderator,
            _ => Role::Student,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.as_deref().map(Role::from_label).unwrap_or_default())
    }
}

/// Profile of the signed-in user as stored by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    #[serde(default)]
    pub role: Role,

    /// Identity provider user id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

impl UserProfile {
    /// Decode a user list response (`/api/users`).
    pub fn parse_collection(body: &str) -> Result<Vec<Self>> {
        decode::collection(body, "user")
    }
}

/// An authenticated session, passed explicitly to whatever needs identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: UserProfile,
    token: Option<String>,
}

impl Session {
    pub fn new(user: UserProfile, token: Option<String>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        Self { user, token }
    }

    /// Session without a user profile, carrying only a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::new(UserProfile::default(), Some(token.into()))
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Value for the `Authorization` header, if a token is present.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }
}
