// src/services/source.rs

//! Scholarship collection sources.
//!
//! The marketplace backend owns the data; a source only fetches and decodes
//! it. [`HttpScholarshipSource`] talks to the REST API and
//! [`FileScholarshipSource`] reads a saved response from disk.

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{ApiConfig, Application, Review, ScholarshipRecord, Session, UserProfile};
use crate::utils::http;

const SCHOLARSHIPS_PATH: &str = "api/scholarships";
const REVIEWS_BY_SCHOLARSHIP_PATH: &str = "api/reviews/scholarship/";
const APPLICATIONS_PATH: &str = "api/applications";
const USERS_PATH: &str = "api/users";

/// Anything that can supply the scholarship collection.
#[async_trait]
pub trait ScholarshipSource: Send + Sync {
    /// Fetch the full, unpaginated collection.
    async fn fetch_scholarships(&self) -> Result<Vec<ScholarshipRecord>>;
}

/// REST API source (`GET {base_url}/api/scholarships`).
#[derive(Debug, Clone)]
pub struct HttpScholarshipSource {
    client: Client,
    base_url: Url,
    session: Option<Session>,
    search: Option<String>,
}

impl HttpScholarshipSource {
    /// Create a source for the configured API.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = http::create_async_client(config)?;
        Self::with_client(client, &config.base_url)
    }

    /// Create a source with an existing HTTP client.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            client,
            base_url,
            session: None,
            search: None,
        })
    }

    /// Authenticate requests with the session's token.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Ask the backend to pre-filter by a search query (`?search=`).
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.search = (!query.trim().is_empty()).then_some(query);
        self
    }

    fn endpoint(&self, path: &str) -> Result<String> {
        Ok(self.base_url.join(path)?.to_string())
    }

    /// Top-rated scholarships for the home page.
    pub async fn fetch_top(&self) -> Result<Vec<ScholarshipRecord>> {
        let url = self.endpoint(&format!("{SCHOLARSHIPS_PATH}/top"))?;
        let body = http::get_text(&self.client, &url, &[], self.session.as_ref()).await?;
        ScholarshipRecord::parse_collection(&body)
    }

    /// One scholarship for the details page.
    pub async fn fetch_by_id(&self, id: &str) -> Result<ScholarshipRecord> {
        let url = self.endpoint_with_id(&format!("{SCHOLARSHIPS_PATH}/"), id)?;
        let body = http::get_text(&self.client, &url, &[], self.session.as_ref()).await?;
        ScholarshipRecord::parse_one(&body)
    }

    /// Reviews left on one scholarship.
    pub async fn fetch_reviews(&self, scholarship_id: &str) -> Result<Vec<Review>> {
        let url = self.endpoint_with_id(REVIEWS_BY_SCHOLARSHIP_PATH, scholarship_id)?;
        let body = http::get_text(&self.client, &url, &[], self.session.as_ref()).await?;
        let reviews = Review::parse_collection(&body)?;
        log::debug!("Fetched {} reviews for {scholarship_id}", reviews.len());
        Ok(reviews)
    }

    /// Every application (moderator and admin sessions).
    pub async fn fetch_applications(&self) -> Result<Vec<Application>> {
        let url = self.endpoint(APPLICATIONS_PATH)?;
        let body = http::get_text(&self.client, &url, &[], self.session.as_ref()).await?;
        let applications = Application::parse_collection(&body)?;
        log::debug!("Fetched {} applications", applications.len());
        Ok(applications)
    }

    /// Every registered user (admin sessions).
    pub async fn fetch_users(&self) -> Result<Vec<UserProfile>> {
        let url = self.endpoint(USERS_PATH)?;
        let body = http::get_text(&self.client, &url, &[], self.session.as_ref()).await?;
        UserProfile::parse_collection(&body)
    }

    /// `prefix` joined with `id` as a single, escaped path segment.
    fn endpoint_with_id(&self, prefix: &str, id: &str) -> Result<String> {
        if id.trim().is_empty() {
            return Err(AppError::validation("id is empty"));
        }
        let mut url = Url::parse(&self.endpoint(prefix)?)?;
        url.path_segments_mut()
            .map_err(|_| AppError::config("API base URL cannot have path segments"))?
            .pop_if_empty()
            .push(id);
        Ok(url.into())
    }
}

#[async_trait]
impl ScholarshipSource for HttpScholarshipSource {
    async fn fetch_scholarships(&self) -> Result<Vec<ScholarshipRecord>> {
        let url = self.endpoint(SCHOLARSHIPS_PATH)?;
        let query: Vec<(&str, &str)> = self
            .search
            .as_deref()
            .map(|q| vec![("search", q)])
            .unwrap_or_default();

        log::debug!("Fetching scholarships from {url}");
        let body = http::get_text(&self.client, &url, &query, self.session.as_ref()).await?;
        let records = ScholarshipRecord::parse_collection(&body)?;
        log::info!("Fetched {} scholarships", records.len());
        Ok(records)
    }
}

/// Source backed by a saved JSON response.
#[derive(Debug, Clone)]
pub struct FileScholarshipSource {
    path: PathBuf,
}

impl FileScholarshipSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ScholarshipSource for FileScholarshipSource {
    async fn fetch_scholarships(&self) -> Result<Vec<ScholarshipRecord>> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        let records = ScholarshipRecord::parse_collection(&body)?;
        log::info!(
            "Loaded {} scholarships from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}
