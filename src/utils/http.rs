// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::{AppError, Result};
use crate::models::{ApiConfig, Session};

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &ApiConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// GET `url` and return the body text.
///
/// Attaches the session's bearer token when present. A 401 answer becomes
/// [`AppError::Unauthorized`]; any other non-success status becomes
/// [`AppError::Status`].
pub async fn get_text(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
    session: Option<&Session>,
) -> Result<String> {
    let mut request = client.get(url);
    if !query.is_empty() {
        request = request.query(query);
    }
    if let Some(bearer) = session.and_then(Session::bearer) {
        request = request.header(reqwest::header::AUTHORIZATION, bearer);
    }

    let response = request.send().await?;
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(AppError::Unauthorized);
    }
    if !status.is_success() {
        return Err(AppError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response.text().await?)
}
