//! HTTP client for the portfolio backend.
//!
//! The backend owns persistence, auth, and uploads; the player only
//! reads the project list and the animation settings row, and writes
//! the settings row back from the in-app overlay. Every failure path
//! degrades gracefully upstream (defaults or placeholders), so errors
//! here carry context but no recovery logic.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use spira_model::{AnimationSettings, ProjectWithImages};

/// Envelope every backend endpoint wraps its payload in.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server error: {0}")]
    Server(String),
    #[error("empty response from server")]
    EmptyResponse,
    #[error("image decode failed: {0}")]
    Decode(String),
}

/// API client for the portfolio backend.
#[derive(Clone, Debug)]
pub struct ApiService {
    client: Client,
    base_url: String,
    api_version: String,
}

impl ApiService {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        log::info!("[ApiService] base URL: {}", base_url);

        Self {
            client,
            base_url,
            api_version: "v1".to_string(),
        }
    }

    /// Build a versioned API URL
    pub fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!(
            "{}/api/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            path
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let response = self.client.get(self.build_url(path)).send().await?;
        match response.status() {
            StatusCode::OK => {
                let envelope: ApiResponse<T> = response.json().await?;
                if let Some(error) = envelope.error {
                    return Err(ApiError::Server(error));
                }
                envelope.data.ok_or(ApiError::EmptyResponse)
            }
            status => Err(ApiError::Server(format!(
                "unexpected status {status} for {path}"
            ))),
        }
    }

    /// Ordered project list for the spiral.
    pub async fn list_projects(
        &self,
    ) -> Result<Vec<ProjectWithImages>, ApiError> {
        self.get_json("projects").await
    }

    /// The persisted animation settings row; `None` when the backend
    /// has no row yet (defaults apply).
    pub async fn animation_settings(
        &self,
    ) -> Result<Option<AnimationSettings>, ApiError> {
        let response = self
            .client
            .get(self.build_url("settings/animation"))
            .send()
            .await?;
        match response.status() {
            StatusCode::OK => {
                let envelope: ApiResponse<AnimationSettings> =
                    response.json().await?;
                if let Some(error) = envelope.error {
                    return Err(ApiError::Server(error));
                }
                Ok(envelope.data)
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(ApiError::Server(format!(
                "unexpected status {status} for settings/animation"
            ))),
        }
    }

    /// Persist the animation settings row (settings overlay only).
    pub async fn save_animation_settings(
        &self,
        settings: AnimationSettings,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.build_url("settings/animation"))
            .json(&settings)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::Server(format!(
                "unexpected status {} saving settings",
                response.status()
            )))
        }
    }

    /// Raw bytes of an absolute image URL (object storage, CDN, ...).
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Server(format!(
                "unexpected status {} for {url}",
                response.status()
            )));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_versioned_and_slash_tolerant() {
        let api = ApiService::new("http://localhost:3000/".to_string());
        assert_eq!(
            api.build_url("/projects"),
            "http://localhost:3000/api/v1/projects"
        );
        assert_eq!(
            api.build_url("settings/animation"),
            "http://localhost:3000/api/v1/settings/animation"
        );
    }

    #[test]
    fn envelope_surfaces_server_errors() {
        let envelope: ApiResponse<Vec<u8>> = serde_json::from_str(
            r#"{"data": null, "error": "database unavailable"}"#,
        )
        .expect("parse");
        assert_eq!(envelope.error.as_deref(), Some("database unavailable"));
        assert!(envelope.data.is_none());
    }
}
