//! HTTP client for making requests to the API server

use serde::de::DeserializeOwned;

use crate::api::endpoints::GET_DOCTORS;
use crate::types::{Doctor, GetDoctorsResponse};

/// Error type for API operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// REST client for making requests
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Execute a GET request against an endpoint path
    pub async fn get<R>(&self, path: &'static str) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let body = self.client.get(&url).send().await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the full doctor list, unwrapping the success envelope
    pub async fn get_doctors(&self) -> Result<Vec<Doctor>, ClientError> {
        let response: GetDoctorsResponse = self.get(GET_DOCTORS).await?;
        unwrap_envelope(response)
    }
}

fn unwrap_envelope(response: GetDoctorsResponse) -> Result<Vec<Doctor>, ClientError> {
    if !response.success {
        let message = response
            .message
            .unwrap_or_else(|| "request was not successful".to_string());
        return Err(ClientError::Api(message));
    }
    Ok(response.doctors)
}

/// Create a client for server-side requests (direct to API)
#[cfg(feature = "server")]
pub fn server_client() -> ApiClient {
    let url = std::env::var("API_URL")
        .unwrap_or_else(|_| crate::api::endpoints::DEFAULT_API_URL.to_string());
    ApiClient::new(url)
}
