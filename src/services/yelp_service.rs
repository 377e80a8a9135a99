use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::time::Duration;
use url::Url;

use crate::models::venue::Venue;

const SEARCH_PATH: &str = "v3/businesses/search";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub businesses: Vec<Venue>,
    pub total: Option<u32>,
}

#[derive(Debug)]
pub enum SearchError {
    ConfigError(String),
    HttpError(reqwest::Error),
    StatusError(u16, String),
    DecodeError(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            SearchError::HttpError(err) => write!(f, "HTTP error: {}", err),
            SearchError::StatusError(status, body) => {
                write!(f, "Search request failed with status {}: {}", status, body)
            }
            SearchError::DecodeError(msg) => write!(f, "Failed to parse response: {}", msg),
        }
    }
}

impl Error for SearchError {}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::HttpError(err)
    }
}

/// A local-business search backend.
///
/// Results come back sorted by rating, at most `limit` of them.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(
        &self,
        location: &str,
        category: &str,
        limit: u32,
    ) -> Result<Vec<Venue>, SearchError>;
}

/// Client for the Yelp Fusion business search endpoint.
#[derive(Clone)]
pub struct YelpClient {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl YelpClient {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, SearchError> {
        Self::with_optional_key(base_url, Some(api_key.into()))
    }

    /// Without a key every search fails up front and no request is sent.
    pub fn with_optional_key(base_url: &str, api_key: Option<String>) -> Result<Self, SearchError> {
        let base = Url::parse(base_url).map_err(|e| {
            SearchError::ConfigError(format!("Invalid base URL '{}': {}", base_url, e))
        })?;
        let endpoint = base
            .join(SEARCH_PATH)
            .map_err(|e| SearchError::ConfigError(format!("Invalid search URL: {}", e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SearchProvider for YelpClient {
    async fn search(
        &self,
        location: &str,
        category: &str,
        limit: u32,
    ) -> Result<Vec<Venue>, SearchError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SearchError::ConfigError("YELP_API_KEY not configured".to_string()))?;

        let limit = limit.to_string();
        let params = [
            ("location", location),
            ("categories", category),
            ("limit", limit.as_str()),
            ("sort_by", "rating"),
        ];

        let response = self
            .client
            .get(self.endpoint.clone())
            .bearer_auth(api_key)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SearchError::StatusError(status.as_u16(), error_text));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::DecodeError(e.to_string()))?;

        log::debug!(
            "Provider returned {} of {:?} '{}' venues in {}",
            body.businesses.len(),
            body.total,
            category,
            location
        );

        Ok(body.businesses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = YelpClient::new("https://api.yelp.com", "key").unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://api.yelp.com/v3/businesses/search"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = YelpClient::new("not a url", "key");
        assert!(matches!(result, Err(SearchError::ConfigError(_))));
    }

    #[actix_rt::test]
    async fn test_search_without_key_fails_before_request() {
        // nothing listens here, a request would surface as HttpError
        let client = YelpClient::with_optional_key("http://127.0.0.1:9", None).unwrap();

        let result = client.search("Austin", "cafes", 10).await;
        assert!(matches!(result, Err(SearchError::ConfigError(_))));
    }

    #[test]
    fn test_status_error_display() {
        let err = SearchError::StatusError(401, "unauthorized".to_string());
        assert_eq!(
            err.to_string(),
            "Search request failed with status 401: unauthorized"
        );
    }
}
