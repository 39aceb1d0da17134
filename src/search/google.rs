//! Google Custom Search JSON API client.

use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RocchioError};

use super::client::{SearchClient, SearchResult};

/// The Custom Search API returns at most this many results per request.
pub const MAX_RESULTS_PER_REQUEST: usize = 10;

/// Connection settings for the Custom Search API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleSearchConfig {
    /// API endpoint.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GoogleSearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://www.googleapis.com/customsearch/v1".to_string(),
            timeout_secs: 30,
        }
    }
}

impl GoogleSearchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(RocchioError::invalid_config("search.endpoint must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(RocchioError::invalid_config(
                "search.timeout_secs must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItem {
    #[serde(default)]
    formatted_url: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    snippet: Option<String>,
    #[serde(default)]
    file_format: Option<String>,
}

impl From<SearchItem> for SearchResult {
    fn from(item: SearchItem) -> Self {
        SearchResult {
            url: item.formatted_url.or(item.link).unwrap_or_default(),
            title: item.title,
            snippet: item.snippet,
            file_format: item.file_format,
        }
    }
}

/// Parse a Custom Search response body.
///
/// A body without `items` means the engine found nothing.
pub fn parse_response(body: &str) -> Result<Vec<SearchResult>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.items.into_iter().map(SearchResult::from).collect())
}

/// Blocking client for one API key and search engine.
pub struct GoogleSearchClient {
    api_key: String,
    engine_id: String,
    config: GoogleSearchConfig,
    client: Client,
}

impl GoogleSearchClient {
    pub fn new(
        api_key: impl Into<String>,
        engine_id: impl Into<String>,
        config: GoogleSearchConfig,
    ) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let engine_id = engine_id.into();
        info!(
            "Google search client initialized (engine={}, endpoint={})",
            engine_id, config.endpoint
        );

        Ok(Self {
            api_key: api_key.into(),
            engine_id,
            config,
            client,
        })
    }
}

impl SearchClient for GoogleSearchClient {
    fn search(&mut self, query: &str, count: usize) -> Result<Vec<SearchResult>> {
        let num = count.min(MAX_RESULTS_PER_REQUEST).to_string();
        debug!("Requesting {num} results for '{query}'");

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(RocchioError::search(format!(
                "Custom Search API returned {status}: {body}"
            )));
        }

        let results = parse_response(&body)?;
        debug!("Received {} results", results.len());
        Ok(results)
    }

    fn name(&self) -> &str {
        "google"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response() {
        let body = r#"{
            "kind": "customsearch#search",
            "items": [
                {
                    "title": "Jaguar - Wikipedia",
                    "link": "https://en.wikipedia.org/wiki/Jaguar",
                    "formattedUrl": "https://en.wikipedia.org/wiki/Jaguar",
                    "snippet": "The jaguar is a large\ncat species."
                },
                {
                    "link": "https://example.com/jaguar.pdf",
                    "fileFormat": "PDF/Adobe Acrobat"
                }
            ]
        }"#;

        let results = parse_response(body).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].url, "https://en.wikipedia.org/wiki/Jaguar");
        assert_eq!(results[0].title(), "Jaguar - Wikipedia");
        assert_eq!(results[0].description(), "The jaguar is a largecat species.");
        assert_eq!(results[1].url, "https://example.com/jaguar.pdf");
        assert_eq!(results[1].title, None);
        assert_eq!(results[1].file_format.as_deref(), Some("PDF/Adobe Acrobat"));
    }

    #[test]
    fn test_parse_response_without_items() {
        let results = parse_response(r#"{"kind": "customsearch#search"}"#).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_parse_response_invalid_json() {
        assert!(matches!(
            parse_response("not json"),
            Err(RocchioError::Json(_))
        ));
    }

    #[test]
    fn test_config_validation() {
        assert!(GoogleSearchConfig::default().validate().is_ok());

        let config = GoogleSearchConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
