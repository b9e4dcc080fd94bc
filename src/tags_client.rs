// HTTP client for the tags collaborator API

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::api_types::{CreateTagRequest, Tag, TagPageResponse};
use crate::config::api;

#[derive(Error, Debug)]
pub enum TagsClientError {
    #[error("Invalid API base URL: {url}")]
    InvalidBaseUrl { url: String },

    #[error("Network request failed: {source}")]
    Network { source: reqwest::Error },

    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("Failed to decode API response: {source}")]
    Decode { source: reqwest::Error },
}

impl TagsClientError {
    /// Text shown to the user in a transient notice
    pub fn user_message(&self) -> String {
        match self {
            TagsClientError::InvalidBaseUrl { url } => {
                format!("The configured API URL is not usable: {url}")
            }
            TagsClientError::Network { .. } => {
                "Could not reach the tags API. Check your connection.".to_string()
            }
            TagsClientError::Http { status } => {
                format!("The tags API answered with HTTP {status}.")
            }
            TagsClientError::Decode { .. } => {
                "The tags API returned an unexpected response.".to_string()
            }
        }
    }
}

/// Thin client over the collaborator's `/tags` endpoints.
///
/// Requests are not retried automatically; recovery is user-initiated.
#[derive(Debug)]
pub struct TagsClient {
    client: Client,
    base_url: Url,
}

impl TagsClient {
    pub fn new(base_url: &str) -> Result<Self, TagsClientError> {
        let parsed = Url::parse(base_url).map_err(|_| TagsClientError::InvalidBaseUrl {
            url: base_url.to_string(),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(TagsClientError::InvalidBaseUrl {
                url: base_url.to_string(),
            });
        }

        Ok(Self::from_url(parsed))
    }

    /// Build a client from an already-validated base URL.
    pub fn from_url(base_url: Url) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        TagsClient { client, base_url }
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        // http(s) URLs always have a path segment list.
        url.path_segments_mut()
            .expect("validated base URL has path segments")
            .pop_if_empty()
            .push(path);
        url
    }

    fn list_url(&self, filter: &str, page: u32) -> Url {
        let mut url = self.endpoint("tags");
        url.query_pairs_mut()
            .append_pair("_page", &page.to_string())
            .append_pair("_per_page", &api::PER_PAGE.to_string())
            .append_pair("title", filter);
        url
    }

    /// Fetch one page of tags whose titles match `filter`.
    pub async fn list_tags(
        &self,
        filter: &str,
        page: u32,
    ) -> Result<TagPageResponse, TagsClientError> {
        let url = self.list_url(filter, page);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| TagsClientError::Network { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TagsClientError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json::<TagPageResponse>()
            .await
            .map_err(|source| TagsClientError::Decode { source })
    }

    /// Create a tag; the collaborator answers with the stored record.
    pub async fn create_tag(&self, request: &CreateTagRequest) -> Result<Tag, TagsClientError> {
        let url = self.endpoint("tags");
        log::debug!("POST {url}");

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|source| TagsClientError::Network { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TagsClientError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json::<Tag>()
            .await
            .map_err(|source| TagsClientError::Decode { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_validation() {
        // Valid URLs
        assert!(TagsClient::new("http://localhost:3333").is_ok());
        assert!(TagsClient::new("https://api.example.com/admin").is_ok());

        // Invalid URLs
        assert!(TagsClient::new("not a url").is_err());
        assert!(TagsClient::new("ftp://example.com").is_err());
        assert!(TagsClient::new("").is_err());
    }

    #[test]
    fn test_list_url_building() {
        let client = TagsClient::new("http://localhost:3333").expect("valid base URL");
        let url = client.list_url("react", 2);

        assert_eq!(
            url.as_str(),
            "http://localhost:3333/tags?_page=2&_per_page=10&title=react"
        );
    }

    #[test]
    fn test_list_url_encodes_the_filter() {
        let client = TagsClient::new("http://localhost:3333").expect("valid base URL");
        let url = client.list_url("rust & go", 1);

        assert_eq!(
            url.as_str(),
            "http://localhost:3333/tags?_page=1&_per_page=10&title=rust+%26+go"
        );
    }

    #[test]
    fn test_endpoint_respects_base_path() {
        let client = TagsClient::new("https://api.example.com/admin").expect("valid base URL");
        assert_eq!(
            client.endpoint("tags").as_str(),
            "https://api.example.com/admin/tags"
        );

        // A trailing slash on the base must not produce a double slash.
        let client = TagsClient::new("https://api.example.com/admin/").expect("valid base URL");
        assert_eq!(
            client.endpoint("tags").as_str(),
            "https://api.example.com/admin/tags"
        );
    }
}
