// Configuration for the tags admin client
// This module centralizes all magic numbers and the startup settings

use url::Url;

use crate::errors::{AppError, AppResult};

/// API configuration constants
pub mod api {
    /// Environment variable holding the collaborator's base URL
    pub const BASE_URL_ENV: &str = "TAGS_API_URL";

    /// Fixed page size requested from the collaborator
    pub const PER_PAGE: u32 = 10;

    /// HTTP client timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Tag form configuration constants
pub mod tags {
    /// Minimum length of a tag title
    pub const MIN_TITLE_LENGTH: usize = 3;

    /// Default amount of videos for a freshly created tag
    pub const DEFAULT_AMOUNT_VIDEOS: u64 = 0;
}

/// Query cache configuration constants
pub mod query {
    /// Seconds a fetched page stays fresh before a background refetch
    pub const STALE_AFTER_SECS: u64 = 5 * 60;
}

/// Debounce configuration constants
pub mod debounce {
    /// Quiet period before a changing filter value commits, in milliseconds
    pub const FILTER_DELAY_MS: u64 = 400;
}

/// Startup settings, resolved once when the application state is built
#[derive(Debug, Clone)]
pub struct Settings {
    base_url: Url,
}

impl Settings {
    /// Read and validate settings from the environment.
    ///
    /// A missing or malformed base URL is a fatal startup error.
    pub fn from_env() -> AppResult<Self> {
        let raw = std::env::var(api::BASE_URL_ENV).map_err(|_| {
            AppError::config(format!("{} is not set", api::BASE_URL_ENV))
        })?;
        Self::from_base_url(&raw)
    }

    pub fn from_base_url(raw: &str) -> AppResult<Self> {
        let base_url = Url::parse(raw)
            .map_err(|e| AppError::config(format!("invalid API base URL '{raw}': {e}")))?;

        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(AppError::config(format!(
                "API base URL must be http or https, got '{}'",
                base_url.scheme()
            )));
        }

        Ok(Settings { base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
