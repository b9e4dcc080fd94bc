use std::sync::Arc;

pub mod api_types;
pub mod config;
pub mod debounce;
pub mod errors;
pub mod filter;
pub mod form;
pub mod query;
pub mod slug;
pub mod tags_client;

use api_types::Tag;
use config::Settings;
use filter::FilterState;
use form::CreateTagForm;
use query::TagListQuery;
use tags_client::TagsClient;

pub use errors::{AppError, AppResult, ErrorCategory};

/// Severity of a transient, non-blocking notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// A toast-style message for the embedding UI to render and discard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Session state of the tags admin panel.
///
/// Owns the HTTP client, the list query cache, the filter/pager state and
/// the creation form, with one writer per piece of state. The embedding
/// UI drives it through the async operations below and drains
/// [`AppState::take_notices`] after each one.
#[derive(Debug)]
pub struct AppState {
    client: Arc<TagsClient>,
    query: TagListQuery,
    filter: FilterState,
    form: CreateTagForm,
    notices: Vec<Notice>,
}

impl AppState {
    /// Build the state from the environment.
    ///
    /// A missing or malformed `TAGS_API_URL` is fatal: the panel cannot
    /// render without a collaborator to talk to.
    pub fn new() -> AppResult<Self> {
        let settings = Settings::from_env()?;
        Ok(Self::with_settings(&settings))
    }

    pub fn with_base_url(base_url: &str) -> AppResult<Self> {
        let settings = Settings::from_base_url(base_url)?;
        Ok(Self::with_settings(&settings))
    }

    pub fn with_settings(settings: &Settings) -> Self {
        AppState {
            client: Arc::new(TagsClient::from_url(settings.base_url().clone())),
            query: TagListQuery::new(),
            filter: FilterState::new(),
            form: CreateTagForm::new(),
            notices: Vec::new(),
        }
    }

    pub fn client(&self) -> &Arc<TagsClient> {
        &self.client
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn form(&self) -> &CreateTagForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CreateTagForm {
        &mut self.form
    }

    /// The page currently shown in the table, if any.
    pub fn displayed(&self) -> Option<&api_types::TagPageResponse> {
        self.query.displayed()
    }

    /// Drain pending notices for rendering.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Track the search box on every keystroke (no fetch).
    pub fn set_filter_input(&mut self, input: impl Into<String>) {
        self.filter.set_input(input);
    }

    /// Commit the typed filter and load the first page of the new result
    /// set.
    pub async fn apply_filter(&mut self) {
        self.filter.commit();
        self.load_tags().await;
    }

    pub async fn go_to_page(&mut self, page: u32) {
        self.filter.set_page(page);
        self.load_tags().await;
    }

    /// Load the page selected by the current filter/pager state.
    ///
    /// A fresh cache entry answers without touching the network. A fetch
    /// failure surfaces as a warning notice while previously displayed
    /// data stays visible.
    pub async fn load_tags(&mut self) {
        let filter = self.filter.committed_filter().to_string();
        let page = self.filter.page();

        let Some(ticket) = self.query.begin(&filter, page) else {
            return;
        };

        match self.client.list_tags(&filter, page).await {
            Ok(response) => {
                self.query.apply(ticket, response);
            }
            Err(err) => {
                let err = AppError::from(err);
                log::warn!("tag list fetch failed: {err}");
                self.push_notice(NoticeLevel::Warning, err.user_message());
            }
        }
    }

    /// Submit the creation form.
    ///
    /// On success the tag list cache is invalidated and reloaded, and the
    /// created tag is returned. Validation failures are left for the
    /// embedder to render inline via [`CreateTagForm::validate`]; network
    /// failures raise an error notice and keep the form populated.
    pub async fn create_tag(&mut self) -> Option<Tag> {
        match self.form.submit(&self.client).await {
            Ok(tag) => {
                log::info!("tag created: {}", tag.slug);
                self.push_notice(NoticeLevel::Success, "Tag created!");
                self.query.invalidate_all();
                self.load_tags().await;
                Some(tag)
            }
            Err(err) => {
                if err.category() != ErrorCategory::UserError {
                    log::error!("tag creation failed: {err}");
                    self.push_notice(NoticeLevel::Error, err.user_message());
                }
                None
            }
        }
    }

    fn push_notice(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices.push(Notice {
            level,
            message: message.into(),
        });
    }
}

/// Drive the auto-committing filter variant.
///
/// Feeds settled values from a debounced channel of search-box input into
/// the filter, committing and reloading after each quiet period. Ends
/// when the input side is dropped.
pub async fn run_debounced_filter(
    state: Arc<tokio::sync::Mutex<AppState>>,
    mut input: debounce::Receiver<String>,
) {
    while let Some(committed) = input.settled().await {
        let mut state = state.lock().await;
        state.set_filter_input(committed);
        state.apply_filter().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // Nothing listens here; fetches against it fail fast.
    const DEAD_BASE_URL: &str = "http://127.0.0.1:9";

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_state_construction_rejects_bad_base_urls() {
        let err = AppState::with_base_url("not a url").expect_err("must reject");
        assert_eq!(err.category(), ErrorCategory::ConfigError);
    }

    #[tokio::test]
    async fn test_failed_load_raises_a_notice_and_keeps_the_table() {
        init_logs();
        let mut state = AppState::with_base_url(DEAD_BASE_URL).expect("valid base URL");

        state.set_filter_input("react");
        state.apply_filter().await;

        let notices = state.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Warning);
        // Nothing was ever displayed, and the failure did not invent an
        // empty page.
        assert!(state.displayed().is_none());
        assert_eq!(state.filter().committed_filter(), "react");
        assert_eq!(state.filter().page(), 1);
    }

    #[tokio::test]
    async fn test_invalid_form_yields_no_tag_and_no_notice() {
        let mut state = AppState::with_base_url(DEAD_BASE_URL).expect("valid base URL");
        state.form_mut().set_title("ab");

        let created = state.create_tag().await;

        assert!(created.is_none());
        assert!(state.take_notices().is_empty(), "inline errors only");
        assert_eq!(state.form().title(), "ab");
    }

    #[tokio::test]
    async fn test_failed_creation_raises_an_error_notice() {
        let mut state = AppState::with_base_url(DEAD_BASE_URL).expect("valid base URL");
        state.form_mut().set_title("React Query");

        let created = state.create_tag().await;

        assert!(created.is_none());
        let notices = state.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(state.form().title(), "React Query");
    }

    #[tokio::test]
    async fn test_debounced_filter_commits_only_the_settled_value() {
        let state = Arc::new(tokio::sync::Mutex::new(
            AppState::with_base_url(DEAD_BASE_URL).expect("valid base URL"),
        ));
        let (tx, rx) = debounce::channel(Duration::from_millis(30), String::new());

        let worker = tokio::spawn(run_debounced_filter(Arc::clone(&state), rx));

        for input in ["r", "re", "react"] {
            tx.send(input.to_string());
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        drop(tx);
        worker.await.expect("worker exits when the sender is gone");

        let mut state = state.lock().await;
        assert_eq!(state.filter().committed_filter(), "react");
        assert_eq!(state.filter().page(), 1);
        // Exactly one commit happened, so exactly one failed fetch.
        assert_eq!(state.take_notices().len(), 1);
    }
}
