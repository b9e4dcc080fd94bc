// Tag creation form state machine

use crate::api_types::{CreateTagRequest, Tag};
use crate::config::tags;
use crate::errors::{AppError, AppResult};
use crate::slug::{derive_slug, SlugOptions};
use crate::tags_client::TagsClient;

/// One inline, field-scoped validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// State behind the "Create new tag" dialog.
///
/// The slug is derived from the title on every keystroke and shown
/// read-only; validation failures block submission without touching the
/// network; a failed submission keeps the fields populated for a manual
/// retry.
#[derive(Debug, Clone, Default)]
pub struct CreateTagForm {
    title: String,
    amount_videos: String,
    slug_options: SlugOptions,
    submitting: bool,
}

impl CreateTagForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slug_options(slug_options: SlugOptions) -> Self {
        CreateTagForm {
            slug_options,
            ..Self::default()
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_amount_videos(&mut self, amount: impl Into<String>) {
        self.amount_videos = amount.into();
    }

    pub fn amount_videos(&self) -> &str {
        &self.amount_videos
    }

    /// The read-only slug field, recomputed from the current title.
    pub fn slug_preview(&self) -> String {
        derive_slug(&self.title, &self.slug_options)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Check the fields and build the submission payload.
    ///
    /// The amount field is free text: empty coerces to the default, any
    /// other value must parse as an unsigned integer.
    pub fn validate(&self) -> Result<CreateTagRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.title.trim().chars().count() < tags::MIN_TITLE_LENGTH {
            errors.push(FieldError {
                field: "title",
                message: format!(
                    "Name must be at least {} characters",
                    tags::MIN_TITLE_LENGTH
                ),
            });
        }

        let amount_videos = if self.amount_videos.trim().is_empty() {
            tags::DEFAULT_AMOUNT_VIDEOS
        } else {
            match self.amount_videos.trim().parse::<u64>() {
                Ok(amount) => amount,
                Err(_) => {
                    errors.push(FieldError {
                        field: "amountVideos",
                        message: "Amount of videos must be a whole number".to_string(),
                    });
                    tags::DEFAULT_AMOUNT_VIDEOS
                }
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreateTagRequest {
            title: self.title.clone(),
            slug: self.slug_preview(),
            amount_videos,
        })
    }

    /// Submit the form to the creation collaborator.
    ///
    /// Validation failures never reach the network. On success the form
    /// resets and the created tag is returned so the caller can invalidate
    /// its tag list; on failure the fields stay put.
    pub async fn submit(&mut self, client: &TagsClient) -> AppResult<Tag> {
        let request = self.validate().map_err(|mut errors| {
            // validate never returns an empty error list
            let first = errors.remove(0);
            AppError::validation(first.field, first.message)
        })?;

        self.submitting = true;
        let result = client.create_tag(&request).await;
        self.submitting = false;

        match result {
            Ok(tag) => {
                self.reset();
                Ok(tag)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset(&mut self) {
        self.title.clear();
        self.amount_videos.clear();
    }
}
