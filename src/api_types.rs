// Wire types for the tags collaborator API
use serde::{Deserialize, Serialize};

// =============================================================================
// Core Domain Types
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub amount_videos: u64,
}

// =============================================================================
// Pagination Types
// =============================================================================

/// One server-side page window over the tags collection.
///
/// The requested page number is not echoed back by the collaborator; the
/// client carries it in its query key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TagPageResponse {
    pub first: u32,
    pub prev: Option<u32>,
    pub next: Option<u32>,
    pub last: u32,
    pub pages: u32,
    pub items: u64,
    pub data: Vec<Tag>,
}

// =============================================================================
// API Request Types
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagRequest {
    pub title: String,
    pub slug: String,
    pub amount_videos: u64,
}
