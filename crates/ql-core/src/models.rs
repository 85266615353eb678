//! # Domain Models
//!
//! Wire-facing shapes shared by the store, the auth plugin and the API.
//! Identifiers are plain integers handed out by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub type ArticleId = u64;
pub type CommentId = u64;
pub type ViewerId = u64;

/// The synthetic reader every unauthenticated request is served as.
pub const GUEST_VIEWER_ID: ViewerId = 999;

/// Display identity of whoever wrote a comment.
/// Copied into the comment when it is created, never live-linked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: u64,
    pub name: String,
    pub avatar: String,
    pub bio: String,
}

impl Author {
    pub fn new(id: u64, name: &str, bio: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            avatar: "/placeholder.svg".to_string(),
            bio: bio.to_string(),
        }
    }
}

/// The identity a request is served on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub id: ViewerId,
    /// Attached as the author of anything this viewer writes.
    pub profile: Author,
}

impl Viewer {
    pub fn guest() -> Self {
        Self {
            id: GUEST_VIEWER_ID,
            profile: Author::new(GUEST_VIEWER_ID, "Current User", "Blog Reader"),
        }
    }
}

/// A comment as one particular viewer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub author: Author,
    pub content: String,
    pub published_at: DateTime<Utc>,
    pub likes: usize,
    pub is_liked: bool,
    pub replies: Vec<Comment>,
}

/// Input for a new comment. `parent_id: None` means top-level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub content: String,
    pub parent_id: Option<CommentId>,
}

impl CommentDraft {
    pub fn top_level(content: impl Into<String>) -> Self {
        Self { content: content.into(), parent_id: None }
    }

    pub fn reply(content: impl Into<String>, parent_id: CommentId) -> Self {
        Self { content: content.into(), parent_id: Some(parent_id) }
    }

    pub fn validate(&self) -> Result<()> {
        if self.content.trim().is_empty() {
            return Err(AppError::ValidationError(
                "comment content is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of a like toggle, from the toggling viewer's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeState {
    pub is_liked: bool,
    pub likes: usize,
}
