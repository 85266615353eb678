//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be used by the binary.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ArticleId, Author, Comment, CommentDraft, CommentId, LikeState, Viewer, ViewerId};

/// Persistence contract for per-article comment forests.
///
/// Implementations must make each call atomic: a lookup and the mutation
/// that depends on it happen under the same critical section, and a call
/// that fails leaves the store untouched.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepo: Send + Sync {
    /// Makes `article_id` known with an empty forest. No-op if it exists.
    async fn open_article(&self, article_id: ArticleId) -> Result<()>;

    /// Top-level comments of the article, replies nested, as `viewer` sees them.
    /// An unknown article yields an empty list.
    async fn list_comments(&self, article_id: ArticleId, viewer: ViewerId) -> Result<Vec<Comment>>;

    /// Validates and stores a new comment written by `author`.
    async fn add_comment(
        &self,
        article_id: ArticleId,
        author: Author,
        draft: CommentDraft,
    ) -> Result<Comment>;

    /// Flips `viewer`'s like on a comment living in any article.
    async fn toggle_comment_like(&self, comment_id: CommentId, viewer: ViewerId) -> Result<LikeState>;

    /// Same as `toggle_comment_like` with the search bounded to one article.
    async fn toggle_article_comment_like(
        &self,
        article_id: ArticleId,
        comment_id: CommentId,
        viewer: ViewerId,
    ) -> Result<LikeState>;

    /// Comments of the article at every depth.
    async fn count_comments(&self, article_id: ArticleId) -> Result<usize>;
}

/// Identity contract: turns an `Authorization` header into a viewer.
pub trait ViewerResolver: Send + Sync {
    /// `None` means the request carried no credentials at all.
    fn resolve(&self, authorization: Option<&str>) -> Result<Viewer>;
}
