//! # ql-store-memory
//!
//! In-process implementation of `CommentRepo`.
//! One forest per article, all of them behind a single lock so that
//! "find the parent, then append" can never interleave with another write.

mod seed;

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use ql_core::error::{AppError, Result};
use ql_core::models::{ArticleId, Author, Comment, CommentDraft, CommentId, LikeState, ViewerId};
use ql_core::traits::CommentRepo;
use ql_core::tree::{CommentNode, Forest};
use tokio::sync::RwLock;

struct StoreState {
    /// Ordered by article id, so store-wide searches are deterministic.
    forests: BTreeMap<ArticleId, Forest>,
    /// Next comment id to hand out. Shared by every article.
    next_id: CommentId,
}

pub struct MemoryCommentStore {
    state: RwLock<StoreState>,
}

impl MemoryCommentStore {
    /// An empty store that knows no articles yet.
    pub fn new() -> Self {
        Self::from_forests(BTreeMap::new())
    }

    /// An empty store with the given articles already open.
    pub fn with_articles(articles: impl IntoIterator<Item = ArticleId>) -> Self {
        Self::from_forests(articles.into_iter().map(|id| (id, Forest::new())).collect())
    }

    /// Adopts prebuilt forests. Ids continue after the highest one found.
    pub fn from_forests(forests: BTreeMap<ArticleId, Forest>) -> Self {
        let next_id = forests
            .values()
            .filter_map(Forest::max_id)
            .max()
            .map_or(1, |max| max + 1);

        Self {
            state: RwLock::new(StoreState { forests, next_id }),
        }
    }
}

impl Default for MemoryCommentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentRepo for MemoryCommentStore {
    async fn open_article(&self, article_id: ArticleId) -> Result<()> {
        let mut state = self.state.write().await;
        state.forests.entry(article_id).or_default();
        Ok(())
    }

    async fn list_comments(&self, article_id: ArticleId, viewer: ViewerId) -> Result<Vec<Comment>> {
        let state = self.state.read().await;
        Ok(state
            .forests
            .get(&article_id)
            .map(|forest| forest.render(viewer))
            .unwrap_or_default())
    }

    /// Validation and the parent lookup both run before an id is taken,
    /// so a rejected draft leaves the counter and every forest untouched.
    async fn add_comment(
        &self,
        article_id: ArticleId,
        author: Author,
        draft: CommentDraft,
    ) -> Result<Comment> {
        draft.validate()?;

        let mut guard = self.state.write().await;
        let StoreState { forests, next_id } = &mut *guard;

        let forest = forests
            .get_mut(&article_id)
            .ok_or_else(|| AppError::article_not_found(article_id))?;

        let viewer = author.id;
        let CommentDraft { content, parent_id } = draft;
        let created = forest.insert(parent_id, || {
            let id = *next_id;
            *next_id += 1;
            CommentNode::new(id, author, content, Utc::now())
        })?;

        log::debug!(
            "comment {} added to article {} (parent: {:?})",
            created.id(),
            article_id,
            parent_id
        );
        Ok(created.render(viewer))
    }

    async fn toggle_comment_like(&self, comment_id: CommentId, viewer: ViewerId) -> Result<LikeState> {
        let mut state = self.state.write().await;
        let node = state
            .forests
            .values_mut()
            .find_map(|forest| forest.find_mut(comment_id))
            .ok_or_else(|| AppError::comment_not_found(comment_id))?;

        Ok(node.toggle_like(viewer))
    }

    async fn toggle_article_comment_like(
        &self,
        article_id: ArticleId,
        comment_id: CommentId,
        viewer: ViewerId,
    ) -> Result<LikeState> {
        let mut state = self.state.write().await;
        let forest = state
            .forests
            .get_mut(&article_id)
            .ok_or_else(|| AppError::article_not_found(article_id))?;
        let node = forest
            .find_mut(comment_id)
            .ok_or_else(|| AppError::comment_not_found(comment_id))?;

        Ok(node.toggle_like(viewer))
    }

    async fn count_comments(&self, article_id: ArticleId) -> Result<usize> {
        let state = self.state.read().await;
        Ok(state.forests.get(&article_id).map_or(0, Forest::node_count))
    }
}
