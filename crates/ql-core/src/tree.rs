//! # Comment Trees
//!
//! A comment owns its replies outright; there are no parent pointers.
//! Every mutation starts from the root list of one article (a `Forest`)
//! and walks down depth-first, pre-order, in creation order.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::error::{AppError, Result};
use crate::models::{Author, Comment, CommentId, LikeState, ViewerId};

/// One stored comment and the replies hanging off it.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentNode {
    id: CommentId,
    author: Author,
    content: String,
    published_at: DateTime<Utc>,
    /// Viewers who like this comment. `likes` is its cardinality.
    liked_by: BTreeSet<ViewerId>,
    replies: Vec<CommentNode>,
}

impl CommentNode {
    pub fn new(
        id: CommentId,
        author: Author,
        content: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author,
            content: content.into(),
            published_at,
            liked_by: BTreeSet::new(),
            replies: Vec::new(),
        }
    }

    /// Builder used for seed data and fixtures.
    pub fn with_likes(mut self, viewers: impl IntoIterator<Item = ViewerId>) -> Self {
        self.liked_by.extend(viewers);
        self
    }

    /// Builder used for seed data and fixtures.
    pub fn with_reply(mut self, reply: CommentNode) -> Self {
        self.replies.push(reply);
        self
    }

    pub fn id(&self) -> CommentId {
        self.id
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    pub fn replies(&self) -> &[CommentNode] {
        &self.replies
    }

    pub fn likes(&self) -> usize {
        self.liked_by.len()
    }

    pub fn is_liked_by(&self, viewer: ViewerId) -> bool {
        self.liked_by.contains(&viewer)
    }

    /// Flips `viewer`'s like. Moves `likes` by exactly one either way.
    pub fn toggle_like(&mut self, viewer: ViewerId) -> LikeState {
        if !self.liked_by.remove(&viewer) {
            self.liked_by.insert(viewer);
        }
        LikeState {
            is_liked: self.is_liked_by(viewer),
            likes: self.likes(),
        }
    }

    /// Number of comments in this subtree, itself included.
    pub fn size(&self) -> usize {
        1 + self.replies.iter().map(CommentNode::size).sum::<usize>()
    }

    fn max_id(&self) -> CommentId {
        self.replies
            .iter()
            .map(CommentNode::max_id)
            .fold(self.id, CommentId::max)
    }

    /// Snapshot of the subtree as `viewer` sees it.
    pub fn render(&self, viewer: ViewerId) -> Comment {
        Comment {
            id: self.id,
            author: self.author.clone(),
            content: self.content.clone(),
            published_at: self.published_at,
            likes: self.likes(),
            is_liked: self.is_liked_by(viewer),
            replies: self.replies.iter().map(|r| r.render(viewer)).collect(),
        }
    }
}

fn find_in(nodes: &[CommentNode], id: CommentId) -> Option<&CommentNode> {
    nodes.iter().find_map(|node| {
        if node.id == id {
            Some(node)
        } else {
            find_in(&node.replies, id)
        }
    })
}

fn find_in_mut(nodes: &mut [CommentNode], id: CommentId) -> Option<&mut CommentNode> {
    nodes.iter_mut().find_map(|node| {
        if node.id == id {
            Some(node)
        } else {
            find_in_mut(&mut node.replies, id)
        }
    })
}

/// The ordered top-level comments of one article.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forest {
    roots: Vec<CommentNode>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[CommentNode] {
        &self.roots
    }

    pub fn find(&self, id: CommentId) -> Option<&CommentNode> {
        find_in(&self.roots, id)
    }

    pub fn find_mut(&mut self, id: CommentId) -> Option<&mut CommentNode> {
        find_in_mut(&mut self.roots, id)
    }

    /// Appends a fully built tree as the last top-level comment.
    pub fn push(&mut self, node: CommentNode) {
        self.roots.push(node);
    }

    /// Appends the node produced by `build` under `parent_id`, or at the top
    /// level when there is no parent. `build` only runs once the parent has
    /// been found, so a failed insert has no side effects at all.
    pub fn insert<F>(&mut self, parent_id: Option<CommentId>, build: F) -> Result<&CommentNode>
    where
        F: FnOnce() -> CommentNode,
    {
        let siblings = match parent_id {
            None => &mut self.roots,
            Some(id) => match self.find_mut(id) {
                Some(parent) => &mut parent.replies,
                None => return Err(AppError::comment_not_found(id)),
            },
        };
        let index = siblings.len();
        siblings.push(build());
        Ok(&siblings[index])
    }

    /// Total number of comments at every depth.
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(CommentNode::size).sum()
    }

    pub fn max_id(&self) -> Option<CommentId> {
        self.roots.iter().map(CommentNode::max_id).max()
    }

    pub fn render(&self, viewer: ViewerId) -> Vec<Comment> {
        self.roots.iter().map(|node| node.render(viewer)).collect()
    }
}
