//! # ql-auth-mock
//!
//! `ViewerResolver` for the blog's mock tokens (`token_{userId}_{issuedAt}`).
//! The token is split, not verified: anyone can claim any known user id.
//! Requests without credentials are served as the guest reader.

use std::collections::HashMap;

use ql_core::error::{AppError, Result};
use ql_core::models::{Author, Viewer, ViewerId};
use ql_core::traits::ViewerResolver;

pub struct MockTokenResolver {
    /// Known users by id, the guest included.
    users: HashMap<ViewerId, Author>,
}

impl MockTokenResolver {
    /// Only the guest is known.
    pub fn new() -> Self {
        let guest = Viewer::guest();
        Self {
            users: HashMap::from([(guest.id, guest.profile)]),
        }
    }

    /// The sample blog's accounts.
    pub fn with_seed_users() -> Self {
        Self::new()
            .with_user(Author::new(1, "Admin User", "Platform Administrator"))
            .with_user(Author::new(2, "Sarah Chen", "Senior Full Stack Developer"))
            .with_user(Author::new(3, "Alex Rodriguez", "React Developer"))
    }

    pub fn with_user(mut self, profile: Author) -> Self {
        self.users.insert(profile.id, profile);
        self
    }

    /// Second `_`-separated segment of the token, as a user id.
    fn user_id(token: &str) -> Option<ViewerId> {
        token.split('_').nth(1)?.parse().ok()
    }
}

impl Default for MockTokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerResolver for MockTokenResolver {
    fn resolve(&self, authorization: Option<&str>) -> Result<Viewer> {
        let Some(header) = authorization else {
            return Ok(Viewer::guest());
        };

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("authorization token is required".to_string()))?;

        let profile = Self::user_id(token)
            .and_then(|id| self.users.get(&id))
            .cloned()
            .ok_or_else(|| {
                log::debug!("rejecting unknown token {token:?}");
                AppError::Unauthorized("token is invalid or expired".to_string())
            })?;

        Ok(Viewer { id: profile.id, profile })
    }
}
