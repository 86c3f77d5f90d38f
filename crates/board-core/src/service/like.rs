use std::sync::Arc;

use crate::domain::Like;
use crate::error::DomainError;
use crate::ports::{LikeRepository, PostRepository};

/// Like use cases. Create-only; the same identity may like a post more
/// than once.
#[derive(Clone)]
pub struct LikeService {
    likes: Arc<dyn LikeRepository>,
    posts: Arc<dyn PostRepository>,
}

impl LikeService {
    pub fn new(likes: Arc<dyn LikeRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { likes, posts }
    }

    /// Record a like on an existing post. Returns the new id.
    pub async fn create_like(&self, post_id: i64, created_by: String) -> Result<i64, DomainError> {
        if !self.posts.exists(post_id).await? {
            return Err(DomainError::PostNotFound(post_id));
        }

        let id = self.likes.create(Like::new(post_id, created_by)).await?;

        tracing::debug!(like_id = id, post_id, "like created");
        Ok(id)
    }
}
