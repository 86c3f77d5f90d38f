use std::sync::Arc;

use crate::domain::{Comment, ownership};
use crate::error::DomainError;
use crate::ports::{CommentRepository, PostRepository};

/// Comment use cases. Creation requires the parent post to exist;
/// update and delete are gated on the comment's creator.
#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { comments, posts }
    }

    /// Create a comment on an existing post. Returns the new id.
    pub async fn create_comment(
        &self,
        post_id: i64,
        content: String,
        created_by: String,
    ) -> Result<i64, DomainError> {
        if !self.posts.exists(post_id).await? {
            return Err(DomainError::PostNotFound(post_id));
        }

        let id = self
            .comments
            .create(Comment::new(post_id, content, created_by))
            .await?;

        tracing::info!(comment_id = id, post_id, "comment created");
        Ok(id)
    }

    /// Update a comment's content. Only the creator may update.
    pub async fn update_comment(
        &self,
        id: i64,
        content: String,
        updated_by: &str,
    ) -> Result<i64, DomainError> {
        let mut comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CommentNotFound(id))?;

        comment.update(content, updated_by)?;
        self.comments.update(&comment).await?;

        Ok(id)
    }

    /// Delete a comment. Only the creator may delete.
    pub async fn delete_comment(&self, id: i64, deleted_by: &str) -> Result<i64, DomainError> {
        let comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CommentNotFound(id))?;

        if !ownership::owned_by(deleted_by, &comment.audit.created_by) {
            return Err(DomainError::CommentNotDeletable);
        }

        self.comments.delete(id).await?;

        tracing::info!(comment_id = id, "comment deleted");
        Ok(id)
    }
}
