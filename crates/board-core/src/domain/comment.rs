use serde::{Deserialize, Serialize};

use crate::domain::AuditStamp;
use crate::domain::ownership;
use crate::error::DomainError;

/// Comment entity - bound to one post for its whole life.
///
/// Holds a non-owning reference to its post; deleting the post cascades
/// to its comments in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
    pub audit: AuditStamp,
}

impl Comment {
    /// Create a new comment on an existing post.
    pub fn new(post_id: i64, content: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            id: 0,
            post_id,
            content: content.into(),
            audit: AuditStamp::new(created_by),
        }
    }

    /// Apply an update on behalf of `updated_by`. Only the creator may update.
    pub fn update(&mut self, content: impl Into<String>, updated_by: &str) -> Result<(), DomainError> {
        if !ownership::owned_by(updated_by, &self.audit.created_by) {
            return Err(DomainError::CommentNotUpdatable);
        }

        self.content = content.into();
        self.audit.touch(updated_by);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_rejects_non_creator() {
        let mut comment = Comment::new(1, "hello", "alice");
        let err = comment
            .update("edited", "bob")
            .expect_err("non-creator must be rejected");

        assert!(matches!(err, DomainError::CommentNotUpdatable));
        assert_eq!(comment.content, "hello");
    }

    #[test]
    fn update_applies_content_and_audit() {
        let mut comment = Comment::new(1, "hello", "alice");
        comment.update("edited", "alice").expect("creator update succeeds");

        assert_eq!(comment.content, "edited");
        assert_eq!(comment.audit.updated_by.as_deref(), Some("alice"));
    }
}
