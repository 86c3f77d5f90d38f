//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
///
/// Not-found variants carry the id that was looked up. The ownership
/// variants are deliberately id-free: the offending actor is already in
/// the request and never belongs in a user-visible message.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("post not found: {0}")]
    PostNotFound(i64),

    #[error("only the creator of a post may update it")]
    PostNotUpdatable,

    #[error("only the creator of a post may delete it")]
    PostNotDeletable,

    #[error("comment not found: {0}")]
    CommentNotFound(i64),

    #[error("only the creator of a comment may update it")]
    CommentNotUpdatable,

    #[error("only the creator of a comment may delete it")]
    CommentNotDeletable,

    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database connection failed: {0}")]
    Connection(String),

    #[error("query execution failed: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("constraint violation: {0}")]
    Constraint(String),
}
