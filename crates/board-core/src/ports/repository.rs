use async_trait::async_trait;

use crate::domain::{Comment, Like, Post};
use crate::error::RepoError;
use crate::ports::{Page, PageRequest, PostFilter, PostSummary};

/// Post repository - the store side of post persistence.
///
/// A post is stored together with its tag rows; `create` inserts both and
/// `update` rewrites the tag rows only when the caller reconciled them.
/// Deleting a post cascades to its tags, comments and likes.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post with its tags. Returns the generated id.
    async fn create(&self, post: Post) -> Result<i64, RepoError>;

    /// Load a post with its tags in stored order.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Cheap existence probe for foreign-key style checks.
    async fn exists(&self, id: i64) -> Result<bool, RepoError>;

    /// Persist an updated post. When `replace_tags` is set, all existing
    /// tag rows are discarded and the post's current tags inserted fresh,
    /// in one transaction with the post row.
    async fn update(&self, post: &Post, replace_tags: bool) -> Result<(), RepoError>;

    /// Delete a post and, by cascade, its dependents.
    async fn delete(&self, id: i64) -> Result<(), RepoError>;

    /// Filtered, paginated listing ordered by descending post id.
    async fn find_page(
        &self,
        request: PageRequest,
        filter: PostFilter,
    ) -> Result<Page<PostSummary>, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a new comment. Returns the generated id.
    async fn create(&self, comment: Comment) -> Result<i64, RepoError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, RepoError>;

    async fn update(&self, comment: &Comment) -> Result<(), RepoError>;

    async fn delete(&self, id: i64) -> Result<(), RepoError>;

    /// All comments on a post, oldest first.
    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Comment>, RepoError>;
}

/// Like repository. Likes are create-only.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Insert a new like. Returns the generated id.
    async fn create(&self, like: Like) -> Result<i64, RepoError>;

    /// Number of like rows referencing the post.
    async fn count_by_post_id(&self, post_id: i64) -> Result<u64, RepoError>;
}
