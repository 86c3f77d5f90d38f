use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{Comment, Post, ownership};
use crate::error::DomainError;
use crate::ports::{
    CommentRepository, LikeRepository, Page, PageRequest, PostFilter, PostRepository, PostSummary,
};

/// Input for creating a post.
#[derive(Debug, Clone)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub created_by: String,
    pub tags: Vec<String>,
}

/// Input for updating a post. The actor is self-reported.
#[derive(Debug, Clone)]
pub struct UpdatePost {
    pub title: String,
    pub content: String,
    pub updated_by: String,
    pub tags: Vec<String>,
}

/// Full view of one post: comments, ordered tag names and like count.
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<CommentSummary>,
    pub tags: Vec<String>,
    pub like_count: u64,
}

/// Comment as shown inside a post detail.
#[derive(Debug, Clone)]
pub struct CommentSummary {
    pub id: i64,
    pub content: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentSummary {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            created_by: comment.audit.created_by,
            created_at: comment.audit.created_at,
        }
    }
}

/// Post use cases: create, update, delete, detail lookup and search.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    likes: Arc<dyn LikeRepository>,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        likes: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            posts,
            comments,
            likes,
        }
    }

    /// Create a post with tags in the given order. Returns the new id.
    pub async fn create_post(&self, request: CreatePost) -> Result<i64, DomainError> {
        let post = Post::new(
            request.title,
            request.content,
            request.created_by,
            request.tags,
        );
        let id = self.posts.create(post).await?;

        tracing::info!(post_id = id, "post created");
        Ok(id)
    }

    /// Update title, content and tags. Only the creator may update.
    pub async fn update_post(&self, id: i64, request: UpdatePost) -> Result<i64, DomainError> {
        let mut post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))?;

        let replace_tags = post.update(
            request.title,
            request.content,
            &request.tags,
            &request.updated_by,
        )?;
        self.posts.update(&post, replace_tags).await?;

        tracing::info!(post_id = id, replace_tags, "post updated");
        Ok(id)
    }

    /// Delete a post and everything it owns. Only the creator may delete.
    pub async fn delete_post(&self, id: i64, deleted_by: &str) -> Result<i64, DomainError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))?;

        if !ownership::owned_by(deleted_by, &post.audit.created_by) {
            return Err(DomainError::PostNotDeletable);
        }

        self.posts.delete(id).await?;

        tracing::info!(post_id = id, "post deleted");
        Ok(id)
    }

    /// Load a post with its comments, tags and like count.
    pub async fn get_post(&self, id: i64) -> Result<PostDetail, DomainError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))?;

        let comments = self.comments.find_by_post_id(id).await?;
        let like_count = self.likes.count_by_post_id(id).await?;
        let tags = post.tag_names();

        Ok(PostDetail {
            id: post.id,
            title: post.title,
            content: post.content,
            created_by: post.audit.created_by,
            created_at: post.audit.created_at,
            comments: comments.into_iter().map(Into::into).collect(),
            tags,
            like_count,
        })
    }

    /// Paged search over post summaries, newest first.
    pub async fn find_page(
        &self,
        request: PageRequest,
        filter: PostFilter,
    ) -> Result<Page<PostSummary>, DomainError> {
        Ok(self.posts.find_page(request, filter).await?)
    }
}
