//! Application state - shared across all handlers.

use std::sync::Arc;

use board_core::ports::{CommentRepository, LikeRepository, PostRepository};
use board_core::service::{CommentService, LikeService, PostService};
use board_infra::database::{
    self, DatabaseConfig, DbErr, PostgresCommentRepository, PostgresLikeRepository,
    PostgresPostRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub comments: CommentService,
    pub likes: LikeService,
}

impl AppState {
    /// Connect to the database and wire the services to their repositories.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = database::connect(config).await?;

        let post_repo: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(db.clone()));
        let comment_repo: Arc<dyn CommentRepository> =
            Arc::new(PostgresCommentRepository::new(db.clone()));
        let like_repo: Arc<dyn LikeRepository> = Arc::new(PostgresLikeRepository::new(db));

        tracing::info!("Application state initialized");

        Ok(Self {
            posts: PostService::new(post_repo.clone(), comment_repo.clone(), like_repo.clone()),
            comments: CommentService::new(comment_repo, post_repo.clone()),
            likes: LikeService::new(like_repo, post_repo),
        })
    }
}
