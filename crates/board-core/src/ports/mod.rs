//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod query;
mod repository;

pub use query::{Page, PageRequest, PostFilter, PostSummary};
pub use repository::{CommentRepository, LikeRepository, PostRepository};
