//! Use-case services orchestrating the domain and the repository ports.

mod comment;
mod like;
mod post;


pub use comment::CommentService;
pub use like::LikeService;
pub use post::{CommentSummary, CreatePost, PostDetail, PostService, UpdatePost};
