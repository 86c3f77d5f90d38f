//! Domain entities - the core business objects.

mod audit;
mod comment;
mod like;
mod post;

pub mod ownership;

pub use audit::AuditStamp;
pub use comment::Comment;
pub use like::Like;
pub use post::{Post, Tag, reconcile_tags};
