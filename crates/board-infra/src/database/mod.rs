//! Database connection management and repositories.

mod connections;
pub mod entity;
mod repository;

pub use connections::{DatabaseConfig, connect};
pub use repository::{PostgresCommentRepository, PostgresLikeRepository, PostgresPostRepository};
pub use sea_orm::{DbConn, DbErr};

#[cfg(test)]
mod tests;
