//! SeaORM entities for the four board tables.

pub mod comment;
pub mod like;
pub mod post;
pub mod tag;
