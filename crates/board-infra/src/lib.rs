//! # Board Infra
//!
//! Infrastructure layer: SeaORM entities and repository implementations
//! backing the ports defined in `board-core`.

pub mod database;
