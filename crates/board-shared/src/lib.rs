//! # Board Shared
//!
//! Wire types shared between the API server and its clients:
//! camelCase request/response DTOs and RFC 7807 error payloads.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
