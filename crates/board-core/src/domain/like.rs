use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Like entity - create-only, no update or delete.
///
/// Nothing prevents the same identity from liking a post repeatedly;
/// the count simply reflects every row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub id: i64,
    pub post_id: i64,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Like {
    /// Record a like on an existing post.
    pub fn new(post_id: i64, created_by: impl Into<String>) -> Self {
        Self {
            id: 0,
            post_id,
            created_by: created_by.into(),
            created_at: Utc::now(),
        }
    }
}
