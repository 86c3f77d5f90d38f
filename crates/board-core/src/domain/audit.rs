use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audit fields shared by Post and Comment.
///
/// Embedded by composition rather than a base type. `created_by` is set
/// once at construction and never changes; the updated pair is stamped on
/// every successful update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStamp {
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl AuditStamp {
    /// Stamp a fresh entity for the given creator.
    pub fn new(created_by: impl Into<String>) -> Self {
        Self {
            created_by: created_by.into(),
            created_at: Utc::now(),
            updated_by: None,
            updated_at: None,
        }
    }

    /// Record a successful update.
    pub fn touch(&mut self, updated_by: impl Into<String>) {
        self.updated_by = Some(updated_by.into());
        self.updated_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_leaves_creator_untouched() {
        let mut stamp = AuditStamp::new("alice");
        stamp.touch("alice");

        assert_eq!(stamp.created_by, "alice");
        assert_eq!(stamp.updated_by.as_deref(), Some("alice"));
        assert!(stamp.updated_at.is_some());
    }
}
