use serde::{Deserialize, Serialize};

use crate::domain::AuditStamp;
use crate::domain::ownership;
use crate::error::DomainError;

/// Post entity - a bulletin board entry.
///
/// A post exclusively owns its tags: they are created with it, replaced
/// wholesale on update, and die with it. `id == 0` marks an entity that
/// has not been persisted yet; the store assigns the real id on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub tags: Vec<Tag>,
    pub audit: AuditStamp,
}

/// Tag entity - owned by exactly one post, never shared or renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub created_by: String,
}

impl Tag {
    fn new(name: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            created_by: created_by.into(),
        }
    }
}

impl Post {
    /// Create a new post with tags in the given order.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        created_by: impl Into<String>,
        tag_names: Vec<String>,
    ) -> Self {
        let created_by = created_by.into();
        let tags = tag_names
            .into_iter()
            .map(|name| Tag::new(name, created_by.clone()))
            .collect();

        Self {
            id: 0,
            title: title.into(),
            content: content.into(),
            tags,
            audit: AuditStamp::new(created_by),
        }
    }

    /// Apply an update on behalf of `updated_by`.
    ///
    /// Only the original creator may update. Title and content are applied
    /// unconditionally; the tag list goes through [`reconcile_tags`].
    /// Returns whether the tag list was replaced, so the store knows to
    /// rewrite the tag rows.
    pub fn update(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        tag_names: &[String],
        updated_by: &str,
    ) -> Result<bool, DomainError> {
        if !ownership::owned_by(updated_by, &self.audit.created_by) {
            return Err(DomainError::PostNotUpdatable);
        }

        self.title = title.into();
        self.content = content.into();

        let replaced = match reconcile_tags(&self.tags, tag_names, &self.audit.created_by) {
            Some(tags) => {
                self.tags = tags;
                true
            }
            None => false,
        };

        self.audit.touch(updated_by);
        Ok(replaced)
    }

    /// Ordered tag names, as stored.
    pub fn tag_names(&self) -> Vec<String> {
        self.tags.iter().map(|tag| tag.name.clone()).collect()
    }
}

/// Compare the existing tags' names, in order, against the incoming names.
///
/// Returns `None` when the sequences match (existing tag identities are
/// preserved), otherwise a fresh ordered list attributed to `created_by` -
/// the post's original creator, not the updater. The comparison is by name
/// sequence and order-sensitive: a reorder of the same names replaces all.
pub fn reconcile_tags(existing: &[Tag], names: &[String], created_by: &str) -> Option<Vec<Tag>> {
    let unchanged =
        existing.len() == names.len() && existing.iter().zip(names).all(|(tag, name)| tag.name == *name);

    if unchanged {
        return None;
    }

    Some(
        names
            .iter()
            .map(|name| Tag::new(name.clone(), created_by))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    fn tags(names: &[(&str, i64)]) -> Vec<Tag> {
        names
            .iter()
            .map(|(name, id)| Tag {
                id: *id,
                name: (*name).to_owned(),
                created_by: "alice".to_owned(),
            })
            .collect()
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn reconcile_is_noop_for_identical_sequence() {
        let existing = tags(&[("tag1", 1), ("tag2", 2)]);
        assert!(reconcile_tags(&existing, &names(&["tag1", "tag2"]), "alice").is_none());
    }

    #[test]
    fn reconcile_replaces_on_reorder() {
        let existing = tags(&[("tag1", 1), ("tag2", 2)]);
        let replaced = reconcile_tags(&existing, &names(&["tag2", "tag1"]), "alice")
            .expect("reorder must replace");

        assert_eq!(replaced.len(), 2);
        assert_eq!(replaced[0].name, "tag2");
        assert_eq!(replaced[1].name, "tag1");
        assert!(replaced.iter().all(|tag| tag.id == 0));
    }

    #[test]
    fn reconcile_attributes_new_tags_to_creator() {
        let existing = tags(&[("tag1", 1)]);
        let replaced =
            reconcile_tags(&existing, &names(&["tag3"]), "alice").expect("change must replace");

        assert_eq!(replaced[0].created_by, "alice");
    }

    #[test]
    fn reconcile_replaces_on_emptied_list() {
        let existing = tags(&[("tag1", 1)]);
        let replaced = reconcile_tags(&existing, &[], "alice").expect("clearing must replace");
        assert!(replaced.is_empty());
    }

    #[test]
    fn update_rejects_non_creator() {
        let mut post = Post::new("title", "content", "alice", vec![]);
        let err = post
            .update("new", "new", &[], "bob")
            .expect_err("non-creator must be rejected");

        assert!(matches!(err, DomainError::PostNotUpdatable));
        assert_eq!(post.title, "title");
    }

    #[test]
    fn update_applies_fields_and_stamps_audit() {
        let mut post = Post::new("title", "content", "alice", vec![]);
        let replaced = post
            .update("new title", "new content", &[], "alice")
            .expect("creator update succeeds");

        assert!(!replaced);
        assert_eq!(post.title, "new title");
        assert_eq!(post.content, "new content");
        assert_eq!(post.audit.updated_by.as_deref(), Some("alice"));
    }

    #[test]
    fn update_reports_tag_replacement() {
        let mut post = Post::new("title", "content", "alice", vec!["tag1".to_owned()]);
        let replaced = post
            .update("title", "content", &names(&["tag1", "tag2"]), "alice")
            .expect("creator update succeeds");

        assert!(replaced);
        assert_eq!(post.tag_names(), names(&["tag1", "tag2"]));
    }
}
