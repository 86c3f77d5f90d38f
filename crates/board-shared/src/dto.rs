//! Data Transfer Objects - request/response types for the API.
//!
//! All JSON fields are camelCase; actors self-report their identity in
//! plain `createdBy`/`updatedBy` fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCreateRequest {
    pub title: String,
    pub content: String,
    pub created_by: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request to update a post. The tag list is the full desired list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdateRequest {
    pub title: String,
    pub content: String,
    pub updated_by: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One row of `GET /posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummaryResponse {
    pub id: i64,
    pub title: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_tag: Option<String>,
    pub like_count: u64,
}

/// Response of `GET /posts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<CommentResponse>,
    pub tags: Vec<String>,
    pub like_count: u64,
}

/// Comment as embedded in a post detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// Request to create a comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreateRequest {
    pub content: String,
    pub created_by: String,
}

/// Request to update a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentUpdateRequest {
    pub content: String,
    pub updated_by: String,
}

/// Request to like a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeCreateRequest {
    pub created_by: String,
}

/// Spring-style page envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_create_request_defaults_tags() {
        let req: PostCreateRequest = serde_json::from_str(
            r#"{"title":"t","content":"c","createdBy":"alice"}"#,
        )
        .unwrap();
        assert!(req.tags.is_empty());
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = PostSummaryResponse {
            id: 1,
            title: "t".to_owned(),
            created_by: "alice".to_owned(),
            created_at: Utc::now(),
            first_tag: Some("tag1".to_owned()),
            like_count: 2,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["createdBy"], "alice");
        assert_eq!(json["firstTag"], "tag1");
        assert_eq!(json["likeCount"], 2);
    }
}
