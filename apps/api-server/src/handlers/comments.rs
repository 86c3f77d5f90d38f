//! Comment endpoints.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use board_shared::dto::{CommentCreateRequest, CommentUpdateRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Query parameters of `DELETE /comments/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentQuery {
    pub created_by: String,
}

/// POST /posts/{id}/comments
pub async fn create_comment(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<CommentCreateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let id = state
        .comments
        .create_comment(path.into_inner(), req.content, req.created_by)
        .await?;

    Ok(HttpResponse::Created().json(id))
}

/// PUT /comments/{id}
pub async fn update_comment(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<CommentUpdateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let id = state
        .comments
        .update_comment(path.into_inner(), req.content, &req.updated_by)
        .await?;

    Ok(HttpResponse::Ok().json(id))
}

/// DELETE /comments/{id}?createdBy=
pub async fn delete_comment(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<DeleteCommentQuery>,
) -> AppResult<HttpResponse> {
    let id = state
        .comments
        .delete_comment(path.into_inner(), &query.created_by)
        .await?;

    Ok(HttpResponse::Ok().json(id))
}
