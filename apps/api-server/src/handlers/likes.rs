//! Like endpoints.

use actix_web::{HttpResponse, web};

use board_shared::dto::LikeCreateRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /posts/{id}/likes
pub async fn create_like(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<LikeCreateRequest>,
) -> AppResult<HttpResponse> {
    let id = state
        .likes
        .create_like(path.into_inner(), body.into_inner().created_by)
        .await?;

    Ok(HttpResponse::Created().json(id))
}
