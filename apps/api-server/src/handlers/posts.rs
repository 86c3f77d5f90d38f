//! Post endpoints.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use board_core::ports::{PageRequest, PostFilter};
use board_core::service::{CreatePost, UpdatePost};
use board_shared::dto::{
    CommentResponse, PageResponse, PostCreateRequest, PostDetailResponse, PostSummaryResponse,
    PostUpdateRequest,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Query parameters of `GET /posts`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListQuery {
    pub title: Option<String>,
    pub created_by: Option<String>,
    pub tag: Option<String>,
    pub page: Option<u64>,
    pub size: Option<u64>,
}

/// Query parameters of `DELETE /posts/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostQuery {
    pub created_by: String,
}

/// GET /posts
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let request = PageRequest::new(
        query.page.unwrap_or(0),
        query.size.unwrap_or(PageRequest::DEFAULT_SIZE),
    );
    let filter = PostFilter {
        title: query.title,
        created_by: query.created_by,
        tag: query.tag,
    };

    let page = state
        .posts
        .find_page(request, filter)
        .await?
        .map(|summary| PostSummaryResponse {
            id: summary.id,
            title: summary.title,
            created_by: summary.created_by,
            created_at: summary.created_at,
            first_tag: summary.first_tag,
            like_count: summary.like_count,
        });

    Ok(HttpResponse::Ok().json(PageResponse {
        content: page.content,
        page: page.page,
        size: page.size,
        total_elements: page.total_elements,
        total_pages: page.total_pages,
    }))
}

/// GET /posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let detail = state.posts.get_post(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(PostDetailResponse {
        id: detail.id,
        title: detail.title,
        content: detail.content,
        created_by: detail.created_by,
        created_at: detail.created_at,
        comments: detail
            .comments
            .into_iter()
            .map(|comment| CommentResponse {
                id: comment.id,
                content: comment.content,
                created_by: comment.created_by,
                created_at: comment.created_at,
            })
            .collect(),
        tags: detail.tags,
        like_count: detail.like_count,
    }))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostCreateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let id = state
        .posts
        .create_post(CreatePost {
            title: req.title,
            content: req.content,
            created_by: req.created_by,
            tags: req.tags,
        })
        .await?;

    Ok(HttpResponse::Created().json(id))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PostUpdateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let id = state
        .posts
        .update_post(
            path.into_inner(),
            UpdatePost {
                title: req.title,
                content: req.content,
                updated_by: req.updated_by,
                tags: req.tags,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(id))
}

/// DELETE /posts/{id}?createdBy=
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<DeletePostQuery>,
) -> AppResult<HttpResponse> {
    let id = state
        .posts
        .delete_post(path.into_inner(), &query.created_by)
        .await?;

    Ok(HttpResponse::Ok().json(id))
}
