/// Post handlers - HTTP endpoints for post operations
use crate::dto::PostDto;
use crate::error::Result;
use crate::handlers::AppState;
use crate::middleware::AdminUser;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

/// Pagination query parameters with the documented defaults
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
    #[serde(default = "default_sort_by", rename = "sortBy")]
    pub sort_by: String,
    #[serde(default = "default_sort_order", rename = "sortOrder")]
    pub sort_order: String,
}

fn default_size() -> u32 {
    10
}

fn default_sort_by() -> String {
    "id".to_string()
}

fn default_sort_order() -> String {
    "asc".to_string()
}

/// Create a new post (admin only)
pub async fn create_post(
    state: web::Data<AppState>,
    _admin: AdminUser,
    body: web::Json<PostDto>,
) -> Result<HttpResponse> {
    let post = state.posts.create(&body).await?;
    Ok(HttpResponse::Created().json(post))
}

/// List all posts
pub async fn list_posts(state: web::Data<AppState>) -> Result<HttpResponse> {
    let posts = state.posts.list_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// Get a post by id
pub async fn get_post(state: web::Data<AppState>, id: web::Path<i64>) -> Result<HttpResponse> {
    let post = state.posts.get_by_id(*id).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// Update a post (admin only)
pub async fn update_post(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<i64>,
    body: web::Json<PostDto>,
) -> Result<HttpResponse> {
    let post = state.posts.update(*id, &body).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// Delete a post (admin only); plain-text confirmation
pub async fn delete_post(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    state.posts.delete(*id).await?;
    Ok(HttpResponse::Ok().body("Post deleted successfully"))
}

/// Paged, sorted post listing
pub async fn list_posts_paged(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let page = state
        .posts
        .list_paged(query.page, query.size, &query.sort_by, &query.sort_order)
        .await?;
    Ok(HttpResponse::Ok().json(page))
}

/// Posts belonging to one category
pub async fn list_posts_by_category(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    let posts = state.posts.list_by_category(*id).await?;
    Ok(HttpResponse::Ok().json(posts))
}
