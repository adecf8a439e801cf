/// Comment handlers - HTTP endpoints for comment operations, nested under posts
use crate::dto::CommentDto;
use crate::error::Result;
use crate::handlers::AppState;
use crate::middleware::AuthUser;
use actix_web::{web, HttpResponse};

/// Create a new comment under a post (authenticated)
pub async fn create_comment(
    state: web::Data<AppState>,
    _user: AuthUser,
    post_id: web::Path<i64>,
    body: web::Json<CommentDto>,
) -> Result<HttpResponse> {
    let comment = state.comments.create(*post_id, &body).await?;
    Ok(HttpResponse::Created().json(comment))
}

/// List comments for a post
pub async fn list_comments(
    state: web::Data<AppState>,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let comments = state.comments.list_by_post(*post_id).await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// Get a single comment, asserting it belongs to the post
pub async fn get_comment(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let comment = state.comments.get_by_id(post_id, comment_id).await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// Update a comment's name/email/body (authenticated)
pub async fn update_comment(
    state: web::Data<AppState>,
    _user: AuthUser,
    path: web::Path<(i64, i64)>,
    body: web::Json<CommentDto>,
) -> Result<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let comment = state.comments.update(post_id, comment_id, &body).await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// Delete a comment (authenticated); plain-text confirmation
pub async fn delete_comment(
    state: web::Data<AppState>,
    _user: AuthUser,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    state.comments.delete(post_id, comment_id).await?;
    Ok(HttpResponse::Ok().body("Comment deleted successfully"))
}
