/// Category handlers - HTTP endpoints for category operations
use crate::dto::CategoryDto;
use crate::error::Result;
use crate::handlers::AppState;
use crate::middleware::AdminUser;
use actix_web::{web, HttpResponse};

/// Create a new category (admin only)
pub async fn create_category(
    state: web::Data<AppState>,
    _admin: AdminUser,
    body: web::Json<CategoryDto>,
) -> Result<HttpResponse> {
    let category = state.categories.add(&body).await?;
    Ok(HttpResponse::Created().json(category))
}

/// Get a category by id
pub async fn get_category(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    let category = state.categories.get(*id).await?;
    Ok(HttpResponse::Ok().json(category))
}

/// List all categories
pub async fn list_categories(state: web::Data<AppState>) -> Result<HttpResponse> {
    let categories = state.categories.list_all().await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// Update a category (admin only)
pub async fn update_category(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<i64>,
    body: web::Json<CategoryDto>,
) -> Result<HttpResponse> {
    let category = state.categories.update(*id, &body).await?;
    Ok(HttpResponse::Ok().json(category))
}

/// Delete a category (admin only); plain-text confirmation
pub async fn delete_category(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    state.categories.delete(*id).await?;
    Ok(HttpResponse::Ok().body("Category deleted successfully!"))
}
