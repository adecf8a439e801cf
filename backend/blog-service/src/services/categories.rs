/// Category service - category CRUD and the delete policy
use crate::db::{CategoryRepository, PostRepository};
use crate::dto::CategoryDto;
use crate::error::{AppError, Result};
use crate::mapper::{category_from_dto, category_to_dto};
use crate::models::Category;
use std::sync::Arc;

#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
    posts: Arc<dyn PostRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { categories, posts }
    }

    pub async fn add(&self, dto: &CategoryDto) -> Result<CategoryDto> {
        let category = self.categories.insert(&category_from_dto(dto)).await?;
        tracing::info!(category_id = category.id, "category created");
        Ok(category_to_dto(&category))
    }

    pub async fn get(&self, id: i64) -> Result<CategoryDto> {
        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category", "id", id))?;
        Ok(category_to_dto(&category))
    }

    /// All categories in storage iteration order, re-queried per call.
    pub async fn list_all(&self) -> Result<Vec<CategoryDto>> {
        let categories = self.categories.find_all().await?;
        Ok(categories.iter().map(category_to_dto).collect())
    }

    pub async fn update(&self, id: i64, dto: &CategoryDto) -> Result<CategoryDto> {
        let existing = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category", "id", id))?;

        let updated = self
            .categories
            .update(&Category {
                id: existing.id,
                name: dto.name.clone(),
                description: dto.description.clone(),
            })
            .await?;
        tracing::info!(category_id = id, "category updated");
        Ok(category_to_dto(&updated))
    }

    /// Delete policy: a category that still has dependent posts is rejected,
    /// never cascaded.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category", "id", id))?;

        let dependents = self.posts.count_by_category(id).await?;
        if dependents > 0 {
            tracing::warn!(
                category_id = id,
                dependents,
                "category delete rejected, posts still reference it"
            );
            return Err(AppError::Conflict(format!(
                "Category {id} still has {dependents} post(s); delete or move them first"
            )));
        }

        self.categories.delete(id).await?;
        tracing::info!(category_id = id, "category deleted");
        Ok(())
    }
}
