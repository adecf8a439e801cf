use crate::db::{Page, PageRequest, PostRepository};
use crate::error::Result;
use crate::models::{NewPost, Post};
use async_trait::async_trait;
use sqlx::{PgPool, Row};

/// Postgres-backed post storage
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn insert(&self, post: &NewPost) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, description, content, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, content, category_id
            "#,
        )
        .bind(&post.title)
        .bind(&post.description)
        .bind(&post.content)
        .bind(post.category_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, description, content, category_id
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn find_all(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, description, content, category_id
            FROM posts
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<Post>> {
        // sort column and direction come from closed enums, never from raw input
        let query = format!(
            r#"
            SELECT id, title, description, content, category_id
            FROM posts
            ORDER BY {} {}
            LIMIT $1 OFFSET $2
            "#,
            request.sort_by.as_column(),
            request.order.as_sql(),
        );

        let items = sqlx::query_as::<_, Post>(&query)
            .bind(i64::from(request.size))
            .bind(request.offset())
            .fetch_all(&self.pool)
            .await?;

        let row = sqlx::query("SELECT COUNT(*) as count FROM posts")
            .fetch_one(&self.pool)
            .await?;
        let total_elements = row.get::<i64, _>("count");

        Ok(Page {
            items,
            total_elements,
        })
    }

    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, description, content, category_id
            FROM posts
            WHERE category_id = $1
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn count_by_category(&self, category_id: i64) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM posts WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get::<i64, _>("count"))
    }

    async fn update(&self, post: &Post) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $1, description = $2, content = $3, category_id = $4
            WHERE id = $5
            RETURNING id, title, description, content, category_id
            "#,
        )
        .bind(&post.title)
        .bind(&post.description)
        .bind(&post.content)
        .bind(post.category_id)
        .bind(post.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
