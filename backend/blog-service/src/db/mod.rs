/// Database access layer
///
/// Repository traits are the only path to persistent storage; services take
/// them as constructor-injected trait objects so they stay testable with
/// the in-memory implementations in [`memory`]. Production wiring uses the
/// sqlx/Postgres implementations in the per-entity modules.
pub mod category_repo;
pub mod comment_repo;
pub mod memory;
pub mod post_repo;

pub use category_repo::PgCategoryRepository;
pub use comment_repo::PgCommentRepository;
pub use post_repo::PgPostRepository;

use crate::error::Result;
use crate::models::{Category, Comment, NewCategory, NewComment, NewPost, Post};
use async_trait::async_trait;

/// Sort direction for paged queries.
///
/// Only a case-insensitive "asc" sorts ascending; every other value,
/// typos included, sorts descending. This leniency is observable API
/// behavior and is kept on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("asc") {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Sortable post columns. Unknown sort keys fall back to the id column so
/// user input never reaches the ORDER BY clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSortField {
    Id,
    Title,
    Description,
    Content,
}

impl PostSortField {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "title" => PostSortField::Title,
            "description" => PostSortField::Description,
            "content" => PostSortField::Content,
            _ => PostSortField::Id,
        }
    }

    pub fn as_column(&self) -> &'static str {
        match self {
            PostSortField::Id => "id",
            PostSortField::Title => "title",
            PostSortField::Description => "description",
            PostSortField::Content => "content",
        }
    }
}

/// Zero-indexed page request with a fixed page size.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort_by: PostSortField,
    pub order: SortOrder,
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }
}

/// One page of items plus the collection-wide element count.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_elements: i64,
}

/// Capability set over category storage
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: &NewCategory) -> Result<Category>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>>;
    async fn find_all(&self) -> Result<Vec<Category>>;
    async fn update(&self, category: &Category) -> Result<Category>;
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Capability set over post storage
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert(&self, post: &NewPost) -> Result<Post>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>>;
    async fn find_all(&self) -> Result<Vec<Post>>;
    async fn find_page(&self, request: &PageRequest) -> Result<Page<Post>>;
    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Post>>;
    async fn count_by_category(&self, category_id: i64) -> Result<i64>;
    async fn update(&self, post: &Post) -> Result<Post>;
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Capability set over comment storage
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: &NewComment) -> Result<Comment>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>>;
    async fn find_by_post(&self, post_id: i64) -> Result<Vec<Comment>>;
    async fn update(&self, comment: &Comment) -> Result<Comment>;
    async fn delete(&self, id: i64) -> Result<()>;
    async fn delete_by_post(&self, post_id: i64) -> Result<()>;
}
