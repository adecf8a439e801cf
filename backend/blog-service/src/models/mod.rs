/// Persisted entity shapes for the blog service
///
/// These structs mirror the relational schema one-to-one. Wire-facing
/// representations live in `dto` and are produced by `mapper`; a Post's
/// comments are rows in the comments table, not a column here.
use sqlx::FromRow;

/// A category owning zero or more posts
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// A blog post belonging to exactly one category
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category_id: i64,
}

/// A comment belonging to exactly one post
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Comment {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
    pub post_id: i64,
}

/// Insert shape for a category; the id is assigned by the store
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

/// Insert shape for a post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub content: String,
    pub category_id: i64,
}

/// Insert shape for a comment
#[derive(Debug, Clone)]
pub struct NewComment {
    pub name: String,
    pub email: String,
    pub body: String,
    pub post_id: i64,
}
