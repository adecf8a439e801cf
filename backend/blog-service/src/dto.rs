/// Wire-facing representations of the blog entities
///
/// DTOs serialize camelCase to match the public API contract. On create
/// paths the id is absent from the incoming body and assigned by the store.
use serde::{Deserialize, Serialize};

/// Category as seen on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
}

/// Post as seen on the wire, comments included
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category_id: i64,
    #[serde(default)]
    pub comments: Vec<CommentDto>,
}

/// Comment as seen on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub body: String,
    #[serde(default)]
    pub post_id: Option<i64>,
}

/// One page of posts plus the pagination bookkeeping clients need
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPageResponse {
    pub content: Vec<PostDto>,
    pub page: u32,
    pub size: u32,
    pub total_elements: i64,
    pub total_pages: i64,
    pub last: bool,
}
