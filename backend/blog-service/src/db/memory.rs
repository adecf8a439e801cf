/// In-memory repository implementations
///
/// Store-backed fakes with the same observable behavior as the Postgres
/// implementations: assigned increasing ids, insertion iteration order,
/// identical pagination and sorting semantics. Unit and integration tests
/// run the services against these.
use crate::db::{
    CategoryRepository, CommentRepository, Page, PageRequest, PostRepository, PostSortField,
    SortOrder,
};
use crate::error::Result;
use crate::models::{Category, Comment, NewCategory, NewComment, NewPost, Post};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn assign_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// In-memory category storage
pub struct MemoryCategoryRepository {
    table: RwLock<Table<Category>>,
}

impl MemoryCategoryRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for MemoryCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepository {
    async fn insert(&self, category: &NewCategory) -> Result<Category> {
        let mut table = self.table.write().await;
        let id = table.assign_id();
        let category = Category {
            id,
            name: category.name.clone(),
            description: category.description.clone(),
        };
        table.rows.insert(id, category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, category: &Category) -> Result<Category> {
        let mut table = self.table.write().await;
        table.rows.insert(category.id, category.clone());
        Ok(category.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}

/// In-memory post storage
pub struct MemoryPostRepository {
    table: RwLock<Table<Post>>,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for MemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn compare_posts(a: &Post, b: &Post, sort_by: PostSortField) -> Ordering {
    match sort_by {
        PostSortField::Id => a.id.cmp(&b.id),
        PostSortField::Title => a.title.cmp(&b.title),
        PostSortField::Description => a.description.cmp(&b.description),
        PostSortField::Content => a.content.cmp(&b.content),
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn insert(&self, post: &NewPost) -> Result<Post> {
        let mut table = self.table.write().await;
        let id = table.assign_id();
        let post = Post {
            id,
            title: post.title.clone(),
            description: post.description.clone(),
            content: post.content.clone(),
            category_id: post.category_id,
        };
        table.rows.insert(id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<Post>> {
        let table = self.table.read().await;
        let mut all: Vec<Post> = table.rows.values().cloned().collect();
        all.sort_by(|a, b| {
            let ordering = compare_posts(a, b, request.sort_by);
            match request.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total_elements = all.len() as i64;
        let offset = request.offset();
        let items = if offset >= total_elements {
            Vec::new()
        } else {
            all.into_iter()
                .skip(offset as usize)
                .take(request.size as usize)
                .collect()
        };

        Ok(Page {
            items,
            total_elements,
        })
    }

    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Post>> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .filter(|post| post.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn count_by_category(&self, category_id: i64) -> Result<i64> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .filter(|post| post.category_id == category_id)
            .count() as i64)
    }

    async fn update(&self, post: &Post) -> Result<Post> {
        let mut table = self.table.write().await;
        table.rows.insert(post.id, post.clone());
        Ok(post.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}

/// In-memory comment storage
pub struct MemoryCommentRepository {
    table: RwLock<Table<Comment>>,
}

impl MemoryCommentRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for MemoryCommentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn insert(&self, comment: &NewComment) -> Result<Comment> {
        let mut table = self.table.write().await;
        let id = table.assign_id();
        let comment = Comment {
            id,
            name: comment.name.clone(),
            email: comment.email.clone(),
            body: comment.body.clone(),
            post_id: comment.post_id,
        };
        table.rows.insert(id, comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_post(&self, post_id: i64) -> Result<Vec<Comment>> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn update(&self, comment: &Comment) -> Result<Comment> {
        let mut table = self.table.write().await;
        table.rows.insert(comment.id, comment.clone());
        Ok(comment.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn delete_by_post(&self, post_id: i64) -> Result<()> {
        self.table
            .write()
            .await
            .rows
            .retain(|_, comment| comment.post_id != post_id);
        Ok(())
    }
}
