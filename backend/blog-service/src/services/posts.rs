/// Post service - post CRUD, category resolution, and paged listing
use crate::db::{
    CategoryRepository, CommentRepository, PageRequest, PostRepository, PostSortField, SortOrder,
};
use crate::dto::{PostDto, PostPageResponse};
use crate::error::{AppError, Result};
use crate::mapper::{post_from_dto, post_to_dto};
use crate::models::Post;
use crate::validation::validate_post;
use std::sync::Arc;

#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        categories: Arc<dyn CategoryRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            posts,
            categories,
            comments,
        }
    }

    async fn to_dto_with_comments(&self, post: &Post) -> Result<PostDto> {
        let comments = self.comments.find_by_post(post.id).await?;
        Ok(post_to_dto(post, &comments))
    }

    /// Validation runs before the referential check, and both before any
    /// persistence access.
    pub async fn create(&self, dto: &PostDto) -> Result<PostDto> {
        validate_post(dto)?;

        self.categories
            .find_by_id(dto.category_id)
            .await?
            .ok_or_else(|| AppError::not_found("Category", "id", dto.category_id))?;

        let post = self.posts.insert(&post_from_dto(dto)).await?;
        tracing::info!(post_id = post.id, category_id = post.category_id, "post created");
        Ok(post_to_dto(&post, &[]))
    }

    pub async fn list_all(&self) -> Result<Vec<PostDto>> {
        let posts = self.posts.find_all().await?;
        let mut dtos = Vec::with_capacity(posts.len());
        for post in &posts {
            dtos.push(self.to_dto_with_comments(post).await?);
        }
        Ok(dtos)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<PostDto> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Post", "id", id))?;
        self.to_dto_with_comments(&post).await
    }

    /// Full-field overwrite of title/description/content/category; id and
    /// comments are not touched by this path.
    pub async fn update(&self, id: i64, dto: &PostDto) -> Result<PostDto> {
        validate_post(dto)?;

        self.categories
            .find_by_id(dto.category_id)
            .await?
            .ok_or_else(|| AppError::not_found("Category", "id", dto.category_id))?;

        let existing = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Post", "id", id))?;

        let updated = self
            .posts
            .update(&Post {
                id: existing.id,
                title: dto.title.clone(),
                description: dto.description.clone(),
                content: dto.content.clone(),
                category_id: dto.category_id,
            })
            .await?;
        tracing::info!(post_id = id, "post updated");
        self.to_dto_with_comments(&updated).await
    }

    /// Read-before-delete: existence is re-checked immediately before the
    /// delete, and a miss is a NotFound rather than a no-op. Owned comments
    /// go with the post.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Post", "id", id))?;

        self.comments.delete_by_post(id).await?;
        self.posts.delete(id).await?;
        tracing::info!(post_id = id, "post deleted");
        Ok(())
    }

    pub async fn list_paged(
        &self,
        page: u32,
        size: u32,
        sort_by: &str,
        sort_order: &str,
    ) -> Result<PostPageResponse> {
        if size == 0 {
            return Err(AppError::BadRequest(
                "Page size must be at least 1".to_string(),
            ));
        }

        let request = PageRequest {
            page,
            size,
            sort_by: PostSortField::parse(sort_by),
            order: SortOrder::parse(sort_order),
        };
        let result = self.posts.find_page(&request).await?;

        let mut content = Vec::with_capacity(result.items.len());
        for post in &result.items {
            content.push(self.to_dto_with_comments(post).await?);
        }

        let total_elements = result.total_elements;
        let total_pages = (total_elements + i64::from(size) - 1) / i64::from(size);
        // An out-of-range page is an empty last page, not an error.
        let last = i64::from(page) + 1 >= total_pages;

        Ok(PostPageResponse {
            content,
            page,
            size,
            total_elements,
            total_pages,
            last,
        })
    }

    /// Category existence is asserted even though the list could simply be
    /// empty; a dangling category id is a client error.
    pub async fn list_by_category(&self, category_id: i64) -> Result<Vec<PostDto>> {
        self.categories
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::not_found("Category", "id", category_id))?;

        let posts = self.posts.find_by_category(category_id).await?;
        let mut dtos = Vec::with_capacity(posts.len());
        for post in &posts {
            dtos.push(self.to_dto_with_comments(post).await?);
        }
        Ok(dtos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::{
        MemoryCategoryRepository, MemoryCommentRepository, MemoryPostRepository,
    };
    use crate::models::{NewCategory, NewComment};

    struct Fixture {
        service: PostService,
        categories: Arc<MemoryCategoryRepository>,
        comments: Arc<MemoryCommentRepository>,
    }

    async fn fixture() -> (Fixture, i64) {
        let posts = Arc::new(MemoryPostRepository::new());
        let categories = Arc::new(MemoryCategoryRepository::new());
        let comments = Arc::new(MemoryCommentRepository::new());
        let service = PostService::new(posts, categories.clone(), comments.clone());

        let category = categories
            .insert(&NewCategory {
                name: "Baking".into(),
                description: "Bread and oven things".into(),
            })
            .await
            .unwrap();

        (
            Fixture {
                service,
                categories,
                comments,
            },
            category.id,
        )
    }

    fn dto(title: &str, category_id: i64) -> PostDto {
        PostDto {
            id: None,
            title: title.into(),
            description: "A long enough description".into(),
            content: "Some content".into(),
            category_id,
            comments: vec![],
        }
    }

    #[tokio::test]
    async fn create_resolves_the_category_first() {
        let (fx, category_id) = fixture().await;

        let created = fx.service.create(&dto("On rye", category_id)).await.unwrap();
        assert!(created.id.is_some());
        assert_eq!(created.category_id, category_id);
        assert!(created.comments.is_empty());
    }

    #[tokio::test]
    async fn create_with_missing_category_persists_nothing() {
        let (fx, _) = fixture().await;

        let err = fx.service.create(&dto("On rye", 999)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { resource: "Category", .. }));
        assert!(fx.service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_with_short_title_reports_the_title_field() {
        let (fx, category_id) = fixture().await;

        let err = fx.service.create(&dto("a", category_id)).await.unwrap_err();
        match err {
            AppError::Validation(map) => assert!(map.contains_key("title")),
            other => panic!("expected Validation, got {other:?}"),
        }
        assert!(fx.service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_preserves_id_and_comments() {
        let (fx, category_id) = fixture().await;
        let id = fx
            .service
            .create(&dto("On rye", category_id))
            .await
            .unwrap()
            .id
            .unwrap();
        fx.comments
            .insert(&NewComment {
                name: "ana".into(),
                email: "ana@example.com".into(),
                body: "long enough comment body".into(),
                post_id: id,
            })
            .await
            .unwrap();

        let updated = fx
            .service
            .update(id, &dto("On wheat", category_id))
            .await
            .unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.title, "On wheat");
        assert_eq!(updated.comments.len(), 1, "comments survive the update");
    }

    #[tokio::test]
    async fn update_with_missing_post_is_not_found() {
        let (fx, category_id) = fixture().await;
        let err = fx
            .service
            .update(42, &dto("On wheat", category_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { resource: "Post", .. }));
    }

    #[tokio::test]
    async fn delete_rechecks_existence_and_removes_owned_comments() {
        let (fx, category_id) = fixture().await;
        let id = fx
            .service
            .create(&dto("On rye", category_id))
            .await
            .unwrap()
            .id
            .unwrap();
        fx.comments
            .insert(&NewComment {
                name: "ana".into(),
                email: "ana@example.com".into(),
                body: "long enough comment body".into(),
                post_id: id,
            })
            .await
            .unwrap();

        fx.service.delete(id).await.unwrap();
        assert!(fx.comments.find_by_post(id).await.unwrap().is_empty());

        let err = fx.service.delete(id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn paging_25_posts_by_10_gives_a_short_last_page() {
        let (fx, category_id) = fixture().await;
        for i in 0..25 {
            fx.service
                .create(&dto(&format!("Post {i:02}"), category_id))
                .await
                .unwrap();
        }

        let page = fx.service.list_paged(2, 10, "id", "asc").await.unwrap();
        assert_eq!(page.content.len(), 5);
        assert_eq!(page.page, 2);
        assert_eq!(page.size, 10);
        assert_eq!(page.total_elements, 25);
        assert_eq!(page.total_pages, 3);
        assert!(page.last);

        let first = fx.service.list_paged(0, 10, "id", "asc").await.unwrap();
        assert_eq!(first.content.len(), 10);
        assert!(!first.last);
    }

    #[tokio::test]
    async fn out_of_range_page_is_empty_and_last() {
        let (fx, category_id) = fixture().await;
        for i in 0..25 {
            fx.service
                .create(&dto(&format!("Post {i:02}"), category_id))
                .await
                .unwrap();
        }

        let page = fx.service.list_paged(99, 10, "id", "asc").await.unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 25);
        assert!(page.last);
    }

    #[tokio::test]
    async fn sort_order_typos_sort_descending() {
        let (fx, category_id) = fixture().await;
        for title in ["Alpha", "Mid", "Zulu"] {
            fx.service.create(&dto(title, category_id)).await.unwrap();
        }

        let page = fx
            .service
            .list_paged(0, 10, "title", "descc")
            .await
            .unwrap();
        assert_eq!(page.content[0].title, "Zulu");

        let page = fx.service.list_paged(0, 10, "title", "ASC").await.unwrap();
        assert_eq!(page.content[0].title, "Alpha");
    }

    #[tokio::test]
    async fn empty_store_pages_as_a_single_empty_last_page() {
        let (fx, _) = fixture().await;
        let page = fx.service.list_paged(0, 10, "id", "asc").await.unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.last);
    }

    #[tokio::test]
    async fn list_by_category_asserts_the_category_exists() {
        let (fx, category_id) = fixture().await;
        fx.service.create(&dto("On rye", category_id)).await.unwrap();

        let err = fx.service.list_by_category(999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { resource: "Category", .. }));

        let other = fx
            .categories
            .insert(&NewCategory {
                name: "Brewing".into(),
                description: "Beer and fermentation".into(),
            })
            .await
            .unwrap();
        // Existing but empty category lists as empty, not as an error.
        assert!(fx.service.list_by_category(other.id).await.unwrap().is_empty());
        assert_eq!(fx.service.list_by_category(category_id).await.unwrap().len(), 1);
    }
}
