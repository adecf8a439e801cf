/// Comment service - comment CRUD under an owning post
use crate::db::{CommentRepository, PostRepository};
use crate::dto::CommentDto;
use crate::error::{AppError, Result};
use crate::mapper::{comment_from_dto, comment_to_dto};
use crate::models::Comment;
use crate::validation::validate_comment;
use std::sync::Arc;

#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { comments, posts }
    }

    /// Resolve post and comment independently, then assert the stored
    /// ownership. A mismatch is a client error distinct from NotFound:
    /// both entities exist, the relationship is wrong.
    async fn resolve_owned(&self, post_id: i64, comment_id: i64) -> Result<Comment> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found("Post", "id", post_id))?;

        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::not_found("Comment", "id", comment_id))?;

        if comment.post_id != post.id {
            return Err(AppError::BadRequest(
                "Comment does not belong to Post".to_string(),
            ));
        }

        Ok(comment)
    }

    pub async fn create(&self, post_id: i64, dto: &CommentDto) -> Result<CommentDto> {
        validate_comment(dto)?;

        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found("Post", "id", post_id))?;

        let comment = self.comments.insert(&comment_from_dto(dto, post.id)).await?;
        tracing::info!(comment_id = comment.id, post_id, "comment created");
        Ok(comment_to_dto(&comment))
    }

    pub async fn list_by_post(&self, post_id: i64) -> Result<Vec<CommentDto>> {
        let comments = self.comments.find_by_post(post_id).await?;
        Ok(comments.iter().map(comment_to_dto).collect())
    }

    pub async fn get_by_id(&self, post_id: i64, comment_id: i64) -> Result<CommentDto> {
        let comment = self.resolve_owned(post_id, comment_id).await?;
        Ok(comment_to_dto(&comment))
    }

    /// Overwrites name/email/body only; the owning post is never
    /// reassigned through this path.
    pub async fn update(
        &self,
        post_id: i64,
        comment_id: i64,
        dto: &CommentDto,
    ) -> Result<CommentDto> {
        validate_comment(dto)?;

        let existing = self.resolve_owned(post_id, comment_id).await?;

        let updated = self
            .comments
            .update(&Comment {
                id: existing.id,
                name: dto.name.clone(),
                email: dto.email.clone(),
                body: dto.body.clone(),
                post_id: existing.post_id,
            })
            .await?;
        tracing::info!(comment_id, post_id, "comment updated");
        Ok(comment_to_dto(&updated))
    }

    pub async fn delete(&self, post_id: i64, comment_id: i64) -> Result<()> {
        let comment = self.resolve_owned(post_id, comment_id).await?;
        self.comments.delete(comment.id).await?;
        tracing::info!(comment_id, post_id, "comment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::{MemoryCommentRepository, MemoryPostRepository};
    use crate::models::NewPost;

    async fn fixture() -> (CommentService, i64, i64) {
        let posts = Arc::new(MemoryPostRepository::new());
        let comments = Arc::new(MemoryCommentRepository::new());
        let service = CommentService::new(comments, posts.clone());

        let post_a = posts
            .insert(&NewPost {
                title: "On rye".into(),
                description: "A long enough description".into(),
                content: "content".into(),
                category_id: 1,
            })
            .await
            .unwrap();
        let post_b = posts
            .insert(&NewPost {
                title: "On wheat".into(),
                description: "Another long description".into(),
                content: "content".into(),
                category_id: 1,
            })
            .await
            .unwrap();

        (service, post_a.id, post_b.id)
    }

    fn dto(name: &str) -> CommentDto {
        CommentDto {
            id: None,
            name: name.into(),
            email: format!("{name}@example.com"),
            body: "long enough comment body".into(),
            post_id: None,
        }
    }

    #[tokio::test]
    async fn create_attaches_the_comment_to_the_post() {
        let (service, post_a, _) = fixture().await;

        let created = service.create(post_a, &dto("ana")).await.unwrap();
        assert_eq!(created.post_id, Some(post_a));

        let listed = service.list_by_post(post_a).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);
    }

    #[tokio::test]
    async fn create_under_missing_post_is_not_found() {
        let (service, _, _) = fixture().await;
        let err = service.create(99, &dto("ana")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { resource: "Post", .. }));
    }

    #[tokio::test]
    async fn fetching_through_the_wrong_post_is_a_relationship_error() {
        let (service, post_a, post_b) = fixture().await;
        let comment_id = service
            .create(post_a, &dto("ana"))
            .await
            .unwrap()
            .id
            .unwrap();

        let err = service.get_by_id(post_b, comment_id).await.unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert_eq!(msg, "Comment does not belong to Post"),
            other => panic!("expected BadRequest, got {other:?}"),
        }

        // And through the right post it resolves fine.
        assert!(service.get_by_id(post_a, comment_id).await.is_ok());
    }

    #[tokio::test]
    async fn missing_comment_is_not_found_rather_than_mismatch() {
        let (service, post_a, _) = fixture().await;
        let err = service.get_by_id(post_a, 41).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { resource: "Comment", .. }));
    }

    #[tokio::test]
    async fn update_never_reassigns_the_owning_post() {
        let (service, post_a, _) = fixture().await;
        let comment_id = service
            .create(post_a, &dto("ana"))
            .await
            .unwrap()
            .id
            .unwrap();

        // Even a body claiming another post leaves ownership intact.
        let mut body = dto("bob");
        body.post_id = Some(777);
        let updated = service.update(post_a, comment_id, &body).await.unwrap();

        assert_eq!(updated.post_id, Some(post_a));
        assert_eq!(updated.name, "bob");
        assert_eq!(updated.id, Some(comment_id));
    }

    #[tokio::test]
    async fn update_through_the_wrong_post_is_rejected() {
        let (service, post_a, post_b) = fixture().await;
        let comment_id = service
            .create(post_a, &dto("ana"))
            .await
            .unwrap()
            .id
            .unwrap();

        let err = service
            .update(post_b, comment_id, &dto("bob"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn delete_checks_ownership_then_removes() {
        let (service, post_a, post_b) = fixture().await;
        let comment_id = service
            .create(post_a, &dto("ana"))
            .await
            .unwrap()
            .id
            .unwrap();

        let err = service.delete(post_b, comment_id).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        service.delete(post_a, comment_id).await.unwrap();
        assert!(service.list_by_post(post_a).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_comment_body_is_a_field_error() {
        let (service, post_a, _) = fixture().await;
        let mut invalid = dto("ana");
        invalid.body = "short".into();

        let err = service.create(post_a, &invalid).await.unwrap_err();
        match err {
            AppError::Validation(map) => assert!(map.contains_key("body")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
