/// Explicit entity⇄DTO conversions
///
/// One hand-written function per direction and entity pair. The mapping is
/// total and lossless for the defined field sets: every DTO field has a
/// matching entity field, except ids on create paths which the store
/// assigns.
use crate::dto::{CategoryDto, CommentDto, PostDto};
use crate::models::{Category, Comment, NewCategory, NewComment, NewPost, Post};

pub fn category_to_dto(category: &Category) -> CategoryDto {
    CategoryDto {
        id: Some(category.id),
        name: category.name.clone(),
        description: category.description.clone(),
    }
}

pub fn category_from_dto(dto: &CategoryDto) -> NewCategory {
    NewCategory {
        name: dto.name.clone(),
        description: dto.description.clone(),
    }
}

pub fn post_to_dto(post: &Post, comments: &[Comment]) -> PostDto {
    PostDto {
        id: Some(post.id),
        title: post.title.clone(),
        description: post.description.clone(),
        content: post.content.clone(),
        category_id: post.category_id,
        comments: comments.iter().map(comment_to_dto).collect(),
    }
}

pub fn post_from_dto(dto: &PostDto) -> NewPost {
    NewPost {
        title: dto.title.clone(),
        description: dto.description.clone(),
        content: dto.content.clone(),
        category_id: dto.category_id,
    }
}

pub fn comment_to_dto(comment: &Comment) -> CommentDto {
    CommentDto {
        id: Some(comment.id),
        name: comment.name.clone(),
        email: comment.email.clone(),
        body: comment.body.clone(),
        post_id: Some(comment.post_id),
    }
}

pub fn comment_from_dto(dto: &CommentDto, post_id: i64) -> NewComment {
    NewComment {
        name: dto.name.clone(),
        email: dto.email.clone(),
        body: dto.body.clone(),
        post_id,
    }
}
