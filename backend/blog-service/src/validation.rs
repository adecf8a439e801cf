/// Field-level constraint checks on incoming DTOs
///
/// One explicit function per DTO type, called once at the service boundary
/// before any persistence access. Failures collect one entry per violated
/// field into `AppError::Validation`.
use crate::dto::{CommentDto, PostDto};
use crate::error::{AppError, Result};
use std::collections::BTreeMap;
use validator::ValidateEmail;

pub const MIN_TITLE_LEN: usize = 2;
pub const MIN_DESCRIPTION_LEN: usize = 10;
pub const MIN_BODY_LEN: usize = 10;

pub fn validate_post(dto: &PostDto) -> Result<()> {
    let mut errors = BTreeMap::new();

    if dto.title.trim().is_empty() {
        errors.insert("title", "Post title must not be empty".to_string());
    } else if dto.title.chars().count() < MIN_TITLE_LEN {
        errors.insert(
            "title",
            format!("Post title must be at least {MIN_TITLE_LEN} characters long"),
        );
    }

    if dto.description.trim().is_empty() {
        errors.insert(
            "description",
            "Post description must not be empty".to_string(),
        );
    } else if dto.description.chars().count() < MIN_DESCRIPTION_LEN {
        errors.insert(
            "description",
            format!("Post description must be at least {MIN_DESCRIPTION_LEN} characters long"),
        );
    }

    if dto.content.trim().is_empty() {
        errors.insert("content", "Post content must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

pub fn validate_comment(dto: &CommentDto) -> Result<()> {
    let mut errors = BTreeMap::new();

    if dto.name.trim().is_empty() {
        errors.insert("name", "Comment name must not be empty".to_string());
    }

    if dto.email.trim().is_empty() {
        errors.insert("email", "Comment email must not be empty".to_string());
    } else if !dto.email.validate_email() {
        errors.insert("email", "Comment email must be a valid address".to_string());
    }

    if dto.body.trim().is_empty() {
        errors.insert("body", "Comment body must not be empty".to_string());
    } else if dto.body.chars().count() < MIN_BODY_LEN {
        errors.insert(
            "body",
            format!("Comment body must be at least {MIN_BODY_LEN} characters long"),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, description: &str, content: &str) -> PostDto {
        PostDto {
            id: None,
            title: title.into(),
            description: description.into(),
            content: content.into(),
            category_id: 1,
            comments: vec![],
        }
    }

    #[test]
    fn one_char_title_is_rejected_with_title_key() {
        let err = validate_post(&post("a", "a long enough description", "body"))
            .expect_err("1-char title must fail");
        match err {
            AppError::Validation(map) => {
                assert!(map.contains_key("title"));
                assert!(!map.contains_key("description"));
                assert!(!map.contains_key("content"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn each_violated_field_gets_its_own_entry() {
        let err = validate_post(&post("a", "short", "")).expect_err("all fields invalid");
        match err {
            AppError::Validation(map) => {
                assert_eq!(map.len(), 3);
                assert!(map.contains_key("title"));
                assert!(map.contains_key("description"));
                assert!(map.contains_key("content"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn valid_post_passes() {
        validate_post(&post(
            "On rye",
            "A long enough description",
            "Some content",
        ))
        .expect("valid post");
    }

    #[test]
    fn comment_email_must_be_well_formed() {
        let dto = CommentDto {
            id: None,
            name: "ana".into(),
            email: "not-an-email".into(),
            body: "long enough comment body".into(),
            post_id: None,
        };
        let err = validate_comment(&dto).expect_err("bad email must fail");
        match err {
            AppError::Validation(map) => assert!(map.contains_key("email")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn valid_comment_passes() {
        let dto = CommentDto {
            id: None,
            name: "ana".into(),
            email: "ana@example.com".into(),
            body: "long enough comment body".into(),
            post_id: None,
        };
        validate_comment(&dto).expect("valid comment");
    }
}
