/// HTTP request handlers and route configuration
pub mod categories;
pub mod comments;
pub mod posts;

use crate::services::{CategoryService, CommentService, PostService};
use actix_web::{web, HttpResponse};

/// Shared handler state: one service per entity kind
#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryService,
    pub posts: PostService,
    pub comments: CommentService,
}

pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "alive" }))
}

/// Route tree under /api/v1
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health/live", web::get().to(liveness))
            .service(
                web::scope("/categories")
                    .service(
                        web::resource("")
                            .route(web::post().to(categories::create_category))
                            .route(web::get().to(categories::list_categories)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(categories::get_category))
                            .route(web::put().to(categories::update_category))
                            .route(web::delete().to(categories::delete_category)),
                    ),
            )
            .service(
                web::scope("/posts")
                    .service(
                        web::resource("")
                            .route(web::post().to(posts::create_post))
                            .route(web::get().to(posts::list_posts)),
                    )
                    .route("/page", web::get().to(posts::list_posts_paged))
                    .route(
                        "/category/{id}",
                        web::get().to(posts::list_posts_by_category),
                    )
                    .service(
                        web::scope("/{post_id}/comments")
                            .service(
                                web::resource("")
                                    .route(web::post().to(comments::create_comment))
                                    .route(web::get().to(comments::list_comments)),
                            )
                            .service(
                                web::resource("/{comment_id}")
                                    .route(web::get().to(comments::get_comment))
                                    .route(web::put().to(comments::update_comment))
                                    .route(web::delete().to(comments::delete_comment)),
                            ),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(posts::get_post))
                            .route(web::put().to(posts::update_post))
                            .route(web::delete().to(posts::delete_post)),
                    ),
            ),
    );
}
