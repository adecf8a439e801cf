/// Blog Service Library
///
/// CRUD and paginated-listing backend over posts, categories, and comments.
/// The core is the relationship and query layer: resolving Post→Category and
/// Comment→Post references, enforcing referential and validation invariants,
/// and producing consistent paginated, sorted views.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route configuration
/// - `dto` / `mapper` / `models`: wire shapes, explicit conversions, entities
/// - `services`: business logic layer
/// - `db`: repository traits, Postgres and in-memory implementations
/// - `validation`: per-DTO field constraint checks
/// - `middleware`: bearer-token extractors
/// - `error`: error types and HTTP translation
/// - `config`: configuration management
pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod middleware;
pub mod models;
pub mod services;
pub mod validation;

pub use config::Config;
pub use error::{AppError, Result};
