/// Business logic layer
///
/// Domain services own all business rules: validation-first orchestration,
/// referential checks across entities, read-before-delete, and pagination
/// math. They never touch storage except through the injected repository
/// traits, and they never translate errors; that happens once at the HTTP
/// boundary.
pub mod categories;
pub mod comments;
pub mod posts;

pub use categories::CategoryService;
pub use comments::CommentService;
pub use posts::PostService;
