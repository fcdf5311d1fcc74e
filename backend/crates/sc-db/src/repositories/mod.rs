pub mod project_repository;
pub mod user_repository;
