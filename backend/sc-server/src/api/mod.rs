pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod projects;
