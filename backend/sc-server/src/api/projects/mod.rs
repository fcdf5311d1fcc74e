pub mod create_project_request;
pub mod create_project_response;
pub mod project_dto;
pub mod project_input;
#[allow(clippy::module_inception)]
pub mod projects;
pub mod submission_form;
