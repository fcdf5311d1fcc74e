pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_user::AuthenticatedUser,
    projects::{
        create_project_request::CreateProjectRequest,
        create_project_response::CreateProjectResponse,
        project_dto::{ProjectDto, UploaderDto},
        project_input::ProjectInput,
        projects::{delete_project, get_project, list_projects, submit_project, upload_project},
        submission_form::SubmissionForm,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
