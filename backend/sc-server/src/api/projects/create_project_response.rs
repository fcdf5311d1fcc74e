use crate::ProjectDto;

use serde::Serialize;

/// Response to a successful submission
#[derive(Debug, Serialize)]
pub struct CreateProjectResponse {
    pub message: String,
    pub project: ProjectDto,
}
