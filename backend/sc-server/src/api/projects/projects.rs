//! Project REST API handlers
//!
//! Two creation flows feed the same record shape:
//! - `POST /api/projects/upload`: authenticated JSON carrying two
//!   pre-encoded images, recorded against the caller's account;
//! - `POST /api/projects`: anonymous multipart carrying one or two raw
//!   images, which are pushed to the image host first.
//!
//! Every input check (image count, contributor decoding, length limits)
//! runs before the first side effect.

use crate::api::projects::project_input::non_blank;
use crate::{
    ApiError, ApiResult, AppState, AuthenticatedUser, CreateProjectRequest, CreateProjectResponse,
    DeleteResponse, ProjectDto, ProjectInput, SubmissionForm,
};

use sc_auth::can_delete;
use sc_core::{Contributors, Uploader};
use sc_db::{ProjectRepository, UserRepository};
use sc_media::ImageIngestion;

use axum::{
    Json,
    extract::{Multipart, Path, State, multipart::MultipartRejection, rejection::JsonRejection},
    http::StatusCode,
};
use log::{info, warn};
use uuid::Uuid;

const PROJECT_NOT_FOUND: &str = "Project not found";

/// Ids that are not UUIDs can never match a record.
fn parse_project_id(id: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ApiError::not_found(PROJECT_NOT_FOUND))
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/projects/upload
///
/// Create a project from JSON with two pre-encoded images
pub async fn upload_project(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreateProjectResponse>)> {
    let Json(request) = payload?;

    let images = ImageIngestion::pass_through(request.images.unwrap_or_default())?;

    let input = ProjectInput {
        title: request.title,
        description: request.description,
        external_link: non_blank(request.google_form_link),
        contributors: Contributors::from_field(request.contributors)?,
    };
    input.validate(&state.validation)?;

    UserRepository::new(state.pool.clone())
        .upsert(&identity.profile())
        .await?;

    let record = ProjectRepository::new(state.pool.clone())
        .create(input.into_new_project(images, Uploader::account(&identity.id)))
        .await?;

    info!("Project {} created by account {}", record.id, identity.id);

    Ok((
        StatusCode::CREATED,
        Json(CreateProjectResponse {
            message: "Upload successful".to_string(),
            project: record.into(),
        }),
    ))
}

/// POST /api/projects
///
/// Create a project from an anonymous multipart form with raw images
pub async fn submit_project(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<(StatusCode, Json<CreateProjectResponse>)> {
    let mut multipart = multipart?;
    let form = SubmissionForm::read(&mut multipart).await?;

    ImageIngestion::check_batch_size(form.images.len())?;

    let input = ProjectInput {
        title: form.title,
        description: form.description,
        external_link: non_blank(form.google_form_link),
        contributors: Contributors::decode(form.contributors.as_deref().unwrap_or_default())?,
    };
    input.validate(&state.validation)?;

    let uploader = Uploader::Submitted {
        uploaded_by: non_blank(form.uploaded_by),
        name: non_blank(form.uploaded_by_name),
        email: non_blank(form.uploaded_by_email),
    };

    let batch = state.ingestion.upload_all(form.images).await?;

    let created = ProjectRepository::new(state.pool.clone())
        .create(input.into_new_project(batch.urls(), uploader))
        .await;

    let record = match created {
        Ok(record) => record,
        Err(e) => {
            warn!(
                "Persisting submission failed, rolling back {} uploaded image(s)",
                batch.len()
            );
            state.ingestion.rollback(&batch).await;
            return Err(e.into());
        }
    };

    info!(
        "Project {} submitted with {} image(s)",
        record.id,
        record.images.len()
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateProjectResponse {
            message: "Project uploaded successfully".to_string(),
            project: record.into(),
        }),
    ))
}

/// GET /api/projects
///
/// List all projects, newest first
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectDto>>> {
    let repo = ProjectRepository::new(state.pool.clone());
    let projects = repo.find_all().await?;

    Ok(Json(projects.into_iter().map(ProjectDto::from).collect()))
}

/// GET /api/projects/{id}
///
/// Get a single project with its uploader expanded
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectDto>> {
    let project_id = parse_project_id(&id)?;

    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo
        .find_by_id_expanded(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(PROJECT_NOT_FOUND))?;

    Ok(Json(project.into()))
}

/// DELETE /api/projects/{id}
///
/// Permanently delete a project. Only its uploader or an admin may do so.
pub async fn delete_project(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let project_id = parse_project_id(&id)?;

    let repo = ProjectRepository::new(state.pool.clone());
    let record = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(PROJECT_NOT_FOUND))?;

    if !can_delete(&identity, &record) {
        return Err(ApiError::forbidden(
            "You are not authorized to delete this project",
        ));
    }

    // A concurrent delete may have won the race
    if !repo.delete(project_id).await? {
        return Err(ApiError::not_found(PROJECT_NOT_FOUND));
    }

    info!("Project {} deleted by {}", project_id, identity.id);

    Ok(Json(DeleteResponse {
        message: "Project deleted successfully".to_string(),
    }))
}
