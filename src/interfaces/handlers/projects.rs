use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::project::{NewProject, UpdateProject}, errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn get_all_projects(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.list_projects().await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_project_by_id(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.get_project(&project_id).await?;

    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(state, data), fields(title = ?data.title))]
pub async fn create_project(
    state: web::Data<AppState>,
    data: web::Json<NewProject>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler
        .create_project(data.into_inner())
        .await?;

    tracing::info!(project_id = project.id, "Project created");
    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(state, data))]
pub async fn update_project(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateProject>,
) -> Result<impl Responder, AppError> {
    let response = state.project_handler
        .update_project(&project_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(state))]
pub async fn delete_project(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let response = state.project_handler.delete_project(&project_id).await?;

    Ok(HttpResponse::Ok().json(response))
}
