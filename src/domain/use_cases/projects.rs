use tracing::debug;

use crate::{
    entities::project::{NewProject, Project, SuccessResponse, UpdateProject},
    errors::AppError,
    repositories::project::ProjectRepository,
    utils::valid_id::{parse_project_id, valid_project_id},
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Every project, newest first
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects().await
    }

    pub async fn get_project(&self, id: &str) -> Result<Project, AppError> {
        let id = valid_project_id(id)?;

        self.project_repo
            .get_project_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))
    }

    /// Inserts the project and returns the row exactly as the store holds it,
    /// including the assigned `id` and `createdAt`.
    pub async fn create_project(&self, request: NewProject) -> Result<Project, AppError> {
        let id = self.project_repo.insert_project(&request).await?;

        self.project_repo
            .get_project_by_id(id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Project {} vanished after insert", id)))
    }

    /// Overwrites title, description and category. An unknown id is not an
    /// error, and neither is one that could never name a row.
    pub async fn update_project(
        &self,
        id: &str,
        request: UpdateProject,
    ) -> Result<SuccessResponse, AppError> {
        let Some(id) = parse_project_id(id) else {
            debug!(raw_id = id, "Update skipped for a non-integer id");
            return Ok(SuccessResponse::ok());
        };

        let affected = self.project_repo.update_project(id, &request).await?;
        if affected == 0 {
            debug!(project_id = id, "Update matched no project");
        }

        Ok(SuccessResponse::ok())
    }

    /// Hard delete. An unknown id is not an error.
    pub async fn delete_project(&self, id: &str) -> Result<SuccessResponse, AppError> {
        let Some(id) = parse_project_id(id) else {
            debug!(raw_id = id, "Delete skipped for a non-integer id");
            return Ok(SuccessResponse::ok());
        };

        let affected = self.project_repo.delete_project(id).await?;
        if affected == 0 {
            debug!(project_id = id, "Delete matched no project");
        }

        Ok(SuccessResponse::ok())
    }
}
