use async_trait::async_trait;

use crate::{
    entities::project::{NewProject, Project, UpdateProject},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

/// Storage contract for portfolio projects.
///
/// `update_project` and `delete_project` report how many rows they touched
/// but never treat zero as an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn initialize(&self) -> Result<(), AppError>;
    async fn check_connection(&self) -> Result<(), AppError>;
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn get_project_by_id(&self, id: i64) -> Result<Option<Project>, AppError>;
    async fn insert_project(&self, project: &NewProject) -> Result<i64, AppError>;
    async fn update_project(&self, id: i64, project: &UpdateProject) -> Result<u64, AppError>;
    async fn delete_project(&self, id: i64) -> Result<u64, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn initialize(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await?;

        Ok(())
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        // createdAt only has second resolution; id breaks ties in insert order
        let projects = sqlx::query_as::<_, Project>(
            "SELECT * FROM projects ORDER BY createdAt DESC, id DESC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn get_project_by_id(&self, id: i64) -> Result<Option<Project>, AppError> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn insert_project(&self, project: &NewProject) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO projects (title, description, imageUrl, category)
            VALUES (?, ?, ?, ?)
            "#
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_url)
        .bind(&project.category)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update_project(&self, id: i64, project: &UpdateProject) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET title = ?, description = ?, category = ?
            WHERE id = ?
            "#
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.category)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_project(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
