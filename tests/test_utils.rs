#![allow(dead_code)]

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use async_trait::async_trait;
use portfolio_gallery::{
    entities::project::{NewProject, Project},
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment},
    web::cors::build_cors,
    AppState,
};
use reqwest::Client;
use serde_json::Value;
use sqlx::SqlitePool;
use std::{net::TcpListener, path::Path, sync::Arc, time::Duration};

pub struct TestApp {
    pub state: Arc<AppState>,
    pub address: String,
    pub client: Client,
    pub config: AppConfig,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(test_config()).await
    }

    /// Production mode serving the UI bundle found in `static_dir`.
    pub async fn spawn_production(static_dir: &Path) -> Self {
        let config = AppConfig {
            env: AppEnvironment::Production,
            static_dir: static_dir.to_string_lossy().into_owned(),
            ..test_config()
        };
        Self::spawn_with(config).await
    }

    pub async fn spawn_with(config: AppConfig) -> Self {
        let state = Arc::new(
            AppState::bootstrap(&config)
                .await
                .expect("Failed to bootstrap test state")
        );

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let state_clone = state.clone();
        let server_config = config.clone();
        let json_limit = config.json_limit_bytes;
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::from(state_clone.clone()))
                .wrap(build_cors(&server_config))
                .wrap(NormalizePath::trim())
                .configure(|cfg| configure_routes(cfg, json_limit))
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(config.worker_count)
        .run();

        tokio::spawn(server);

        let client = Client::new();
        while client.get(format!("{}/health", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            state,
            address,
            client,
            config,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.state.project_handler.project_repo.pool
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Portfolio Gallery Test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        worker_count: 1,
        database_url: "sqlite::memory:".into(),
        db_max_connections: 1,
        json_limit_bytes: 1024 * 1024,
        static_dir: "dist".into(),
        cors_allowed_origins: vec!["*".to_string()],
    }
}

pub fn sample_project(title: &str) -> NewProject {
    NewProject::new(
        title,
        format!("{} description", title),
        "data:image/png;base64,iVBORw0KGgo=",
        "Photography",
    )
}

#[async_trait]
pub trait ProjectTestHelpers: Send + Sync {
    async fn create_project(&self, project: &NewProject) -> reqwest::Response;
    async fn create_project_ok(&self, project: &NewProject) -> Project;
    async fn list_projects(&self) -> Vec<Project>;
    async fn update_project(&self, id: &str, body: &Value) -> reqwest::Response;
    async fn delete_project(&self, id: &str) -> reqwest::Response;
    async fn count_projects(&self) -> i64;
}

#[async_trait]
impl ProjectTestHelpers for TestApp {
    async fn create_project(&self, project: &NewProject) -> reqwest::Response {
        self.client
            .post(self.url("/api/projects"))
            .json(project)
            .send()
            .await
            .expect("Failed to create project")
    }

    async fn create_project_ok(&self, project: &NewProject) -> Project {
        let response = self.create_project(project).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json().await.expect("Created project was not valid JSON")
    }

    async fn list_projects(&self) -> Vec<Project> {
        self.client
            .get(self.url("/api/projects"))
            .send()
            .await
            .expect("Failed to list projects")
            .json()
            .await
            .expect("Project list was not valid JSON")
    }

    async fn update_project(&self, id: &str, body: &Value) -> reqwest::Response {
        self.client
            .put(self.url(&format!("/api/projects/{}", id)))
            .json(body)
            .send()
            .await
            .expect("Failed to update project")
    }

    async fn delete_project(&self, id: &str) -> reqwest::Response {
        self.client
            .delete(self.url(&format!("/api/projects/{}", id)))
            .send()
            .await
            .expect("Failed to delete project")
    }

    async fn count_projects(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(self.pool())
            .await
            .expect("Failed to count projects")
    }
}
