mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod telemetry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, utils, web};

use anyhow::Context;
use repositories::{project::ProjectRepository, sqlx_repo::SqlxProjectRepo};
use use_cases::projects::ProjectHandler;
use web::static_files::StaticAssets;

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub static_assets: Option<StaticAssets>,
}

pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::SqlitePool) -> Self {
        let project_repo = SqlxProjectRepo::new(pool);
        let project_handler = ProjectHandler::new(project_repo);

        let static_assets = config
            .is_production()
            .then(|| StaticAssets::new(&config.static_dir));

        AppState {
            project_handler,
            static_assets,
        }
    }

    /// Opens the database, brings the schema up to date and wires the state.
    pub async fn bootstrap(config: &settings::AppConfig) -> anyhow::Result<Self> {
        let pool = db::sqlite::create_pool(&config.database_url, config.db_max_connections)
            .await
            .with_context(|| format!("Failed to open database at {}", config.database_url))?;

        let state = AppState::new(config, pool);

        state.project_handler.project_repo
            .initialize()
            .await
            .context("Failed to initialize the projects schema")?;

        Ok(state)
    }
}
