use actix_web::{web, HttpRequest, HttpResponse, Responder};
use humantime::format_duration;
use once_cell::sync::Lazy;
use chrono::Utc;
use std::{sync::RwLock, time::Duration};
use sysinfo::System;
use serde::Serialize;
use crate::{constants::{uptime, START_TIME}, errors::AppError, repositories::project::ProjectRepository, AppState};

const CACHE_TTL_SECS: i64 = 5;

#[derive(Serialize, Clone)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    database: String,
    version: String,
    memory_usage: String,
}

/// Last health report and the unix second it was taken at.
static HEALTH_CACHE: Lazy<RwLock<Option<(i64, HealthCheckResponse)>>> = Lazy::new(|| RwLock::new(None));

async fn build_health_response(state: &web::Data<AppState>) -> HealthCheckResponse {
    let now_utc = Utc::now();
    let human_uptime = format_duration(Duration::from_secs(uptime().as_secs()));

    let (status, db_status) = match state.project_handler.project_repo.check_connection().await {
        Ok(_) => ("healthy", "OK"),
        Err(e) => {
            tracing::warn!("Health check could not reach the database: {}", e);
            ("degraded", "Unavailable")
        }
    };

    let mut sys = System::new();
    let pid = sysinfo::get_current_pid().ok();
    if let Some(pid) = pid {
        sys.refresh_processes(sysinfo::ProcessesToUpdate::Some(&[pid]), true);
    }
    let memory_usage = pid
        .and_then(|pid| sys.process(pid))
        .map_or("Unknown".to_string(), |p| format!("{:.2} MB", p.memory() as f64 / 1024.0 / 1024.0));

    HealthCheckResponse {
        status: status.to_string(),
        uptime: human_uptime.to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        memory_usage,
        database: db_status.to_string(),
    }
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now = Utc::now().timestamp();

    let cached = match HEALTH_CACHE.read() {
        Ok(guard) => guard
            .as_ref()
            .filter(|(taken_at, _)| now - taken_at <= CACHE_TTL_SECS)
            .map(|(_, report)| report.clone()),
        Err(e) => {
            tracing::warn!("Health cache lock poisoned: {}", e);
            None
        }
    };

    let report = match cached {
        Some(report) => report,
        None => {
            let report = build_health_response(&state).await;
            if let Ok(mut guard) = HEALTH_CACHE.write() {
                *guard = Some((now, report.clone()));
            }
            report
        }
    };

    HttpResponse::Ok().json(report)
}

/// Catch-all for everything outside the API.
///
/// Production serves the built UI, falling back to `index.html`. Development
/// answers `/` with a short banner; the UI is expected to run on its own dev
/// server and reach the API over CORS.
pub async fn frontend(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let path = req.path();

    if path == "/api" || path.starts_with("/api/") {
        return Err(AppError::NotFound(format!("No API route for {} {}", req.method(), path)));
    }

    match &state.static_assets {
        Some(assets) => {
            let asset = assets.load(path).await.map_err(|e| {
                AppError::InternalError(format!("UI bundle unavailable under {}: {}", assets.root().display(), e))
            })?;

            Ok(asset.into_response(&req))
        }
        None if path == "/" => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Portfolio gallery API",
            "status": "Ok",
            "version": env!("CARGO_PKG_VERSION"),
            "projects": "/api/projects"
        }))),
        None => Err(AppError::NotFound(format!("No route for {}", path))),
    }
}
