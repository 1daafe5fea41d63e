mod test_utils;

use reqwest::StatusCode;
use serde_json::Value;
use test_utils::*;

#[actix_rt::test]
async fn health_reports_database_status() {
    let app = TestApp::spawn().await;

    let response = app.client.get(app.url("/health")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "OK");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_rt::test]
async fn development_root_returns_a_banner() {
    let app = TestApp::spawn().await;

    let response = app.client.get(app.url("/")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["projects"], "/api/projects");
}

#[actix_rt::test]
async fn development_mode_does_not_serve_assets() {
    let app = TestApp::spawn().await;

    let response = app.client.get(app.url("/assets/app.js")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn unknown_api_routes_are_json_404s() {
    let app = TestApp::spawn().await;

    let response = app.client.get(app.url("/api/nothing-here")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("/api/nothing-here"));
}

#[actix_rt::test]
async fn production_serves_the_ui_shell_with_fallback() {
    let dist = std::env::temp_dir().join(format!("gallery-dist-{}", std::process::id()));
    std::fs::create_dir_all(dist.join("assets")).unwrap();
    std::fs::write(dist.join("index.html"), "<!doctype html><div id=root></div>").unwrap();
    std::fs::write(dist.join("assets/index.css"), "body{margin:0}").unwrap();
    std::fs::write(dist.join("assets/hero shot.svg"), "<svg id=hero/>").unwrap();

    let app = TestApp::spawn_production(&dist).await;

    let root = app.client.get(app.url("/")).send().await.unwrap();
    assert_eq!(root.status(), StatusCode::OK);
    assert!(root.headers()["content-type"].to_str().unwrap().starts_with("text/html"));
    assert!(root.text().await.unwrap().contains("id=root"));

    let css = app.client.get(app.url("/assets/index.css")).send().await.unwrap();
    assert!(css.headers()["content-type"].to_str().unwrap().starts_with("text/css"));

    let escaped = app.client.get(app.url("/assets/hero%20shot.svg")).send().await.unwrap();
    assert_eq!(escaped.status(), StatusCode::OK);
    assert!(escaped.headers()["content-type"].to_str().unwrap().starts_with("image/svg+xml"));
    assert_eq!(escaped.text().await.unwrap(), "<svg id=hero/>");

    let deep_link = app.client.get(app.url("/projects/7")).send().await.unwrap();
    assert_eq!(deep_link.status(), StatusCode::OK);
    assert!(deep_link.text().await.unwrap().contains("id=root"));

    let api = app.client.get(app.url("/api/projects")).send().await.unwrap();
    assert_eq!(api.status(), StatusCode::OK);
    assert!(api.headers()["content-type"].to_str().unwrap().starts_with("application/json"));

    std::fs::remove_dir_all(&dist).unwrap();
}
