use actix_cors::Cors;
use actix_web::http::{header, Method};

use crate::settings::AppConfig;

/// CORS policy for the API. A `*` entry opens it to any origin, which is what
/// a UI dev server on another port needs.
pub fn build_cors(config: &AppConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    if config.allows_any_origin() {
        return cors.allow_any_origin();
    }

    config
        .cors_origins()
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
