use actix_web::web;

use crate::handlers::system;

mod projects;
mod health;
mod json_error;

/// Registers every route. The UI catch-all must stay last.
pub fn configure_routes(cfg: &mut web::ServiceConfig, json_limit: usize) {
    cfg.configure(|cfg| json_error::config_routes(cfg, json_limit));

    cfg.configure(health::config_routes);

    cfg.service(
        web::scope("/api")
            .configure(projects::config_routes)
            .default_service(web::to(system::frontend))
    );

    cfg.route("/{tail:.*}", web::get().to(system::frontend));
}
