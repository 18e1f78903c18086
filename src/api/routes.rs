// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health_check))
            .route("/GA", web::post().to(handlers::solve_genetic))
            .route("/SA", web::post().to(handlers::solve_annealing)),
    );
}
