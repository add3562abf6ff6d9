use crate::handlers::greeting::greet;
use actix_web::web;

/// # Route Configuration
///
/// Registers the greeting handler as the default service. `web::to` accepts
/// any method, and the default service catches any path, so the whole
/// request space maps to the one handler.
///
/// ## Currently Configured Routes
///
/// - `* *`: greeting endpoint (catch-all)
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::to(greet));
}
