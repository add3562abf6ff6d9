use actix_web::web;

/// # API Route Configuration
///
/// Registers the greeting handler as the application's default service,
/// so every path and every method reaches it. There is no other routing:
/// unmatched paths do not exist and nothing returns 404.
///
/// ## Example Endpoints
///
/// ```text
/// GET /                      - greeting payload
/// POST /anything/nested/path - same greeting payload
/// ```
///
/// See [`greeting::configure_routes`] for the registration itself.
///
/// [`greeting::configure_routes`]: crate::routes::greeting::configure_routes
pub mod greeting;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(greeting::configure_routes);
}
