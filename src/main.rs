use actix_web::{App, HttpServer};

/// Greeting Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with a single
/// catch-all greeting endpoint: every request, regardless of method or
/// path, receives the same JSON greeting payload.
///
/// # Endpoints
/// - Greeting: every path and method (configured in routes)
///
/// # Configuration
/// - Server binds to `0.0.0.0:8003` (hardcoded, no overrides)
/// - A line announcing the port is printed to stdout on startup
///
/// # Errors
/// The only failure is the listener failing to bind the port. The error
/// propagates out of `main`, is printed to stderr, and the process exits
/// non-zero. No retry, no fallback port.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let port = 8003;
    println!("Starting Golang API on port {port}...");

    HttpServer::new(|| App::new().configure(greeting_api::routes::configure))
        .bind(("0.0.0.0", port))?
        .run()
        .await
}
