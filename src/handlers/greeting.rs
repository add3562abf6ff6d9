use crate::models::greeting::GreetingResponse;
use actix_web::{HttpResponse, Responder};

/// # Greeting Endpoint
///
/// Returns the greeting payload with a timestamp sampled at handling time.
/// The handler is a pure stateless function of "now": no aspect of the
/// request influences the response, and there are no failure branches.
///
/// ## Response
///
/// - **200 OK**: always
///   - Content-Type: `application/json`
///   - Body: [`GreetingResponse`]
///
/// ## Example Response
/// ```json
/// {
///   "message": "Hello from Golang API!",
///   "timestamp": 1700000000.123456789,
///   "language": "Golang"
/// }
/// ```
///
/// [`GreetingResponse`]: crate::models::greeting::GreetingResponse
pub async fn greet() -> impl Responder {
    HttpResponse::Ok().json(GreetingResponse::now())
}
