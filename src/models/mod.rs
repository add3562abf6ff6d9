/// # Greeting Response Model
///
/// Represents the fixed-shape payload returned for every request.
/// Constructed fresh per request with a wall-clock timestamp.
///
/// ## Example JSON
/// ```json
/// {
///   "message": "Hello from Golang API!",
///   "timestamp": 1700000000.123456789,
///   "language": "Golang"
/// }
/// ```
pub mod greeting;

pub use greeting::GreetingResponse;
