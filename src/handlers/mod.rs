/// # Greeting Endpoint Handler
///
/// Produces the fixed-shape greeting payload for every inbound request.
/// The request itself is ignored entirely: method, path, headers, and body
/// play no part in the response.
///
/// ## Response
///
/// - **200 OK**: always
///   - Content-Type: `application/json`
///   - Body: [`GreetingResponse`] with `message`, `timestamp`, `language`
///
/// [`GreetingResponse`]: crate::models::greeting::GreetingResponse
pub mod greeting;
