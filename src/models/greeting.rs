use chrono::Utc;
use serde::{Deserialize, Serialize};

/// # Greeting Response
///
/// The single payload the service produces. Built fresh on every request,
/// serialized once, and discarded; never stored or mutated.
///
/// ## Fields
/// - `message`: fixed greeting string, identical across all responses
/// - `timestamp`: floating-point seconds since the Unix epoch, sampled at
///   construction time with nanosecond-derived sub-second precision
/// - `language`: fixed label identifying the backend this service stands in
///   for
///
/// ## Serialization
/// Field declaration order fixes the JSON key order: `message`, `timestamp`,
/// `language`.
#[derive(Serialize, Debug, PartialEq, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
    pub timestamp: f64,
    pub language: String,
}

impl GreetingResponse {
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            message: "Hello from Golang API!".to_string(),
            timestamp: now.timestamp() as f64
                + f64::from(now.timestamp_subsec_nanos()) / 1e9,
            language: "Golang".to_string(),
        }
    }
}
