#[cfg(test)]
mod additional_coverage_tests {
    use crate::models::GreetingResponse;
    use crate::routes;
    use actix_web::{App, HttpServer};

    #[actix_web::test]
    async fn test_bind_failure_on_occupied_port() {
        // Hold an ephemeral port so the server's bind has to fail
        let occupied = std::net::TcpListener::bind(("127.0.0.1", 0)).unwrap();
        let port = occupied.local_addr().unwrap().port();

        let result = HttpServer::new(|| App::new().configure(routes::configure))
            .bind(("127.0.0.1", port));

        assert!(
            result.is_err(),
            "Binding an occupied port should fail with an I/O error"
        );
    }

    #[test]
    fn test_serialized_key_order() {
        let response = GreetingResponse::now();
        let json = serde_json::to_string(&response).unwrap();

        // Keys serialize in declaration order: message, timestamp, language
        let message_pos = json.find("\"message\"").unwrap();
        let timestamp_pos = json.find("\"timestamp\"").unwrap();
        let language_pos = json.find("\"language\"").unwrap();

        assert!(message_pos < timestamp_pos);
        assert!(timestamp_pos < language_pos);
    }

    #[test]
    fn test_serialized_key_set() {
        let response = GreetingResponse::now();
        let json = serde_json::to_value(&response).unwrap();
        let object = json.as_object().unwrap();

        // Exactly the three contract fields, nothing else
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("message"));
        assert!(object.contains_key("timestamp"));
        assert!(object.contains_key("language"));
    }

    #[test]
    fn test_constants_stable_across_constructions() {
        let first = GreetingResponse::now();
        let second = GreetingResponse::now();

        assert_eq!(first.message, second.message);
        assert_eq!(first.language, second.language);
        assert!(second.timestamp >= first.timestamp);
    }
}
