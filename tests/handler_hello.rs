use axum::{Router, routing::get};
use axum_test::TestServer;
use url_shortener_microservice::api::handlers::hello_handler;

#[tokio::test]
async fn test_hello_greeting() {
    let app = Router::new().route("/api/hello", get(hello_handler));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/hello").await;

    response.assert_status_ok();
    response.assert_json(&serde_json::json!({ "greeting": "hello API" }));
}
