//! Integration Tests for API Endpoints
//!
//! Drives the full router against a mock Dog API.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use breed_viewer::{api::create_router, AppState, DogApiClient, RetryPolicy};
use httpmock::MockServer;
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

const BREEDS_BODY: &str = r#"{"status":"success","message":{"affenpinscher":[],"hound":["afghan","basset"],"pug":[]}}"#;

fn create_test_app(server: &MockServer) -> Router {
    let retry = RetryPolicy::new(3, Duration::from_millis(1), Duration::from_millis(1));
    let client = DogApiClient::with_base_url(server.base_url(), retry).unwrap();
    create_router(AppState::new(client))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn mock_breeds(server: &MockServer) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method("GET").path("/breeds/list/all");
            then.status(200)
                .header("content-type", "application/json")
                .body(BREEDS_BODY);
        })
        .await
}

// == Breeds Endpoint Tests ==

#[tokio::test]
async fn test_breeds_endpoint_flattens_sub_breeds() {
    let server = MockServer::start_async().await;
    let mock = mock_breeds(&server).await;
    let app = create_test_app(&server);

    let (status, json) = get(&app, "/breeds").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 5);
    assert_eq!(
        json["breeds"],
        serde_json::json!(["affenpinscher", "hound", "afghan hound", "basset hound", "pug"])
    );
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_breeds_endpoint_second_call_is_cached() {
    let server = MockServer::start_async().await;
    let mock = mock_breeds(&server).await;
    let app = create_test_app(&server);

    let (_, first) = get(&app, "/breeds").await;
    let (_, second) = get(&app, "/breeds?search=hound").await;

    assert_eq!(first["count"], 5);
    assert_eq!(second["breeds"], serde_json::json!(["hound", "afghan hound", "basset hound"]));
    // Filtering happens on cached data, not a new request
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_breeds_endpoint_upstream_down() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("GET").path("/breeds/list/all");
            then.status(500);
        })
        .await;
    let app = create_test_app(&server);

    let (status, json) = get(&app, "/breeds").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(json["error"].as_str().unwrap().contains("500"));
    mock.assert_calls_async(3).await;
}

#[tokio::test]
async fn test_breeds_endpoint_rate_limited() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method("GET").path("/breeds/list/all");
            then.status(429);
        })
        .await;
    let app = create_test_app(&server);

    let (status, _) = get(&app, "/breeds").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

// == Images Endpoint Tests ==

#[tokio::test]
async fn test_images_endpoint_sub_breed() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("GET").path("/breed/hound/basset/images/random/3");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"status":"success","message":["https://images.dog.ceo/breeds/hound-basset/1.jpg","https://images.dog.ceo/breeds/hound-basset/2.jpg","https://images.dog.ceo/breeds/hound-basset/3.jpg"]}"#);
        })
        .await;
    let app = create_test_app(&server);

    let (status, json) = get(&app, "/breeds/basset%20hound/images").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["breed"], "basset hound");
    assert_eq!(json["images"].as_array().unwrap().len(), 3);
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_images_endpoint_unknown_breed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method("GET").path("/breed/unicorn/images/random/3");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"status":"error","message":"Breed not found (main breed does not exist)"}"#);
        })
        .await;
    let app = create_test_app(&server);

    let (status, json) = get(&app, "/breeds/unicorn/images").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("unicorn"));
    assert!(error.contains("Breed not found"));
}

#[tokio::test]
async fn test_images_endpoint_rejects_query_in_breed() {
    let server = MockServer::start_async().await;
    let upstream = server
        .mock_async(|when, then| {
            when.method("GET");
            then.status(200);
        })
        .await;
    let app = create_test_app(&server);

    let (status, json) = get(&app, "/breeds/hound%3Fx=1%23/images").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("hound?x=1#"));
    upstream.assert_calls_async(0).await;
}

// == Cache Endpoint Tests ==

#[tokio::test]
async fn test_cache_stats_and_clear() {
    let server = MockServer::start_async().await;
    let mock = mock_breeds(&server).await;
    let app = create_test_app(&server);

    get(&app, "/breeds").await;

    let (status, stats) = get(&app, "/cache/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["size"], 1);
    let expected_key = format!("api_{}/breeds/list/all", server.base_url());
    assert_eq!(stats["keys"][0], expected_key.as_str());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cache")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (_, stats) = get(&app, "/cache/stats").await;
    assert_eq!(stats["size"], 0);
    assert_eq!(stats["keys"], serde_json::json!([]));

    // Cleared cache means the next lookup goes upstream again
    get(&app, "/breeds").await;
    mock.assert_calls_async(2).await;
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let server = MockServer::start_async().await;
    let app = create_test_app(&server);

    let (status, json) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}
