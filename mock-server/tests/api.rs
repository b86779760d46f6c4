use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, canned, seed, MarsProperty};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- list ---

#[tokio::test]
async fn list_properties_returns_seed_in_order() {
    let resp = app().oneshot(get("/realestate")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let properties: Vec<MarsProperty> = body_json(resp).await;
    assert_eq!(properties, seed());
}

#[tokio::test]
async fn list_properties_empty_catalog() {
    let resp = app_with(Vec::new()).oneshot(get("/realestate")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"[]");
}

#[tokio::test]
async fn list_properties_sets_json_content_type() {
    let resp = app().oneshot(get("/realestate")).await.unwrap();

    let content_type = resp.headers()[axum::http::header::CONTENT_TYPE].to_str().unwrap();
    assert_eq!(content_type, "application/json");
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let resp = app().oneshot(get("/listings")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_is_not_allowed() {
    let req = Request::builder()
        .method("POST")
        .uri("/realestate")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- canned ---

#[tokio::test]
async fn canned_serves_status_and_raw_body() {
    let resp = canned(StatusCode::INTERNAL_SERVER_ERROR, "boom")
        .oneshot(get("/realestate"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"boom");
}

#[tokio::test]
async fn canned_passes_malformed_body_through() {
    let resp = canned(StatusCode::OK, "[{\"id\":")
        .oneshot(get("/realestate"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert!(serde_json::from_slice::<serde_json::Value>(&body).is_err());
}
