mod common;

use http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{json_request, parse_body, request, TestServer};

#[tokio::test]
async fn test_create_card_returns_entity() {
    let server = TestServer::new().await;
    let response = server
        .router()
        .oneshot(json_request(
            Method::POST,
            "/api/cards",
            &json!({
                "title": "Sunset",
                "description": "over the bay",
                "image": "https://res.cloudinary.com/demo/image/upload/sunset.jpg"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_body(response).await;
    assert_eq!(body["title"], "Sunset");
    assert_eq!(body["description"], "over the bay");
    assert_eq!(
        body["image"],
        "https://res.cloudinary.com/demo/image/upload/sunset.jpg"
    );
    assert!(body["id"].is_string());
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());
}

#[tokio::test]
async fn test_create_card_trims_fields() {
    let server = TestServer::new().await;
    let response = server
        .router()
        .oneshot(json_request(
            Method::POST,
            "/api/cards",
            &json!({ "title": "  Sunset  ", "description": " x ", "image": " http://img " }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_body(response).await;
    assert_eq!(body["title"], "Sunset");
    assert_eq!(body["description"], "x");
    assert_eq!(body["image"], "http://img");
}

#[tokio::test]
async fn test_create_card_description_defaults_to_empty() {
    let server = TestServer::new().await;
    let response = server
        .router()
        .oneshot(json_request(
            Method::POST,
            "/api/cards",
            &json!({ "title": "Sunset", "image": "http://img" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_body(response).await;
    assert_eq!(body["description"], "");
}

#[tokio::test]
async fn test_create_card_blank_title_rejected_before_write() {
    let server = TestServer::new().await;
    let response = server
        .router()
        .oneshot(json_request(
            Method::POST,
            "/api/cards",
            &json!({ "title": "", "image": "http://x" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(response).await;
    assert_eq!(body["error"], "title and image are required");
    assert_eq!(server.count_cards().await, 0);
}

#[tokio::test]
async fn test_create_card_whitespace_title_rejected() {
    let server = TestServer::new().await;
    let response = server
        .router()
        .oneshot(json_request(
            Method::POST,
            "/api/cards",
            &json!({ "title": "   ", "image": "http://x" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(server.count_cards().await, 0);
}

#[tokio::test]
async fn test_create_card_missing_image_rejected() {
    let server = TestServer::new().await;
    let response = server
        .router()
        .oneshot(json_request(
            Method::POST,
            "/api/cards",
            &json!({ "title": "Sunset" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(server.count_cards().await, 0);
}

#[tokio::test]
async fn test_create_card_malformed_json_rejected() {
    let server = TestServer::new().await;
    let response = server
        .router()
        .oneshot(
            http::Request::builder()
                .method(Method::POST)
                .uri("/api/cards")
                .header("Content-Type", "application/json")
                .body(axum::body::Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert_eq!(server.count_cards().await, 0);
}

#[tokio::test]
async fn test_list_cards_newest_first() {
    let server = TestServer::new().await;
    server.create_card("first", "http://1").await;
    server.create_card("second", "http://2").await;
    server.create_card("third", "http://3").await;

    let response = server
        .router()
        .oneshot(request(Method::GET, "/api/cards"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_list_cards_empty() {
    let server = TestServer::new().await;
    let response = server
        .router()
        .oneshot(request(Method::GET, "/api/cards"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_delete_card_removes_record() {
    let server = TestServer::new().await;
    let id = server.create_card("doomed", "http://x").await;

    let response = server
        .router()
        .oneshot(json_request(
            Method::DELETE,
            "/api/cards",
            &json!({ "id": id }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["message"], "Deleted");
    assert_eq!(server.count_cards().await, 0);
}

#[tokio::test]
async fn test_delete_card_unknown_id_still_reports_success() {
    let server = TestServer::new().await;
    let response = server
        .router()
        .oneshot(json_request(
            Method::DELETE,
            "/api/cards",
            &json!({ "id": "999999" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["message"], "Deleted");
}

#[tokio::test]
async fn test_delete_card_blank_id_rejected() {
    let server = TestServer::new().await;
    let response = server
        .router()
        .oneshot(json_request(Method::DELETE, "/api/cards", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(response).await;
    assert_eq!(body["error"], "id is required");
}

#[tokio::test]
async fn test_delete_card_leaves_others_intact() {
    let server = TestServer::new().await;
    let id = server.create_card("doomed", "http://1").await;
    server.create_card("survivor", "http://2").await;

    server
        .router()
        .oneshot(json_request(
            Method::DELETE,
            "/api/cards",
            &json!({ "id": id }),
        ))
        .await
        .unwrap();

    let response = server
        .router()
        .oneshot(request(Method::GET, "/api/cards"))
        .await
        .unwrap();
    let body = parse_body(response).await;
    let cards = body.as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["title"], "survivor");
}
