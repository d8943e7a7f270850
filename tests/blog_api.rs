//! Blog API Integration Tests
//!
//! End-to-end tests driving the full router: CRUD flow, token gating,
//! id-shape signals, and the owner-list behavior on deletion.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use bloglist::http_server::{HttpServer, ServerConfig};

// =============================================================================
// Helper Functions
// =============================================================================

fn test_config() -> ServerConfig {
    serde_json::from_str(
        r#"{
            "jwt": {"secret": "test_secret_key_for_testing_only"},
            "users": [
                {"username": "root", "name": "Superuser", "password": "sekret"},
                {"username": "mluukkai", "name": "Matti Luukkainen", "password": "salainen"}
            ]
        }"#,
    )
    .unwrap()
}

fn test_app() -> Router {
    HttpServer::with_config(test_config()).router()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: &Value,
) -> axum::response::Response {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

async fn delete(app: &Router, uri: &str, token: Option<&str>) -> axum::response::Response {
    let mut builder = Request::builder().method("DELETE").uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn login(app: &Router, username: &str, password: &str) -> String {
    let response = send_json(
        app,
        "POST",
        "/api/login",
        None,
        &json!({"username": username, "password": password}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["token"].as_str().unwrap().to_string()
}

async fn blogs_in_store(app: &Router) -> Vec<Value> {
    let response = get(app, "/api/blogs").await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await.as_array().unwrap().clone()
}

/// App with the root user's token and two seeded blogs, mirroring a store
/// with initial content
async fn app_with_blogs() -> (Router, String, Vec<Value>) {
    let app = test_app();
    let token = login(&app, "root", "sekret").await;

    let initial = [
        json!({
            "title": "High-Profile Company Data Breaches 2023",
            "author": "Jessica Farrelly",
            "url": "https://www.electric.ai/blog/recent-big-company-data-breaches",
            "likes": 1
        }),
        json!({
            "title": "First class tests",
            "author": "Robert C. Martin",
            "url": "http://blog.cleancoder.com/uncle-bob/2017/05/05/TestDefinitions.html",
            "likes": 10
        }),
    ];

    let mut created = Vec::new();
    for blog in &initial {
        let response = send_json(&app, "POST", "/api/blogs", Some(&token), blog).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        created.push(body_json(response).await);
    }

    (app, token, created)
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn blogs_are_returned_as_json() {
    let (app, _, _) = app_with_blogs().await;

    let response = get(&app, "/api/blogs").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("application/json"));
}

#[tokio::test]
async fn all_blogs_are_returned() {
    let (app, _, created) = app_with_blogs().await;

    let blogs = blogs_in_store(&app).await;
    assert_eq!(blogs.len(), created.len());
}

#[tokio::test]
async fn a_specific_blog_is_within_the_returned_blogs() {
    let (app, _, _) = app_with_blogs().await;

    let blogs = blogs_in_store(&app).await;
    let titles: Vec<_> = blogs.iter().map(|b| b["title"].as_str().unwrap()).collect();

    assert!(titles.contains(&"High-Profile Company Data Breaches 2023"));
}

#[tokio::test]
async fn listing_resolves_owner_identity() {
    let (app, _, _) = app_with_blogs().await;

    let blogs = blogs_in_store(&app).await;

    assert_eq!(blogs[0]["user"]["username"], "root");
    assert_eq!(blogs[0]["user"]["name"], "Superuser");
}

// =============================================================================
// Addition of a new blog
// =============================================================================

#[tokio::test]
async fn a_valid_blog_can_be_added() {
    let (app, token, created) = app_with_blogs().await;

    let new_blog = json!({
        "title": "Go To Statement Considered Harmful",
        "author": "Edsger W. Dijkstra",
        "url": "https://homepages.cwi.nl/~storm/teaching/reader/Dijkstra68.pdf",
        "likes": 5
    });

    let response = send_json(&app, "POST", "/api/blogs", Some(&token), &new_blog).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let blogs = blogs_in_store(&app).await;
    assert_eq!(blogs.len(), created.len() + 1);

    let titles: Vec<_> = blogs.iter().map(|b| b["title"].as_str().unwrap()).collect();
    assert!(titles.contains(&"Go To Statement Considered Harmful"));
}

#[tokio::test]
async fn blog_without_likes_is_added_with_zero_likes() {
    let (app, token, _) = app_with_blogs().await;

    let new_blog = json!({
        "title": "Go To Statement Considered Harmful",
        "author": "Edsger W. Dijkstra",
        "url": "https://homepages.cwi.nl/~storm/teaching/reader/Dijkstra68.pdf"
    });

    let response = send_json(&app, "POST", "/api/blogs", Some(&token), &new_blog).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let stored = body_json(response).await;
    assert_eq!(stored["likes"], 0);
}

#[tokio::test]
async fn blog_without_title_is_not_added() {
    let (app, token, created) = app_with_blogs().await;

    let new_blog = json!({
        "author": "Edsger W. Dijkstra",
        "url": "https://homepages.cwi.nl/~storm/teaching/reader/Dijkstra68.pdf",
        "likes": 5
    });

    let response = send_json(&app, "POST", "/api/blogs", Some(&token), &new_blog).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(blogs_in_store(&app).await.len(), created.len());
}

#[tokio::test]
async fn blog_without_url_is_not_added() {
    let (app, token, created) = app_with_blogs().await;

    let new_blog = json!({
        "title": "Go To Statement Considered Harmful",
        "author": "Edsger W. Dijkstra",
        "likes": 5
    });

    let response = send_json(&app, "POST", "/api/blogs", Some(&token), &new_blog).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(blogs_in_store(&app).await.len(), created.len());
}

#[tokio::test]
async fn blog_without_token_is_not_added() {
    let (app, _, created) = app_with_blogs().await;

    let new_blog = json!({
        "title": "Go To Statement Considered Harmful",
        "url": "https://homepages.cwi.nl/~storm/teaching/reader/Dijkstra68.pdf"
    });

    let response = send_json(&app, "POST", "/api/blogs", None, &new_blog).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(blogs_in_store(&app).await.len(), created.len());
}

#[tokio::test]
async fn creation_appends_to_owner_blog_list() {
    let (app, _, created) = app_with_blogs().await;

    let response = get(&app, "/api/users").await;
    assert_eq!(response.status(), StatusCode::OK);

    let users = body_json(response).await;
    let root = users
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["username"] == "root")
        .unwrap();

    let owned: Vec<_> = root["blogs"].as_array().unwrap().clone();
    assert_eq!(owned.len(), created.len());
    assert!(owned.contains(&created[0]["id"]));
}

// =============================================================================
// Viewing a specific blog
// =============================================================================

#[tokio::test]
async fn a_specific_blog_can_be_viewed() {
    let (app, _, created) = app_with_blogs().await;

    let id = created[0]["id"].as_str().unwrap();
    let response = get(&app, &format!("/api/blogs/{}", id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created[0]);
}

#[tokio::test]
async fn viewing_fails_with_404_if_id_does_not_exist() {
    let (app, _, _) = app_with_blogs().await;

    let response = get(&app, "/api/blogs/00000000-0000-4000-8000-000000000000").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn viewing_fails_with_400_if_id_is_malformed() {
    let (app, _, _) = app_with_blogs().await;

    let response = get(&app, "/api/blogs/not-a-valid-id").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Deleting a blog
// =============================================================================

#[tokio::test]
async fn a_blog_can_be_deleted_by_its_owner() {
    let (app, token, created) = app_with_blogs().await;

    let id = created[0]["id"].as_str().unwrap();
    let response = delete(&app, &format!("/api/blogs/{}", id), Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let blogs = blogs_in_store(&app).await;
    assert_eq!(blogs.len(), created.len() - 1);

    let titles: Vec<_> = blogs.iter().map(|b| b["title"].as_str().unwrap()).collect();
    assert!(!titles.contains(&created[0]["title"].as_str().unwrap()));
}

#[tokio::test]
async fn deleting_as_non_owner_is_rejected_and_record_remains() {
    let (app, _, created) = app_with_blogs().await;
    let other_token = login(&app, "mluukkai", "salainen").await;

    let id = created[0]["id"].as_str().unwrap();
    let response = delete(&app, &format!("/api/blogs/{}", id), Some(&other_token)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(blogs_in_store(&app).await.len(), created.len());
}

#[tokio::test]
async fn deleting_without_token_is_rejected() {
    let (app, _, created) = app_with_blogs().await;

    let id = created[0]["id"].as_str().unwrap();
    let response = delete(&app, &format!("/api/blogs/{}", id), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(blogs_in_store(&app).await.len(), created.len());
}

#[tokio::test]
async fn deleting_fails_with_404_if_id_does_not_exist() {
    let (app, token, _) = app_with_blogs().await;

    let response = delete(
        &app,
        "/api/blogs/00000000-0000-4000-8000-000000000000",
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_fails_with_400_if_id_is_malformed() {
    let (app, token, _) = app_with_blogs().await;

    let response = delete(&app, "/api/blogs/not-a-valid-id", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deletion_leaves_owner_blog_list_unpruned() {
    // Known consistency gap, kept on purpose: the deleted id stays in the
    // owner's blog list.
    let (app, token, created) = app_with_blogs().await;

    let id = created[0]["id"].as_str().unwrap();
    let response = delete(&app, &format!("/api/blogs/{}", id), Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let users = body_json(get(&app, "/api/users").await).await;
    let root = users
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["username"] == "root")
        .unwrap();

    assert!(root["blogs"].as_array().unwrap().contains(&created[0]["id"]));
}

// =============================================================================
// Updating a blog
// =============================================================================

#[tokio::test]
async fn an_existing_blog_can_be_updated() {
    let (app, _, created) = app_with_blogs().await;

    let id = created[0]["id"].as_str().unwrap();
    let update = json!({
        "title": "High-Profile Company Data Breaches 2023",
        "author": "Jessica Farrelly",
        "url": "https://www.electric.ai/blog/recent-big-company-data-breaches",
        "likes": 20
    });

    let response = send_json(&app, "PUT", &format!("/api/blogs/{}", id), None, &update).await;
    assert_eq!(response.status(), StatusCode::OK);

    let stored = body_json(get(&app, &format!("/api/blogs/{}", id)).await).await;
    assert_eq!(stored["likes"], 20);
}

#[tokio::test]
async fn only_given_fields_are_updated() {
    let (app, _, created) = app_with_blogs().await;

    let id = created[0]["id"].as_str().unwrap();
    let update = json!({"title": "High-Profile Company Data Breaches 2024", "likes": 13});

    let response = send_json(&app, "PUT", &format!("/api/blogs/{}", id), None, &update).await;
    assert_eq!(response.status(), StatusCode::OK);

    let stored = body_json(get(&app, &format!("/api/blogs/{}", id)).await).await;
    assert_eq!(stored["title"], "High-Profile Company Data Breaches 2024");
    assert_eq!(stored["likes"], 13);
    assert_eq!(stored["author"], created[0]["author"]);
    assert_eq!(stored["url"], created[0]["url"]);
}

#[tokio::test]
async fn repeating_an_update_yields_the_same_record() {
    let (app, _, created) = app_with_blogs().await;

    let id = created[0]["id"].as_str().unwrap();
    let update = json!({"likes": 13});

    let first = send_json(&app, "PUT", &format!("/api/blogs/{}", id), None, &update).await;
    assert_eq!(first.status(), StatusCode::OK);
    let first_body = body_json(first).await;

    let second = send_json(&app, "PUT", &format!("/api/blogs/{}", id), None, &update).await;
    assert_eq!(second.status(), StatusCode::OK);
    let second_body = body_json(second).await;

    assert_eq!(first_body, second_body);
}

#[tokio::test]
async fn updating_fails_with_404_if_id_does_not_exist() {
    let (app, _, _) = app_with_blogs().await;

    let response = send_json(
        &app,
        "PUT",
        "/api/blogs/00000000-0000-4000-8000-000000000000",
        None,
        &json!({"likes": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn updating_fails_with_400_if_id_is_malformed() {
    let (app, _, _) = app_with_blogs().await;

    let response = send_json(
        &app,
        "PUT",
        "/api/blogs/not-a-valid-id",
        None,
        &json!({"likes": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn login_with_wrong_password_is_rejected() {
    let app = test_app();

    let response = send_json(
        &app,
        "POST",
        "/api/login",
        None,
        &json!({"username": "root", "password": "wrong"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Same generic error as an unknown username
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid username or password");
}

#[tokio::test]
async fn login_with_unknown_username_is_rejected_identically() {
    let app = test_app();

    let response = send_json(
        &app,
        "POST",
        "/api/login",
        None,
        &json!({"username": "ghost", "password": "sekret"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid username or password");
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = test_app();

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}
