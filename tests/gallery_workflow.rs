use axum::http::StatusCode;
use axum_test::TestServer;
use ko_lake_villa::{Config, create_app};
use serde_json::json;

/// Server with cookie persistence so one login covers the whole admin
/// session, the way the admin console behaves in a browser.
async fn admin_server() -> TestServer {
    let app = create_app(Config::default()).await.unwrap();
    let mut server = TestServer::new(app).unwrap();
    server.save_cookies();

    let login = server
        .post("/api/auth")
        .json(&json!({"password": "password"}))
        .await;
    login.assert_status_ok();
    server
}

#[tokio::test]
async fn login_issues_a_session_that_verify_accepts() {
    let server = admin_server().await;
    let response = server.get("/api/verify").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["authorized"], true);
}

#[tokio::test]
async fn wrong_password_leaves_the_session_unauthorized() {
    let app = create_app(Config::default()).await.unwrap();
    let mut server = TestServer::new(app).unwrap();
    server.save_cookies();

    let login = server
        .post("/api/auth")
        .json(&json!({"password": "guess"}))
        .await;
    let body: serde_json::Value = login.json();
    assert_eq!(body["success"], false);

    let verify: serde_json::Value = server.get("/api/verify").await.json();
    assert_eq!(verify["authorized"], false);
}

#[tokio::test]
async fn full_upload_edit_delete_cycle() {
    let server = admin_server().await;

    // Create with user tags; composed tags must carry brand and category
    // terms alongside them.
    let created = server
        .post("/api/gallery")
        .json(&json!({
            "category": "pool-deck",
            "title": "Sunset view",
            "tags": "sunset, relaxing",
            "image_url": "/uploads/pool-sunset.jpg"
        }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let item: serde_json::Value = created.json();
    let id = item["id"].as_i64().unwrap();
    let tags = item["tags"].as_str().unwrap();
    assert!(tags.contains("pool deck"));
    assert!(tags.contains("ko lake villa"));
    assert!(tags.contains("sunset"));
    assert!(tags.contains("relaxing"));

    // Listing and category filters.
    let all: serde_json::Value = server.get("/api/gallery").await.json();
    assert_eq!(all.as_array().unwrap().len(), 1);
    let filtered: serde_json::Value = server
        .get("/api/gallery?category=pool-deck")
        .await
        .json();
    assert_eq!(filtered.as_array().unwrap().len(), 1);
    let other: serde_json::Value = server
        .get("/api/gallery?category=dining-area")
        .await
        .json();
    assert!(other.as_array().unwrap().is_empty());

    // Edit moves the item to another category.
    let updated = server
        .put(&format!("/api/gallery/{}", id))
        .json(&json!({
            "category": "koggala-lake",
            "title": "Lake at dawn",
            "image_url": "/uploads/pool-sunset.jpg"
        }))
        .await;
    updated.assert_status_ok();
    let updated: serde_json::Value = updated.json();
    assert_eq!(updated["category"], "koggala-lake");

    // Delete, then the listing is empty again.
    let deleted = server.delete(&format!("/api/gallery/{}", id)).await;
    deleted.assert_status(StatusCode::NO_CONTENT);
    let all: serde_json::Value = server.get("/api/gallery").await.json();
    assert!(all.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn metadata_only_submission_is_accepted() {
    let server = admin_server().await;

    // Category, title, and tags alone are a complete submission; the image
    // URL can be attached later.
    let created = server
        .post("/api/gallery")
        .json(&json!({
            "category": "pool-deck",
            "title": "Sunset view",
            "tags": "sunset, relaxing"
        }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let item: serde_json::Value = created.json();
    assert_eq!(item["category"], "pool-deck");
    assert_eq!(item["image_url"], "");
}

#[tokio::test]
async fn invalid_submission_returns_field_errors() {
    let server = admin_server().await;

    let response = server
        .post("/api/gallery")
        .json(&json!({"category": "", "title": "X"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e.as_str().unwrap().contains("Category")));
}

#[tokio::test]
async fn updating_a_missing_item_is_not_found() {
    let server = admin_server().await;
    let response = server
        .put("/api/gallery/999")
        .json(&json!({
            "category": "pool-deck",
            "title": "X",
            "image_url": "/u/x.jpg"
        }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bulk_delete_reports_removed_count() {
    let server = admin_server().await;

    let mut ids = Vec::new();
    for title in ["A", "B", "C"] {
        let created: serde_json::Value = server
            .post("/api/gallery")
            .json(&json!({
                "category": "excursions",
                "title": title,
                "image_url": "/u/x.jpg"
            }))
            .await
            .json();
        ids.push(created["id"].as_i64().unwrap());
    }

    let response = server
        .post("/api/gallery/bulk-delete")
        .json(&json!({"ids": [ids[0], ids[2], 999]}))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["removed"], 2);
}

#[tokio::test]
async fn suggest_falls_back_to_filename_without_a_vision_endpoint() {
    // Default config has no vision endpoint, so the null provider routes
    // everything through the filename heuristic.
    let server = admin_server().await;

    let response = server
        .post("/api/gallery/suggest")
        .json(&json!({"filename": "pool_area_01.jpg", "file_size": 2048}))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["category"], "pool-deck");
    assert_eq!(body["confidence"], 0.5);
    assert_eq!(body["source"], "filename-fallback");
}

#[tokio::test]
async fn booking_inquiry_round_trip() {
    let server = admin_server().await;

    let response = server
        .post("/api/booking")
        .json(&json!({
            "guestName": "Amaya Perera",
            "email": "amaya@example.com",
            "checkIn": "2026-09-10",
            "checkOut": "2026-09-14",
            "guests": 4,
            "roomType": "KLV1"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["nights"], 4);
    // KLV1 lists at 119; 15% off is 101 per night.
    assert_eq!(body["total"], 101 * 4);
}

#[tokio::test]
async fn booking_with_a_far_future_checkout_still_totals_correctly() {
    let server = admin_server().await;

    // A checkout tens of thousands of years out passes date validation, so
    // the total has to survive the huge night count.
    let response = server
        .post("/api/booking")
        .json(&json!({
            "guestName": "Amaya Perera",
            "email": "amaya@example.com",
            "checkIn": "2026-09-10",
            "checkOut": "+99999-09-10",
            "guests": 2,
            "roomType": "KLV1"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    let nights = body["nights"].as_i64().unwrap();
    assert!(nights > 30_000_000);
    assert_eq!(body["total"].as_u64().unwrap(), 101 * nights as u64);
}
