use axum::http::StatusCode;
use brandwatch_domain::DashboardEvent;
use serde_json::json;

mod helpers;
use helpers::{TestApp, ADMIN_TOKEN, MANAGER_TOKEN, VIEWER_TOKEN};

#[tokio::test]
async fn test_create_domain_normalizes_key_and_notifies() {
    let app = TestApp::new().await;
    let brand = app.create_brand("acme").await;
    let mut events = app.events.subscribe();

    let (status, body) = app
        .call(
            "POST",
            "/domains",
            Some(MANAGER_TOKEN),
            Some(json!({ "domain": "HTTPS://www.Acme.com/Promo?ref=1", "brand": brand })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["domain"], "acme.com/promo");
    assert_eq!(body["brand"]["name"], "ACME");
    assert_eq!(body["status"]["nawala"]["status"], "unknown");

    let event = events.try_recv().unwrap();
    assert_eq!(event.name(), "domain:created");
}

#[tokio::test]
async fn test_create_domain_with_bad_input() {
    let app = TestApp::new().await;
    let brand = app.create_brand("acme").await;

    let (status, _) = app
        .call(
            "POST",
            "/domains",
            Some(MANAGER_TOKEN),
            Some(json!({ "domain": "localhost", "brand_id": brand })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .call(
            "POST",
            "/domains",
            Some(MANAGER_TOKEN),
            Some(json!({ "domain": "acme.com", "brand_id": 999 })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.create_domain("acme.com", brand).await;
    let (status, _) = app
        .call(
            "POST",
            "/domains",
            Some(MANAGER_TOKEN),
            Some(json!({ "domain": "www.acme.com", "brand_id": brand })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_list_domains_paginates() {
    let app = TestApp::new().await;
    let brand = app.create_brand("acme").await;
    for i in 0..5 {
        app.create_domain(&format!("site{}.com", i), brand).await;
    }

    let (status, body) = app
        .call("GET", "/domains?page=2&limit=2", Some(VIEWER_TOKEN), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["pages"], 3);
    assert_eq!(body["total_blocked"], 0);
    assert_eq!(body["domains"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_domains_rejects_unknown_status() {
    let app = TestApp::new().await;

    let (status, _) = app
        .call("GET", "/domains?status=maybe", Some(VIEWER_TOKEN), None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_and_delete_domain() {
    let app = TestApp::new().await;
    let brand = app.create_brand("acme").await;
    let id = app.create_domain("acme.com", brand).await;

    let (status, body) = app
        .call(
            "PUT",
            &format!("/domains/{}", id),
            Some(MANAGER_TOKEN),
            Some(json!({ "note": "landing page" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["note"], "landing page");

    let (status, _) = app
        .call("DELETE", &format!("/domains/{}", id), Some(MANAGER_TOKEN), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .call("GET", &format!("/domains/{}", id), Some(VIEWER_TOKEN), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_status_patch_is_admin_only() {
    let app = TestApp::new().await;
    let brand = app.create_brand("acme").await;
    let id = app.create_domain("acme.com", brand).await;
    let patch = json!({ "nawala": { "status": "blocked" }, "uptime": "up" });

    let (status, _) = app
        .call(
            "PATCH",
            &format!("/domains/{}/status", id),
            Some(MANAGER_TOKEN),
            Some(patch.clone()),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .call(
            "PATCH",
            &format!("/domains/{}/status", id),
            Some(ADMIN_TOKEN),
            Some(patch),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"]["nawala"]["status"], "blocked");
    assert!(body["status"]["nawala"]["blocked_id"]
        .as_str()
        .unwrap()
        .starts_with("manual_"));
    assert_eq!(body["status"]["uptime"]["status"], "up");
    assert!(body["status"]["uptime"]["last_checked"].is_string());
    assert!(body["status"]["google"]["last_checked"].is_null());
}

#[tokio::test]
async fn test_bulk_import_reports_every_row() {
    let app = TestApp::new().await;
    app.create_brand("A200M").await;
    let existing = app.create_brand("other").await;
    app.create_domain("already.com", existing).await;
    let mut events = app.events.subscribe();

    let (status, body) = app
        .call(
            "POST",
            "/domains/bulk-import",
            Some(MANAGER_TOKEN),
            Some(json!({
                "domains": [
                    { "domain": "HTTPS://Example.com/Promo?x=1", "brand": "a200m" },
                    { "domain": "example.com/promo", "brand": "A-200M" },
                    { "domain": "already.com", "brand": "a200m" },
                    { "domain": "fresh.com", "brand": "nobody" },
                    { "domain": "", "brand": "a200m" },
                ]
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Import completed: 1 added, 2 skipped, 2 failed"
    );
    let data = &body["data"];
    assert_eq!(
        data["success"],
        json!([{ "row": 2, "domain": "example.com/promo", "brand": "a200m" }])
    );
    assert_eq!(data["skipped"][0]["row"], 3);
    assert_eq!(data["skipped"][0]["reason"], "duplicate in batch");
    assert_eq!(data["skipped"][1]["row"], 4);
    assert_eq!(data["skipped"][1]["reason"], "already exists");
    assert_eq!(data["failed"][0]["row"], 5);
    assert_eq!(data["failed"][1]["row"], 6);

    let event = events.try_recv().unwrap();
    assert_eq!(event, DashboardEvent::BulkImported { count: 1 });
}

#[tokio::test]
async fn test_bulk_import_requires_rows() {
    let app = TestApp::new().await;

    let (status, body) = app
        .call(
            "POST",
            "/domains/bulk-import",
            Some(MANAGER_TOKEN),
            Some(json!({ "domains": [] })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("No domains provided"));
}

#[tokio::test]
async fn test_delete_blocked_domains() {
    let app = TestApp::new().await;
    let brand = app.create_brand("acme").await;
    let blocked = app.create_domain("blocked.com", brand).await;
    app.create_domain("fine.com", brand).await;
    app.call(
        "POST",
        "/urls/update",
        None,
        Some(json!({ "id": blocked.to_string(), "scanResult": { "status": "blocked" } })),
    )
    .await;

    let (status, body) = app
        .call(
            "DELETE",
            "/domains/bulk-delete-blocked",
            Some(MANAGER_TOKEN),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);

    let (_, list) = app.call("GET", "/domains", Some(VIEWER_TOKEN), None).await;
    assert_eq!(list["total"], 1);
    assert_eq!(list["domains"][0]["domain"], "fine.com");
}

#[tokio::test]
async fn test_bulk_import_needs_editor_role() {
    let app = TestApp::new().await;
    app.create_brand("acme").await;

    let (status, _) = app
        .call(
            "POST",
            "/domains/bulk-import",
            Some(VIEWER_TOKEN),
            Some(json!({ "domains": [{ "domain": "acme.com", "brand": "acme" }] })),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}
