//! 来訪ログAPI Contract Tests
//!
//! GET/POST /api/logs, GET/PUT/DELETE /api/logs/:id

use axum::http::StatusCode;
use serde_json::json;

use crate::support::{create_entry, create_test_app, send_json, send_raw, visitor_payload};

// ---------------------------------------------------------------------------
// POST /api/logs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_log_defaults_organization() {
    let app = create_test_app().await;
    let (status, body) = send_json(
        &app.router,
        "POST",
        "/api/logs",
        Some(json!({
            "name": "Ana",
            "address": "1 Rd",
            "date": "2024-01-01",
            "gender": "Female",
            "age": "30",
            "purpose": "Meeting",
            "signature": "data:image/png;base64,AAA"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_u64());
    assert!(body["createdAt"].is_string());
    assert_eq!(body["organization"], "N/A");
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["date"], "2024-01-01");
    assert_eq!(body["age"], 30);
    assert!(body.get("updatedAt").is_none());
}

#[tokio::test]
async fn test_create_log_persists_to_file() {
    let app = create_test_app().await;
    let created = create_entry(&app.router, visitor_payload("Ana")).await;

    let raw = std::fs::read_to_string(app.data_dir.path().join("logs.json")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 1);
    assert_eq!(stored[0]["id"], created["id"]);
    assert!(raw.contains("\n  "), "file should be pretty-printed");
}

#[tokio::test]
async fn test_create_log_ids_are_unique() {
    let app = create_test_app().await;
    let mut ids = Vec::new();
    for name in ["Ana", "Ben", "Cy", "Dee", "Eve"] {
        let entry = create_entry(&app.router, visitor_payload(name)).await;
        ids.push(entry["id"].as_u64().unwrap());
    }
    let mut deduped = ids.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[tokio::test]
async fn test_create_log_missing_field_is_rejected() {
    let app = create_test_app().await;
    let mut payload = visitor_payload("Ana");
    payload.as_object_mut().unwrap().remove("signature");

    let (status, body) = send_json(&app.router, "POST", "/api/logs", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "All fields are required");

    let (_, list) = send_json(&app.router, "GET", "/api/logs", None).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_log_rejects_malformed_values() {
    let app = create_test_app().await;

    let mut bad_gender = visitor_payload("Ana");
    bad_gender["gender"] = json!("Unknown");
    let (status, _) = send_json(&app.router, "POST", "/api/logs", Some(bad_gender)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut bad_date = visitor_payload("Ana");
    bad_date["date"] = json!("01/03/2024");
    let (status, _) = send_json(&app.router, "POST", "/api/logs", Some(bad_date)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut bad_age = visitor_payload("Ana");
    bad_age["age"] = json!("thirty");
    let (status, body) = send_json(&app.router, "POST", "/api/logs", Some(bad_age)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Age must be a whole number");
}

#[tokio::test]
async fn test_create_log_invalid_json_is_rejected() {
    let app = create_test_app().await;
    let (status, body) = send_raw(&app.router, "POST", "/api/logs", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_create_log_wrong_field_type_is_rejected() {
    let app = create_test_app().await;
    let mut fractional_age = visitor_payload("Ana");
    fractional_age["age"] = json!(30.5);

    let (status, body) = send_json(&app.router, "POST", "/api/logs", Some(fractional_age)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid field type");

    let (status, body) = send_raw(&app.router, "POST", "/api/logs", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Request body must be valid JSON");
}

#[tokio::test]
async fn test_create_log_oversized_body_is_413() {
    let app = create_test_app().await;
    let mut huge = visitor_payload("Ana");
    huge["signature"] = json!(format!(
        "data:image/png;base64,{}",
        "A".repeat(11 * 1024 * 1024)
    ));

    let (status, body) = send_json(&app.router, "POST", "/api/logs", Some(huge)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["message"], "Request body too large");

    let (_, list) = send_json(&app.router, "GET", "/api/logs", None).await;
    assert_eq!(list, json!([]));
}

// ---------------------------------------------------------------------------
// GET /api/logs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_logs_in_insertion_order() {
    let app = create_test_app().await;
    create_entry(&app.router, visitor_payload("Ana")).await;
    create_entry(&app.router, visitor_payload("Ben")).await;

    let (status, body) = send_json(&app.router, "GET", "/api/logs", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ana", "Ben"]);
}

#[tokio::test]
async fn test_list_logs_search_is_case_insensitive() {
    let app = create_test_app().await;
    let mut acme = visitor_payload("Ana");
    acme["organization"] = json!("Acme Corp");
    create_entry(&app.router, acme).await;
    let mut delivery = visitor_payload("Ben");
    delivery["purpose"] = json!("Parcel delivery");
    create_entry(&app.router, delivery).await;

    let (_, body) = send_json(&app.router, "GET", "/api/logs?search=ACME", None).await;
    let found = body.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Ana");

    let (_, body) = send_json(&app.router, "GET", "/api/logs?search=delivery", None).await;
    assert_eq!(body.as_array().unwrap()[0]["name"], "Ben");

    let (_, body) = send_json(&app.router, "GET", "/api/logs?search=", None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// GET /api/logs/:id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_log_by_id() {
    let app = create_test_app().await;
    let created = create_entry(&app.router, visitor_payload("Ana")).await;
    let uri = format!("/api/logs/{}", created["id"]);

    let (status, body) = send_json(&app.router, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_unknown_id_is_not_found_for_get_update_delete() {
    let app = create_test_app().await;
    create_entry(&app.router, visitor_payload("Ana")).await;

    let (status, body) = send_json(&app.router, "GET", "/api/logs/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Log not found");

    let (status, body) = send_json(
        &app.router,
        "PUT",
        "/api/logs/1",
        Some(json!({ "name": "Nobody" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Log not found");

    let (status, body) = send_json(&app.router, "DELETE", "/api/logs/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Log not found");

    let (status, _) = send_json(&app.router, "GET", "/api/logs/not-a-number", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found_regardless_of_body() {
    let app = create_test_app().await;

    let (status, body) = send_json(
        &app.router,
        "PUT",
        "/api/logs/1",
        Some(json!({ "name": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Log not found");

    let (status, body) = send_json(&app.router, "PUT", "/api/logs/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Log not found");

    let (status, _) = send_raw(&app.router, "PUT", "/api/logs/1", "{not json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// PUT /api/logs/:id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_update_log_overwrites_only_supplied_fields() {
    let app = create_test_app().await;
    let created = create_entry(&app.router, visitor_payload("Ana")).await;
    let uri = format!("/api/logs/{}", created["id"]);

    let (status, body) = send_json(
        &app.router,
        "PUT",
        &uri,
        Some(json!({ "purpose": "Interview", "age": 31 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["purpose"], "Interview");
    assert_eq!(body["age"], 31);
    assert_eq!(body["name"], created["name"]);
    assert_eq!(body["address"], created["address"]);
    assert_eq!(body["signature"], created["signature"]);
    assert_eq!(body["createdAt"], created["createdAt"]);
    assert!(body["updatedAt"].is_string());

    let (_, fetched) = send_json(&app.router, "GET", &uri, None).await;
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_update_log_ignores_immutable_fields() {
    let app = create_test_app().await;
    let created = create_entry(&app.router, visitor_payload("Ana")).await;
    let uri = format!("/api/logs/{}", created["id"]);

    // 管理画面がエントリ全体を送り返す形
    let mut edited = created.clone();
    edited["name"] = json!("Ana Maria");
    edited["id"] = json!(42);
    edited["signature"] = json!("data:image/png;base64,BBB");
    edited["createdAt"] = json!("2000-01-01T00:00:00.000Z");

    let (status, body) = send_json(&app.router, "PUT", &uri, Some(edited)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ana Maria");
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["signature"], created["signature"]);
    assert_eq!(body["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_update_log_rejects_blank_required_field() {
    let app = create_test_app().await;
    let created = create_entry(&app.router, visitor_payload("Ana")).await;
    let uri = format!("/api/logs/{}", created["id"]);

    let (status, _) = send_json(&app.router, "PUT", &uri, Some(json!({ "name": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, fetched) = send_json(&app.router, "GET", &uri, None).await;
    assert_eq!(fetched["name"], "Ana");
}

// ---------------------------------------------------------------------------
// DELETE /api/logs/:id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_delete_log_shrinks_listing_by_one() {
    let app = create_test_app().await;
    create_entry(&app.router, visitor_payload("Ana")).await;
    let target = create_entry(&app.router, visitor_payload("Ben")).await;
    create_entry(&app.router, visitor_payload("Cy")).await;

    let uri = format!("/api/logs/{}", target["id"]);
    let (status, body) = send_json(&app.router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Log deleted successfully");

    let (_, list) = send_json(&app.router, "GET", "/api/logs", None).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|e| e["id"] != target["id"]));

    let (status, _) = send_json(&app.router, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// 405
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_unsupported_methods_are_405() {
    let app = create_test_app().await;

    let (status, body) = send_json(&app.router, "PATCH", "/api/logs", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["message"], "Method not allowed");

    let (status, _) = send_json(&app.router, "POST", "/api/logs/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send_json(&app.router, "GET", "/api/auth/login", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// logs.json の内容
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_corrupt_store_reports_generic_500() {
    let app = create_test_app().await;
    std::fs::write(app.data_dir.path().join("logs.json"), "{{ garbage").unwrap();
    let data_dir = app.data_dir.path().display().to_string();

    let (status, body) = send_json(&app.router, "GET", "/api/logs", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Error fetching logs" }));

    let (status, body) =
        send_json(&app.router, "POST", "/api/logs", Some(visitor_payload("Ana"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Error creating log" }));
    assert!(!body.to_string().contains(&data_dir));
    assert!(!body.to_string().contains("logs.json"));
}

#[tokio::test]
async fn test_list_logs_survives_entry_with_null_age() {
    let app = create_test_app().await;
    std::fs::write(
        app.data_dir.path().join("logs.json"),
        r#"[{"id": 7, "name": "Cora", "address": "3 Blvd", "date": "2024-03-02",
            "gender": "Female", "age": null, "organization": "N/A", "purpose": "Tour",
            "signature": "data:image/png;base64,CCC",
            "createdAt": "2024-03-02T09:00:00.000Z"}]"#,
    )
    .unwrap();

    let (status, list) = send_json(&app.router, "GET", "/api/logs", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list[0]["name"], "Cora");
    assert!(list[0]["age"].is_null());

    let (status, _) = send_json(&app.router, "GET", "/api/logs/7", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, updated) = send_json(
        &app.router,
        "PUT",
        "/api/logs/7",
        Some(json!({ "age": 40 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["age"], 40);

    create_entry(&app.router, visitor_payload("Ana")).await;
    let (_, list) = send_json(&app.router, "GET", "/api/logs", None).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}
