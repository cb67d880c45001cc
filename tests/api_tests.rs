mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_health_check() {
    let app = common::test_app();

    let (status, body) = common::make_request(app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"status\":\"ok\""));
}

#[tokio::test]
async fn test_create_column_and_task() {
    let app = common::test_app();

    let (status, body) = common::make_request(
        app.clone(),
        "POST",
        "/api/columns",
        Some(json!({"title": "To Do"}).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let column: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(column["title"], "To Do");
    let column_id = column["id"].as_str().unwrap();

    let (status, body) = common::make_request(
        app.clone(),
        "POST",
        "/api/tasks",
        Some(json!({"columnId": column_id}).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let task: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(task["title"], "New Task");
    assert_eq!(task["priority"], "Medium");
    assert_eq!(task["estimatedTime"], "1:00");
    assert_eq!(task["completed"], false);
    assert_eq!(task["columnId"], column_id);

    let (status, body) = common::make_request(app, "GET", "/api/board", None).await;
    assert_eq!(status, StatusCode::OK);
    let board: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(board["columns"][0]["id"], column_id);
    assert_eq!(board["columns"][0]["tasks"][0]["id"], task["id"]);
}

#[tokio::test]
async fn test_create_task_in_unknown_column() {
    let app = common::test_app();

    let (status, _) = common::make_request(
        app,
        "POST",
        "/api/tasks",
        Some(json!({"columnId": "missing"}).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_move_task_between_columns() {
    let app = common::test_app();

    let (_, body) = common::make_request(
        app.clone(),
        "POST",
        "/api/columns",
        Some(json!({"title": "A"}).to_string()),
    )
    .await;
    let col_a: Value = serde_json::from_str(&body).unwrap();
    let (_, body) = common::make_request(
        app.clone(),
        "POST",
        "/api/columns",
        Some(json!({"title": "B"}).to_string()),
    )
    .await;
    let col_b: Value = serde_json::from_str(&body).unwrap();

    let (_, body) = common::make_request(
        app.clone(),
        "POST",
        "/api/tasks",
        Some(json!({"columnId": col_a["id"]}).to_string()),
    )
    .await;
    let task: Value = serde_json::from_str(&body).unwrap();

    let move_body = json!({
        "sourceColumnId": col_a["id"],
        "destColumnId": col_b["id"],
        "sourceIndex": 0,
        "destIndex": 0,
    })
    .to_string();
    let (status, body) = common::make_request(
        app,
        "PATCH",
        &format!("/api/tasks/{}/move", task["id"].as_str().unwrap()),
        Some(move_body),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let board: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(board["columns"][0]["tasks"].as_array().unwrap().len(), 0);
    assert_eq!(board["columns"][1]["tasks"][0]["id"], task["id"]);
    assert_eq!(board["columns"][1]["tasks"][0]["columnId"], col_b["id"]);
}

#[tokio::test]
async fn test_move_task_rejects_stale_index() {
    let app = common::test_app();

    let (_, body) = common::make_request(
        app.clone(),
        "POST",
        "/api/columns",
        Some(json!({"title": "A"}).to_string()),
    )
    .await;
    let col: Value = serde_json::from_str(&body).unwrap();
    let (_, body) = common::make_request(
        app.clone(),
        "POST",
        "/api/tasks",
        Some(json!({"columnId": col["id"]}).to_string()),
    )
    .await;
    let first: Value = serde_json::from_str(&body).unwrap();
    let (_, _) = common::make_request(
        app.clone(),
        "POST",
        "/api/tasks",
        Some(json!({"columnId": col["id"]}).to_string()),
    )
    .await;

    // Index 1 does not hold the first task, so the move must fail loudly.
    let move_body = json!({
        "sourceColumnId": col["id"],
        "destColumnId": col["id"],
        "sourceIndex": 1,
        "destIndex": 0,
    })
    .to_string();
    let (status, _) = common::make_request(
        app,
        "PATCH",
        &format!("/api/tasks/{}/move", first["id"].as_str().unwrap()),
        Some(move_body),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_link_rejects_invalid_url() {
    let app = common::test_app();

    let (status, _) = common::make_request(
        app.clone(),
        "POST",
        "/api/links",
        Some(json!({"url": "not a url", "title": "Broken"}).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = common::make_request(app, "GET", "/api/reading-list", None).await;
    let list: Value = serde_json::from_str(&body).unwrap();
    assert!(list["ungrouped"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_group_delete_ungroups_links() {
    let app = common::test_app();

    let (status, body) = common::make_request(
        app.clone(),
        "POST",
        "/api/groups",
        Some(json!({"name": "Exam Prep"}).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let group: Value = serde_json::from_str(&body).unwrap();
    let group_id = group["id"].as_str().unwrap();

    for url in ["https://example.com/a", "https://example.com/b"] {
        let (status, _) = common::make_request(
            app.clone(),
            "POST",
            "/api/links",
            Some(json!({"url": url, "groupId": group_id}).to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, _) = common::make_request(
        app.clone(),
        "DELETE",
        &format!("/api/groups/{}", group_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = common::make_request(app, "GET", "/api/reading-list", None).await;
    let list: Value = serde_json::from_str(&body).unwrap();
    assert!(list["groups"].as_array().unwrap().is_empty());
    let ungrouped = list["ungrouped"].as_array().unwrap();
    assert_eq!(ungrouped.len(), 2);
    assert!(ungrouped.iter().all(|l| l.get("groupId").is_none()));
}

#[tokio::test]
async fn test_delete_unknown_task() {
    let app = common::test_app();

    let (status, _) = common::make_request(app, "DELETE", "/api/tasks/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
