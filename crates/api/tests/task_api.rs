//! HTTP-level integration tests for the task calls.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json, put_json};
use serde_json::json;

#[tokio::test]
async fn test_create_task_returns_state_and_created_at() {
    let app = common::build_test_app(common::test_pool().await);
    let project_id = common::create_project(&app, "Website", "").await;

    let response = post_json(
        app,
        "/api/v1/tasks",
        json!({
            "title": "Design mock",
            "description": "first pass",
            "projectId": project_id,
            "state": "IN_PROGRESS",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let task = &json["task"];
    assert!(task["id"].is_number());
    assert_eq!(task["projectId"], project_id);
    assert_eq!(task["title"], "Design mock");
    assert_eq!(task["description"], "first pass");
    assert_eq!(task["state"], "IN_PROGRESS");
    assert!(!task["createdAt"].as_str().unwrap().is_empty());
    assert!(task["deadline"].is_null());
}

#[tokio::test]
async fn test_create_task_defaults_to_todo() {
    let app = common::build_test_app(common::test_pool().await);
    let project_id = common::create_project(&app, "Website", "").await;

    let response = post_json(
        app,
        "/api/v1/tasks",
        json!({"title": "No state given", "projectId": project_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["task"]["state"], "TODO");
}

#[tokio::test]
async fn test_create_task_formats_deadline() {
    let app = common::build_test_app(common::test_pool().await);
    let project_id = common::create_project(&app, "Website", "").await;

    let response = post_json(
        app,
        "/api/v1/tasks",
        json!({
            "title": "Launch",
            "projectId": project_id,
            "state": "TODO",
            "deadline": "2030-01-31T17:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await["task"]["deadline"],
        "31/01/2030 - 17:00:00"
    );
}

#[tokio::test]
async fn test_create_task_requires_title() {
    let app = common::build_test_app(common::test_pool().await);
    let project_id = common::create_project(&app, "Website", "").await;

    let response = post_json(
        app,
        "/api/v1/tasks",
        json!({"title": "", "projectId": project_id, "state": "TODO"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_task_for_missing_project_is_storage_error() {
    let app = common::build_test_app(common::test_pool().await);

    let response = post_json(
        app,
        "/api/v1/tasks",
        json!({"title": "Orphan", "projectId": 4242, "state": "TODO"}),
    )
    .await;
    assert!(!response.status().is_success());
    assert_eq!(body_json(response).await["code"], "STORAGE_ERROR");
}

#[tokio::test]
async fn test_create_task_with_unknown_state_is_rejected() {
    let app = common::build_test_app(common::test_pool().await);
    let project_id = common::create_project(&app, "Website", "").await;

    let response = post_json(
        app,
        "/api/v1/tasks",
        json!({"title": "Odd", "projectId": project_id, "state": "ARCHIVED"}),
    )
    .await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_list_tasks_with_and_without_filter() {
    let app = common::build_test_app(common::test_pool().await);
    let project_id = common::create_project(&app, "Website", "").await;
    let other_project = common::create_project(&app, "Other", "").await;
    let todo = common::create_task(&app, project_id, "Mock", "TODO").await;
    let blocked = common::create_task(&app, project_id, "Copy", "BLOCKED").await;
    common::create_task(&app, other_project, "Elsewhere", "TODO").await;

    let tasks_uri = format!("/api/v1/projects/{project_id}/tasks");
    let all = body_json(get(app.clone(), &tasks_uri).await).await;
    let ids: Vec<i64> = all["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![todo, blocked]);

    let filtered = body_json(get(app, &format!("{tasks_uri}?state=BLOCKED")).await).await;
    let tasks = filtered["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], blocked);
    assert_eq!(tasks[0]["state"], "BLOCKED");
}

#[tokio::test]
async fn test_list_tasks_with_invalid_state_returns_400() {
    let app = common::build_test_app(common::test_pool().await);
    let project_id = common::create_project(&app, "Website", "").await;

    let response = get(
        app,
        &format!("/api/v1/projects/{project_id}/tasks?state=SOMEDAY"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_list_tasks_for_unknown_project_is_empty() {
    let app = common::build_test_app(common::test_pool().await);
    let response = get(app, "/api/v1/projects/77/tasks").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["tasks"], json!([]));
}

#[tokio::test]
async fn test_get_task_by_id() {
    let app = common::build_test_app(common::test_pool().await);
    let project_id = common::create_project(&app, "Website", "").await;
    let task_id = common::create_task(&app, project_id, "Mock", "DONE").await;

    let response = get(app.clone(), &format!("/api/v1/tasks/{task_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["task"]["title"], "Mock");
    assert_eq!(json["task"]["state"], "DONE");

    let response = get(app, &format!("/api/v1/tasks/{}", task_id + 1)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_task_overwrites_fields_and_keeps_created_at() {
    let app = common::build_test_app(common::test_pool().await);
    let first = common::create_project(&app, "First", "").await;
    let second = common::create_project(&app, "Second", "").await;
    let task_id = common::create_task(&app, first, "Mock", "TODO").await;

    let before = body_json(get(app.clone(), &format!("/api/v1/tasks/{task_id}")).await).await;

    let response = put_json(
        app.clone(),
        &format!("/api/v1/tasks/{task_id}"),
        json!({
            "title": "Mock v2",
            "description": "moved",
            "projectId": second,
            "state": "IN_PROGRESS",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["task"]["title"], "Mock v2");
    assert_eq!(json["task"]["description"], "moved");
    assert_eq!(json["task"]["projectId"], second);
    assert_eq!(json["task"]["state"], "IN_PROGRESS");
    assert_eq!(json["task"]["createdAt"], before["task"]["createdAt"]);

    let remaining = body_json(get(app, &format!("/api/v1/projects/{first}/tasks")).await).await;
    assert_eq!(remaining["tasks"], json!([]));
}

#[tokio::test]
async fn test_update_task_without_deadline_keeps_it() {
    let app = common::build_test_app(common::test_pool().await);
    let project_id = common::create_project(&app, "Website", "").await;
    let response = post_json(
        app.clone(),
        "/api/v1/tasks",
        json!({
            "title": "Launch",
            "projectId": project_id,
            "state": "TODO",
            "deadline": "2030-01-31T17:00:00Z",
        }),
    )
    .await;
    let task_id = body_json(response).await["task"]["id"].as_i64().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/tasks/{task_id}"),
        json!({
            "title": "Launch",
            "description": "",
            "projectId": project_id,
            "state": "IN_PROGRESS",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["task"]["deadline"],
        "31/01/2030 - 17:00:00"
    );

    let json = body_json(get(app, &format!("/api/v1/tasks/{task_id}")).await).await;
    assert_eq!(json["task"]["deadline"], "31/01/2030 - 17:00:00");
    assert_eq!(json["task"]["state"], "IN_PROGRESS");
}

#[tokio::test]
async fn test_update_nonexistent_task_returns_404() {
    let app = common::build_test_app(common::test_pool().await);
    let project_id = common::create_project(&app, "Website", "").await;

    let response = put_json(
        app,
        "/api/v1/tasks/999",
        json!({"title": "Ghost", "projectId": project_id, "state": "TODO"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_task_state_changes_only_state() {
    let app = common::build_test_app(common::test_pool().await);
    let project_id = common::create_project(&app, "Website", "").await;
    let task_id = common::create_task(&app, project_id, "Mock", "TODO").await;

    let before = body_json(get(app.clone(), &format!("/api/v1/tasks/{task_id}")).await).await;

    let response = patch_json(
        app,
        &format!("/api/v1/tasks/{task_id}/state"),
        json!({"state": "DONE"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let after = body_json(response).await;
    assert_eq!(after["task"]["state"], "DONE");
    for field in ["id", "projectId", "title", "description", "createdAt", "deadline"] {
        assert_eq!(after["task"][field], before["task"][field], "{field} changed");
    }
}

#[tokio::test]
async fn test_update_state_of_nonexistent_task_returns_404() {
    let app = common::build_test_app(common::test_pool().await);
    let project_id = common::create_project(&app, "Website", "").await;
    let task_id = common::create_task(&app, project_id, "Mock", "TODO").await;

    let response = patch_json(
        app.clone(),
        &format!("/api/v1/tasks/{}/state", task_id + 10),
        json!({"state": "DONE"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let unchanged = body_json(get(app, &format!("/api/v1/tasks/{task_id}")).await).await;
    assert_eq!(unchanged["task"]["state"], "TODO");
}

#[tokio::test]
async fn test_delete_task_is_idempotent() {
    let app = common::build_test_app(common::test_pool().await);
    let project_id = common::create_project(&app, "Website", "").await;
    let task_id = common::create_task(&app, project_id, "Mock", "TODO").await;

    let response = delete(app.clone(), &format!("/api/v1/tasks/{}", task_id + 1)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let tasks_uri = format!("/api/v1/projects/{project_id}/tasks");
    let listed = body_json(get(app.clone(), &tasks_uri).await).await;
    assert_eq!(listed["tasks"].as_array().unwrap().len(), 1);

    let response = delete(app.clone(), &format!("/api/v1/tasks/{task_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let listed = body_json(get(app, &tasks_uri).await).await;
    assert_eq!(listed["tasks"], json!([]));
}
