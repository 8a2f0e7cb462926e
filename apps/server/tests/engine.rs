use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use tempfile::tempdir;
use tower::ServiceExt;

use goalstreak_server::{api::app_router, build_state, config::Config};

async fn build_test_router() -> (axum::Router, tempfile::TempDir) {
    let tmp = tempdir().unwrap();
    std::env::set_var("GS_DB_PATH", tmp.path().join("test.db"));
    let config = Config::from_env();
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn goal_completion_flow() {
    let (app, _tmp) = build_test_router().await;

    // Create a goal; its zeroed streak appears with it.
    let deadline = chrono::Utc::now().naive_utc() + chrono::Duration::days(30);
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/goals",
            serde_json::json!({ "name": "Ship the thing", "deadline": deadline, "reason": "accountability" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let goal = json_body(response).await;
    let goal_id = goal["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/streaks/{}", goal_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let streak = json_body(response).await;
    assert_eq!(streak["currentStreak"], 0);
    assert_eq!(streak["totalCompleted"], 0);

    // First completion of the day succeeds.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(format!("/api/v1/streaks/{}/complete", goal_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let streak = json_body(response).await;
    assert_eq!(streak["currentStreak"], 1);
    assert_eq!(streak["bestStreak"], 1);
    assert_eq!(streak["totalCompleted"], 1);

    // The second completion on the same day is rejected with the
    // distinguishable error code, and counters stay put.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(format!("/api/v1/streaks/{}/complete", goal_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = json_body(response).await;
    assert_eq!(error["error"], "ALREADY_COMPLETED");

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/completions/{}", goal_id)))
        .await
        .unwrap();
    let completions = json_body(response).await;
    assert_eq!(completions.as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/streaks/{}", goal_id)))
        .await
        .unwrap();
    let streak = json_body(response).await;
    assert_eq!(streak["totalCompleted"], 1);

    // Deleting the goal cascades to its streak and completion history.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/v1/goals/{}", goal_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/streaks/{}", goal_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/completions/{}", goal_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let completions = json_body(response).await;
    assert!(completions.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn goal_validation_and_missing_records() {
    let (app, _tmp) = build_test_router().await;

    // Blank name is a 400.
    let deadline = chrono::Utc::now().naive_utc() + chrono::Duration::days(30);
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/goals",
            serde_json::json!({ "name": "  ", "deadline": deadline }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A deadline in the past is a 400.
    let past = chrono::Utc::now().naive_utc() - chrono::Duration::days(1);
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/goals",
            serde_json::json!({ "name": "Time travel", "deadline": past }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown goal ids surface as 404s.
    let response = app
        .clone()
        .oneshot(get_request("/api/v1/streaks/nope"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/streaks/nope/complete")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/v1/goals/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
