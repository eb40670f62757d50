//! HTTP-level tests for the `/api/candidate(s)` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_candidate, create_party, delete, get, post_json, put_json};
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_then_get_candidate() {
    let app = build_test_app().await;

    let response = post_json(
        &app,
        "/api/candidate",
        json!({"first_name": "Ronald", "last_name": "Firbank", "industry_connected": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "success");
    assert_eq!(json["data"]["first_name"], "Ronald");
    assert_eq!(json["data"]["industry_connected"], true);
    let id = json["id"].as_i64().expect("id should be an integer");

    let json = body_json(get(&app, &format!("/api/candidate/{id}")).await).await;
    let data = &json["data"];
    assert_eq!(json["message"], "success");
    assert_eq!(data["id"], id);
    assert_eq!(data["first_name"], "Ronald");
    assert_eq!(data["last_name"], "Firbank");
    assert_eq!(data["industry_connected"], true);
    assert_eq!(data["party_id"], Value::Null);
    assert_eq!(data["party_name"], Value::Null);
}

#[tokio::test]
async fn test_create_candidate_requires_every_field() {
    let app = build_test_app().await;

    let response = post_json(
        &app,
        "/api/candidate",
        json!({"first_name": "Ronald", "last_name": "  "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No last_name specified.");

    let response = post_json(
        &app,
        "/api/candidate",
        json!({"first_name": "Ronald", "last_name": "Firbank"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "No industry_connected specified."
    );

    let json = body_json(get(&app, "/api/candidates").await).await;
    assert_eq!(json["data"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_create_candidate_rejects_non_flag() {
    let app = build_test_app().await;

    let response = post_json(
        &app,
        "/api/candidate",
        json!({"first_name": "Ronald", "last_name": "Firbank", "industry_connected": 7}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_missing_candidate_is_null() {
    let app = build_test_app().await;

    let response = get(&app, "/api/candidate/42").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "success");
    assert_eq!(json["data"], Value::Null);
}

#[tokio::test]
async fn test_list_candidates_with_party_names() {
    let app = build_test_app().await;
    let party = create_party(&app, "Jacobin Party").await;
    let first = create_candidate(&app, "Ada", "Lovelace", false).await;
    create_candidate(&app, "Alan", "Turing", true).await;

    put_json(&app, &format!("/api/candidate/{first}"), json!({"party_id": party})).await;

    let response = get(&app, "/api/candidates").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().expect("data should be an array");
    assert_eq!(data.len(), 2);

    let ada = data.iter().find(|c| c["id"] == first).expect("Ada listed");
    assert_eq!(ada["party_name"], "Jacobin Party");
    let alan = data.iter().find(|c| c["id"] != first).expect("Alan listed");
    assert_eq!(alan["party_name"], Value::Null);
    assert_eq!(alan["industry_connected"], true);
}

#[tokio::test]
async fn test_update_candidate_party() {
    let app = build_test_app().await;
    let party = create_party(&app, "Federalist Party").await;
    let id = create_candidate(&app, "Ada", "Lovelace", false).await;

    let response = put_json(&app, &format!("/api/candidate/{id}"), json!({"party_id": party})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "success");
    assert_eq!(json["changes"], 1);
    assert_eq!(json["data"]["party_id"], party);

    let json = body_json(get(&app, &format!("/api/candidate/{id}")).await).await;
    assert_eq!(json["data"]["party_id"], party);
    assert_eq!(json["data"]["party_name"], "Federalist Party");
    assert_eq!(json["data"]["first_name"], "Ada");

    let json = body_json(put_json(&app, &format!("/api/candidate/{id}"), json!({"party_id": null})).await).await;
    assert_eq!(json["changes"], 1);
    let json = body_json(get(&app, &format!("/api/candidate/{id}")).await).await;
    assert_eq!(json["data"]["party_id"], Value::Null);
}

#[tokio::test]
async fn test_update_candidate_party_validation_and_missing_row() {
    let app = build_test_app().await;

    let response = put_json(&app, "/api/candidate/1", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No party_id specified.");

    let response = put_json(&app, "/api/candidate/1", json!({"party_id": "abc"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json(&app, "/api/candidate/99", json!({"party_id": null})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["changes"], 0);
}

#[tokio::test]
async fn test_update_candidate_to_unknown_party_is_rejected() {
    let app = build_test_app().await;
    let id = create_candidate(&app, "Ada", "Lovelace", false).await;

    let response = put_json(&app, &format!("/api/candidate/{id}"), json!({"party_id": 404})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_delete_candidate() {
    let app = build_test_app().await;
    let id = create_candidate(&app, "Ada", "Lovelace", false).await;

    let response = delete(&app, &format!("/api/candidate/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "successfully deleted");
    assert_eq!(json["changes"], 1);

    let json = body_json(get(&app, &format!("/api/candidate/{id}")).await).await;
    assert_eq!(json["data"], Value::Null);

    let json = body_json(delete(&app, &format!("/api/candidate/{id}")).await).await;
    assert_eq!(json["changes"], 0);
}
