mod common;

use axum::http::StatusCode;
use common::{body_json, create, delete, get, id_of, post_json, put_json, test_app};
use serde_json::json;

#[tokio::test]
async fn media_crud() {
    let app = test_app().await;
    let created = create(
        &app,
        "/api/media",
        json!({
            "title": "Training day",
            "fileUrl": "https://cdn.example/training.jpg",
            "type": "image"
        }),
    )
    .await;
    let uri = format!("/api/media/{}", id_of(&created));

    assert_eq!(created["file_url"], "https://cdn.example/training.jpg");
    assert_eq!(created["type"], "image");
    assert_eq!(created["description"], json!(null));

    let response = put_json(
        &app,
        &uri,
        json!({
            "title": "Training day",
            "description": "Full session",
            "file_url": "https://cdn.example/training.mp4",
            "type": "video"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["type"], "video");
    assert_eq!(updated["description"], "Full session");

    let listed = body_json(get(&app, "/api/media").await).await;
    assert_eq!(listed, json!([updated]));

    assert_eq!(delete(&app, &uri).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(get(&app, &uri).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn media_type_is_restricted() {
    let app = test_app().await;
    let response = post_json(
        &app,
        "/api/media",
        json!({ "title": "Song", "file_url": "a.mp3", "type": "audio" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(&app, "/api/media", json!({ "title": "Song" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Missing required fields: file_url, type"
    );
}
