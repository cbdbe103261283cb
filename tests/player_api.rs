//! HTTP-level tests for `/api/players`, including the team filter and the
//! team reference rule in both modes.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create, delete, get, id_of, post_json, put_json, test_app, test_db,
};
use serde_json::{json, Value};

async fn create_team(app: &axum::Router, name: &str) -> String {
    let team = create(app, "/api/teams", json!({ "name": name, "shortName": name })).await;
    id_of(&team)
}

fn names(players: &Value) -> Vec<&str> {
    players
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn create_fills_team_name_from_the_team() {
    let app = test_app().await;
    let team_id = create_team(&app, "Dynamo").await;

    let player = create(
        &app,
        "/api/players",
        json!({
            "team_id": team_id,
            "name": "Ivan Petrov",
            "position": "Forward",
            "number": 9,
            "stats": { "appearances": 30, "goals": 15, "yellowCards": 2 }
        }),
    )
    .await;

    assert_eq!(player["team_name"], "Dynamo");
    assert_eq!(player["position"], "forward");
    assert_eq!(player["number"], 9);
    assert_eq!(player["stats"]["games"], 30);
    assert_eq!(player["stats"]["goals"], 15);
    assert_eq!(player["stats"]["yellowCards"], 2);
    assert_eq!(player["stats"]["redCards"], 0);
    assert_eq!(player["created_at"], player["updated_at"]);
}

#[tokio::test]
async fn position_must_be_known() {
    let app = test_app().await;
    let response = post_json(
        &app,
        "/api/players",
        json!({ "name": "Ivan", "position": "striker" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(&app, "/api/players", json!({ "name": "Ivan" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"]
        .as_str()
        .unwrap()
        .contains("position"));
}

#[tokio::test]
async fn filter_by_team_keeps_insertion_order() {
    let app = test_app().await;
    let home = create_team(&app, "Home").await;
    let away = create_team(&app, "Away").await;

    for (name, team) in [("Zed", &home), ("Amir", &away), ("Bo", &home), ("Cy", &home)] {
        create(
            &app,
            "/api/players",
            json!({ "team_id": team, "name": name, "position": "defender" }),
        )
        .await;
    }

    let all = body_json(get(&app, "/api/players").await).await;
    assert_eq!(names(&all), vec!["Zed", "Amir", "Bo", "Cy"]);

    let home_players = body_json(get(&app, &format!("/api/players?team_id={home}")).await).await;
    assert_eq!(names(&home_players), vec!["Zed", "Bo", "Cy"]);
    assert!(home_players
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["team_id"] == home.as_str()));

    let camel = body_json(get(&app, &format!("/api/players?teamId={away}")).await).await;
    assert_eq!(names(&camel), vec!["Amir"]);

    let nobody = body_json(get(&app, "/api/players?team_id=unknown").await).await;
    assert_eq!(nobody, json!([]));

    let blank = body_json(get(&app, "/api/players?team_id=").await).await;
    assert_eq!(names(&blank).len(), 4);
}

#[tokio::test]
async fn unknown_team_is_rejected_when_references_are_enforced() {
    let app = test_app().await;
    let response = post_json(
        &app,
        "/api/players",
        json!({ "team_id": "ghost", "name": "Ivan", "position": "midfielder" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Team not found");
    assert_eq!(body_json(get(&app, "/api/players").await).await, json!([]));
}

#[tokio::test]
async fn unknown_team_is_accepted_when_references_are_not_enforced() {
    let app = build_test_app(test_db().await, false);
    let player = create(
        &app,
        "/api/players",
        json!({
            "team_id": "ghost",
            "team_name": "Ghost FC",
            "name": "Ivan",
            "position": "midfielder"
        }),
    )
    .await;

    assert_eq!(player["team_id"], "ghost");
    assert_eq!(player["team_name"], "Ghost FC");

    let listed = body_json(get(&app, "/api/players?team_id=ghost").await).await;
    assert_eq!(names(&listed), vec!["Ivan"]);
}

#[tokio::test]
async fn team_rename_shows_up_on_players() {
    let app = test_app().await;
    let team_id = create_team(&app, "Old Name").await;
    let player = create(
        &app,
        "/api/players",
        json!({ "team_id": team_id, "name": "Ivan", "position": "goalkeeper" }),
    )
    .await;

    let response = put_json(
        &app,
        &format!("/api/teams/{team_id}"),
        json!({ "name": "New Name", "shortName": "NEW" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(get(&app, &format!("/api/players/{}", id_of(&player))).await).await;
    assert_eq!(fetched["team_name"], "New Name");
}

#[tokio::test]
async fn deleting_a_team_leaves_its_players() {
    let app = test_app().await;
    let team_id = create_team(&app, "Dynamo").await;
    let player = create(
        &app,
        "/api/players",
        json!({ "team_id": team_id, "name": "Ivan", "position": "goalkeeper" }),
    )
    .await;

    let response = delete(&app, &format!("/api/teams/{team_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let fetched = body_json(get(&app, &format!("/api/players/{}", id_of(&player))).await).await;
    assert_eq!(fetched["team_id"], team_id.as_str());
    assert_eq!(fetched["team_name"], "Dynamo");
}

#[tokio::test]
async fn update_replaces_fields_and_bumps_updated_at() {
    let app = test_app().await;
    let player = create(
        &app,
        "/api/players",
        json!({ "name": "Ivan", "position": "defender", "number": 4, "age": 21 }),
    )
    .await;
    let uri = format!("/api/players/{}", id_of(&player));

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let response = put_json(
        &app,
        &uri,
        json!({ "name": "Ivan", "position": "midfielder", "number": 8 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;

    assert_eq!(updated["position"], "midfielder");
    assert_eq!(updated["number"], 8);
    assert_eq!(updated["age"], json!(null));
    assert_eq!(updated["created_at"], player["created_at"]);
    assert_ne!(updated["updated_at"], player["updated_at"]);
}

#[tokio::test]
async fn unknown_player_is_404() {
    let app = test_app().await;
    assert_eq!(
        get(&app, "/api/players/nope").await.status(),
        StatusCode::NOT_FOUND
    );

    let response = put_json(
        &app,
        "/api/players/nope",
        json!({ "name": "Ivan", "position": "defender" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Player not found");

    assert_eq!(
        delete(&app, "/api/players/nope").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn ambiguous_team_filter_is_rejected() {
    let app = test_app().await;
    let home = create_team(&app, "Home").await;
    let away = create_team(&app, "Away").await;
    for (name, team) in [("Ann", &home), ("Bob", &away)] {
        create(
            &app,
            "/api/players",
            json!({ "team_id": team, "name": name, "position": "forward" }),
        )
        .await;
    }

    for query in [
        format!("team_id={home}&teamId={home}"),
        format!("team_id={home}&team_id={home}"),
    ] {
        let response = get(&app, &format!("/api/players?{query}")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{query}");
        let body = body_json(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid query string"));
    }

    let filtered = body_json(get(&app, &format!("/api/players?team_id={home}")).await).await;
    assert_eq!(names(&filtered), vec!["Ann"]);
}
