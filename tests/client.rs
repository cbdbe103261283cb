//! The typed client against a live server on an ephemeral port.

mod common;

use assert_matches::assert_matches;
use axum::{routing::get, Router};
use club_site::client::{ApiClient, ClientError};
use club_site::schema::{MatchStatus, Position};
use serde_json::json;
use tokio::net::TcpListener;

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn live_client() -> ApiClient {
    ApiClient::new(serve(common::test_app().await).await)
}

#[tokio::test]
async fn team_views_fill_defaults() {
    let client = live_client().await;

    let team = client
        .teams()
        .create(&json!({ "name": "Dynamo", "shortName": "DYN", "founded": 1927 }))
        .await
        .unwrap();
    assert_eq!(team.founded, "1927");
    assert_eq!(team.logo, "");
    assert_eq!(team.primary_color, "#000000");

    let fetched = client.teams().get(&team.id).await.unwrap();
    assert_eq!(fetched, team);

    let updated = client
        .teams()
        .update(&team.id, &json!({ "name": "Dynamo", "shortName": "DYN", "stadium": "Lobanovsky" }))
        .await
        .unwrap();
    assert_eq!(updated.venue, "Lobanovsky");
    assert_eq!(updated.founded, "");

    assert_eq!(client.teams().list().await.unwrap(), vec![updated]);
    client.teams().delete(&team.id).await.unwrap();
    assert!(client.teams().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn players_list_by_team() {
    let client = live_client().await;
    let home = client
        .teams()
        .create(&json!({ "name": "Home", "shortName": "HOM" }))
        .await
        .unwrap();

    client
        .players()
        .create(&json!({ "team_id": home.id, "name": "Keeper", "position": "goalkeeper" }))
        .await
        .unwrap();
    client
        .players()
        .create(&json!({ "name": "Free agent", "position": "forward" }))
        .await
        .unwrap();

    let players = client.players().list_by_team(&home.id).await.unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Keeper");
    assert_eq!(players[0].team_name, "Home");
    assert_eq!(players[0].position, Position::Goalkeeper);
    assert_eq!(players[0].number, 0);

    assert_eq!(client.players().list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn other_collections_round_trip() {
    let client = live_client().await;

    let coach = client.coaches().create(&json!({ "name": "Coach" })).await.unwrap();
    assert_eq!(coach.team_id, "");

    let fixture = client
        .matches()
        .create(&json!({ "date": "2024-05-01", "opponent": "Spartak" }))
        .await
        .unwrap();
    assert_eq!(fixture.status, MatchStatus::Scheduled);
    assert_eq!(fixture.venue, "");

    let news = client
        .news()
        .create(&json!({ "title": "T", "content": "C" }))
        .await
        .unwrap();
    assert_eq!(news.author, "");
    assert_eq!(news.category, "general");

    let media = client
        .media()
        .create(&json!({ "title": "Photo", "file_url": "a.jpg", "type": "image" }))
        .await
        .unwrap();
    assert_eq!(media.description, "");
}

#[tokio::test]
async fn server_errors_carry_the_server_message() {
    let client = live_client().await;

    let err = client.teams().get("missing").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Team not found");

    let err = client
        .players()
        .create(&json!({ "name": "Ivan" }))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "Missing required fields: position");
}

#[tokio::test]
async fn ids_with_reserved_characters_reach_the_item_route() {
    let client = live_client().await;

    for id in ["missing/x", "missing?x=1", "missing#x"] {
        let err = client.teams().get(id).await.unwrap_err();
        assert_eq!(err.status(), Some(404), "{id}");
        assert_eq!(err.to_string(), "Team not found", "{id}");
    }

    let err = client.players().delete("a/b").await.unwrap_err();
    assert_eq!(err.to_string(), "Player not found");
}

#[tokio::test]
async fn error_without_json_body_reports_the_status() {
    let app = Router::new().route(
        "/api/teams",
        get(|| async { (axum::http::StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let client = ApiClient::new(serve(app).await);

    let err = client.teams().list().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 502");
}

#[tokio::test]
async fn unparsable_success_body_is_a_decode_error() {
    let app = Router::new().route("/api/teams", get(|| async { "not json" }));
    let client = ApiClient::new(serve(app).await);

    let err = client.teams().list().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to parse server response");
    assert_matches!(err, ClientError::Decode(_));
}

#[tokio::test]
async fn unreachable_server_names_the_action() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(format!("http://{addr}"));
    let err = client.teams().list().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to fetch teams. Please check if the server is running."
    );

    let err = client.players().delete("p1").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to delete player. Please check if the server is running."
    );
}
