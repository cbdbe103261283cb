mod common;

use club_site::{
    crud::{crud_count_teams, crud_get_players, crud_get_teams},
    seed::seed_demo_data,
};

#[tokio::test]
async fn seeds_an_empty_database_once() {
    let db = common::test_db().await;

    assert!(seed_demo_data(db.pool()).await.unwrap());
    assert!(!seed_demo_data(db.pool()).await.unwrap());

    let teams = crud_get_teams(db.pool()).await.unwrap();
    assert_eq!(teams.len(), 1);

    let players = crud_get_players(db.pool(), Some(&teams[0].id)).await.unwrap();
    let positions: Vec<&str> = players.iter().map(|p| p.position.as_str()).collect();
    assert_eq!(positions, vec!["goalkeeper", "defender", "midfielder", "forward"]);
    assert!(players
        .iter()
        .all(|p| p.team_name.as_deref() == Some(teams[0].name.as_str())));
}

#[tokio::test]
async fn failed_seed_leaves_no_partial_data() {
    let db = common::test_db().await;
    sqlx::query("DROP TABLE players")
        .execute(db.pool())
        .await
        .unwrap();

    assert!(seed_demo_data(db.pool()).await.is_err());
    assert_eq!(crud_count_teams(db.pool()).await.unwrap(), 0);
}
