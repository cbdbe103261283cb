//! Demo content for a fresh database.

use anyhow::Result;
use sqlx::{Pool, Sqlite};

use crate::{
    crud::{crud_count_teams, crud_create_player, crud_create_team},
    schema::{PlayerInput, PlayerStats, Position, TeamInput, TeamStats},
};

/// Insert one demo team with a player in every position, but only when the
/// teams table is empty. Returns whether anything was written.
///
/// Runs in one transaction: a failure leaves the database untouched.
pub async fn seed_demo_data(db: &Pool<Sqlite>) -> Result<bool> {
    let mut tx = db.begin().await?;
    if crud_count_teams(&mut *tx).await? > 0 {
        return Ok(false);
    }

    let team = crud_create_team(
        &mut *tx,
        &TeamInput {
            name: "Demo Football Club".to_string(),
            short_name: "DFC".to_string(),
            logo: None,
            background_image: None,
            primary_color: "#000000".to_string(),
            secondary_color: "#ffffff".to_string(),
            description: None,
            coach: None,
            founded_year: None,
            stadium: None,
            address: None,
            city: None,
            country: None,
            website: None,
            achievements: Vec::new(),
            social_links: Default::default(),
            stats: TeamStats::default(),
        },
    )
    .await?;

    let squad = [
        ("Demo Keeper", Position::Goalkeeper, 1, 25, 190, 85),
        ("Demo Defender", Position::Defender, 4, 23, 185, 80),
        ("Demo Midfielder", Position::Midfielder, 8, 24, 180, 75),
        ("Demo Forward", Position::Forward, 9, 22, 178, 70),
    ];

    for (name, position, number, age, height, weight) in squad {
        crud_create_player(
            &mut *tx,
            &PlayerInput {
                team_id: Some(team.id.clone()),
                team_name: Some(team.name.clone()),
                name: name.to_string(),
                position,
                number: Some(number),
                nationality: None,
                age: Some(age),
                height: Some(height),
                weight: Some(weight),
                photo: None,
                stats: PlayerStats::default(),
            },
        )
        .await?;
    }
    tx.commit().await?;

    tracing::info!(team_id = %team.id, players = squad.len(), "seeded demo data");
    Ok(true)
}
