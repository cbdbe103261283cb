pub mod client;
pub mod config;
pub mod crud;
pub mod db;
pub mod error;
pub mod handler;
pub mod model;
pub mod route;
pub mod schema;
pub mod seed;

use db::Database;

pub struct AppState {
    pub db: Database,
    /// Reject player/coach writes that name a team which does not exist.
    pub enforce_team_refs: bool,
}

impl AppState {
    pub fn new(db: Database, enforce_team_refs: bool) -> Self {
        Self {
            db,
            enforce_team_refs,
        }
    }
}
