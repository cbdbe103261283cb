//! Command-line admin for the club site: browse and edit every collection
//! through the REST API.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use club_site::client::{ApiClient, Endpoint, Resource};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "club_admin", version, about = "Manage club site content")]
struct Cli {
    /// Server root, without the `/api` suffix.
    #[arg(long, env = "CLUB_API_URL", default_value = "http://localhost:3001")]
    base_url: String,

    #[command(subcommand)]
    entity: Entity,
}

#[derive(Subcommand, Debug)]
enum Entity {
    Teams {
        #[command(subcommand)]
        action: Action,
    },
    Players {
        #[command(subcommand)]
        action: Action,
    },
    Coaches {
        #[command(subcommand)]
        action: Action,
    },
    Matches {
        #[command(subcommand)]
        action: Action,
    },
    News {
        #[command(subcommand)]
        action: Action,
    },
    Media {
        #[command(subcommand)]
        action: Action,
    },
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Print every record.
    List {
        /// Only players of this team.
        #[arg(long)]
        team_id: Option<String>,
    },
    Get {
        id: String,
    },
    /// Create a record from inline JSON or `@path/to/file.json`.
    Create {
        #[arg(long)]
        data: String,
    },
    /// Replace a record. Fields left out of the body are cleared.
    Update {
        id: String,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let client = ApiClient::new(cli.base_url);

    match cli.entity {
        Entity::Players {
            action: Action::List {
                team_id: Some(team_id),
            },
        } => print_json(&client.players().list_by_team(&team_id).await?),
        Entity::Teams { action } => run(client.teams(), action).await,
        Entity::Players { action } => run(client.players(), action).await,
        Entity::Coaches { action } => run(client.coaches(), action).await,
        Entity::Matches { action } => run(client.matches(), action).await,
        Entity::News { action } => run(client.news(), action).await,
        Entity::Media { action } => run(client.media(), action).await,
    }
}

async fn run<R: Resource>(endpoint: Endpoint<'_, R>, action: Action) -> Result<()> {
    match action {
        Action::List { team_id: Some(_) } => {
            bail!("--team-id only applies to players")
        }
        Action::List { team_id: None } => return print_json(&endpoint.list().await?),
        Action::Get { id } => return print_json(&endpoint.get(&id).await?),
        Action::Create { data } => {
            let created = endpoint.create(&read_data(&data)?).await?;
            eprintln!("Created {}:", R::SINGULAR);
            print_json(&created)?;
        }
        Action::Update { id, data } => {
            let updated = endpoint.update(&id, &read_data(&data)?).await?;
            eprintln!("Updated {}:", R::SINGULAR);
            print_json(&updated)?;
        }
        Action::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete {} {}?", R::SINGULAR, id))? {
                eprintln!("Aborted.");
                return Ok(());
            }
            endpoint.delete(&id).await?;
            eprintln!("Deleted {} {}.", R::SINGULAR, id);
        }
    }

    // Show the collection as it stands after the write.
    eprintln!("Current {}:", R::PLURAL);
    print_json(&endpoint.list().await?)
}

/// Inline JSON, or the contents of a file when prefixed with `@`.
fn read_data(data: &str) -> Result<Value> {
    let text = match data.strip_prefix('@') {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("can't read {path}"))?
        }
        None => data.to_string(),
    };
    serde_json::from_str(&text).context("--data is not valid JSON")
}

fn confirm(question: &str) -> Result<bool> {
    eprint!("{question} [y/N] ");
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
