use std::net::{IpAddr, SocketAddr};

use anyhow::{anyhow, Context, Result};

/// Server configuration loaded from environment variables.
///
/// | Env Var                   | Default                   |
/// |---------------------------|---------------------------|
/// | `HOST`                    | `0.0.0.0`                 |
/// | `PORT`                    | `3001`                    |
/// | `DATABASE_URL`            | `sqlite:database.sqlite`  |
/// | `CORS_ORIGINS`            | `http://localhost:5173`   |
/// | `ENFORCE_TEAM_REFERENCES` | `true`                    |
/// | `SEED_DEMO_DATA`          | `true`                    |
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    /// Allowed CORS origins. A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// Reject player/coach writes whose `team_id` names no existing team.
    pub enforce_team_refs: bool,
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3001,
            database_url: "sqlite:database.sqlite".to_string(),
            cors_origins: vec!["http://localhost:5173".to_string()],
            enforce_team_refs: true,
            seed_demo_data: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults
    /// for absent keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let host = match lookup("HOST") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("HOST must be an IP address, got {raw:?}"))?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a number, got {raw:?}"))?,
            None => defaults.port,
        };

        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.cors_origins,
        };

        let enforce_team_refs = match lookup("ENFORCE_TEAM_REFERENCES") {
            Some(raw) => parse_flag("ENFORCE_TEAM_REFERENCES", &raw)?,
            None => defaults.enforce_team_refs,
        };

        let seed_demo_data = match lookup("SEED_DEMO_DATA") {
            Some(raw) => parse_flag("SEED_DEMO_DATA", &raw)?,
            None => defaults.seed_demo_data,
        };

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            enforce_team_refs,
            seed_demo_data,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("{key} must be a boolean, got {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.port, 3001);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3001");
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert!(config.enforce_team_refs);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,,"),
            ("ENFORCE_TEAM_REFERENCES", "off"),
            ("SEED_DEMO_DATA", "0"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert!(!config.enforce_team_refs);
        assert!(!config.seed_demo_data);
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn wildcard_origin_is_detected() {
        let config = Config::from_lookup(lookup_from(&[("CORS_ORIGINS", "*")])).unwrap();
        assert!(config.allows_any_origin());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("PORT", "eighty")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("HOST", "localhost")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("SEED_DEMO_DATA", "maybe")])).is_err());
    }
}
