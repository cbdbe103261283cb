//! Typed HTTP client for the club site REST API.
//!
//! Each call checks the status code, surfaces the server's `{"error": ...}`
//! message when there is one, and maps wire records into the views in
//! [`views`].

use std::marker::PhantomData;

use reqwest::{header::ACCEPT, RequestBuilder, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::schema::{CoachSchema, MatchSchema, MediaSchema, NewsSchema, PlayerSchema, TeamSchema};

pub mod views;

pub use views::*;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never got an answer.
    #[error("Failed to {action}. Please check if the server is running.")]
    Unreachable {
        action: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse server response")]
    Decode(#[source] serde_json::Error),

    /// The base URL cannot carry a record id.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status for errors the server reported.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// One REST collection: where it lives, how it is named in messages, and
/// what its records look like on the wire and in the UI.
pub trait Resource {
    const PATH: &'static str;
    const SINGULAR: &'static str;
    const PLURAL: &'static str;

    type Wire: DeserializeOwned;
    type View: From<Self::Wire> + Serialize;
}

macro_rules! resource {
    ($marker:ident, $path:literal, $singular:literal, $plural:literal, $wire:ty, $view:ty) => {
        pub struct $marker;

        impl Resource for $marker {
            const PATH: &'static str = $path;
            const SINGULAR: &'static str = $singular;
            const PLURAL: &'static str = $plural;

            type Wire = $wire;
            type View = $view;
        }
    };
}

resource!(Teams, "teams", "team", "teams", TeamSchema, TeamView);
resource!(Players, "players", "player", "players", PlayerSchema, PlayerView);
resource!(Coaches, "coaches", "coach", "coaches", CoachSchema, CoachView);
resource!(Matches, "matches", "match", "matches", MatchSchema, MatchView);
resource!(News, "news", "news item", "news", NewsSchema, NewsView);
resource!(Media, "media", "media item", "media", MediaSchema, MediaView);

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// * `base_url` - Server root, e.g. `http://localhost:3001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn teams(&self) -> Endpoint<'_, Teams> {
        Endpoint::new(self)
    }

    pub fn players(&self) -> Endpoint<'_, Players> {
        Endpoint::new(self)
    }

    pub fn coaches(&self) -> Endpoint<'_, Coaches> {
        Endpoint::new(self)
    }

    pub fn matches(&self) -> Endpoint<'_, Matches> {
        Endpoint::new(self)
    }

    pub fn news(&self) -> Endpoint<'_, News> {
        Endpoint::new(self)
    }

    pub fn media(&self) -> Endpoint<'_, Media> {
        Endpoint::new(self)
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Send the request and return the body of a successful response.
    async fn execute(&self, request: RequestBuilder, action: &str) -> Result<String, ClientError> {
        let unreachable = |source| ClientError::Unreachable {
            action: action.to_string(),
            source,
        };

        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(unreachable)?;
        let status = response.status();
        let body = response.text().await.map_err(unreachable)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("HTTP error! status: {}", status.as_u16()));
            tracing::warn!(status = status.as_u16(), %message, "{action} failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
        serde_json::from_str(body).map_err(|e| {
            tracing::warn!("unparsable response body: {e}");
            ClientError::Decode(e)
        })
    }
}

/// CRUD calls for one collection.
pub struct Endpoint<'a, R> {
    api: &'a ApiClient,
    _resource: PhantomData<R>,
}

impl<'a, R: Resource> Endpoint<'a, R> {
    fn new(api: &'a ApiClient) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }

    pub async fn list(&self) -> Result<Vec<R::View>, ClientError> {
        let request = self.api.client.get(self.api.url(R::PATH));
        self.fetch_list(request).await
    }

    pub async fn get(&self, id: &str) -> Result<R::View, ClientError> {
        let request = self.api.client.get(self.item_url(id)?);
        self.fetch_one(request, &format!("fetch {}", R::SINGULAR))
            .await
    }

    pub async fn create<P: Serialize + ?Sized>(&self, payload: &P) -> Result<R::View, ClientError> {
        let request = self.api.client.post(self.api.url(R::PATH)).json(payload);
        self.fetch_one(request, &format!("create {}", R::SINGULAR))
            .await
    }

    /// Full replace of the record; send every field that should survive.
    pub async fn update<P: Serialize + ?Sized>(
        &self,
        id: &str,
        payload: &P,
    ) -> Result<R::View, ClientError> {
        let request = self.api.client.put(self.item_url(id)?).json(payload);
        self.fetch_one(request, &format!("update {}", R::SINGULAR))
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let request = self.api.client.delete(self.item_url(id)?);
        self.api
            .execute(request, &format!("delete {}", R::SINGULAR))
            .await?;
        Ok(())
    }

    /// Collection URL with `id` appended as one percent-encoded segment.
    fn item_url(&self, id: &str) -> Result<Url, ClientError> {
        let collection = self.api.url(R::PATH);
        let mut url = Url::parse(&collection)
            .map_err(|e| ClientError::InvalidUrl(format!("{collection}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(collection.clone()))?
            .push(id);
        Ok(url)
    }

    async fn fetch_list(&self, request: RequestBuilder) -> Result<Vec<R::View>, ClientError> {
        let body = self
            .api
            .execute(request, &format!("fetch {}", R::PLURAL))
            .await?;
        let records: Vec<R::Wire> = ApiClient::decode(&body)?;
        Ok(records
            .into_iter()
            .map(<R::View as From<R::Wire>>::from)
            .collect())
    }

    async fn fetch_one(&self, request: RequestBuilder, action: &str) -> Result<R::View, ClientError> {
        let body = self.api.execute(request, action).await?;
        let record: R::Wire = ApiClient::decode(&body)?;
        Ok(<R::View as From<R::Wire>>::from(record))
    }
}

impl Endpoint<'_, Players> {
    /// Players whose `team_id` matches.
    pub async fn list_by_team(&self, team_id: &str) -> Result<Vec<PlayerView>, ClientError> {
        let request = self
            .api
            .client
            .get(self.api.url(Players::PATH))
            .query(&[("team_id", team_id)]);
        self.fetch_list(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:3001/");
        assert_eq!(client.base_url(), "http://localhost:3001");
        assert_eq!(client.url("teams"), "http://localhost:3001/api/teams");
        assert_eq!(
            client.players().item_url("p1").unwrap().as_str(),
            "http://localhost:3001/api/players/p1"
        );
    }

    #[test]
    fn item_ids_are_percent_encoded() {
        let client = ApiClient::new("http://localhost:3001");
        assert_eq!(
            client.teams().item_url("a/b?c#d").unwrap().as_str(),
            "http://localhost:3001/api/teams/a%2Fb%3Fc%23d"
        );
    }

    #[test]
    fn unusable_base_url_is_reported() {
        let client = ApiClient::new("not a url");
        assert_matches::assert_matches!(
            client.teams().item_url("t1"),
            Err(ClientError::InvalidUrl(_))
        );
    }

    #[test]
    fn errors_display_the_user_facing_message() {
        let err = ClientError::Decode(serde_json::from_str::<u8>("x").unwrap_err());
        assert_eq!(err.to_string(), "Failed to parse server response");
        assert_eq!(err.status(), None);

        let err = ClientError::Api {
            status: 404,
            message: "Team not found".to_string(),
        };
        assert_eq!(err.to_string(), "Team not found");
        assert_eq!(err.status(), Some(404));
    }
}
