use std::env;
use std::fmt;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::endpoint::{ListQuery, Platform, SeasonKey, BASE_URL};
use crate::error::{ApiError, EnvVarError, Error, JSONError};
use crate::types::*;

pub const API_KEY_VAR: &str = "MARVEL_RIVALS_API_KEY";
pub const RAISE_ERRORS_VAR: &str = "MARVEL_RIVALS_RAISE_ERRORS";

/// What a call does with a negative answer from the API (404 or any other
/// non-2xx status). Transport and decode failures are always returned as errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Resolve to `Ok(None)`.
    #[default]
    Suppress,
    /// Resolve to [`Error::NotFound`] or [`Error::Api`].
    Raise,
}

impl ErrorMode {
    pub fn from_flag(raise: bool) -> Self {
        if raise {
            ErrorMode::Raise
        } else {
            ErrorMode::Suppress
        }
    }
}

/// Construction-time settings shared by both clients.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    error_mode: ErrorMode,
    base_url: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            error_mode: ErrorMode::default(),
            base_url: BASE_URL.into(),
        }
    }

    // requires MARVEL_RIVALS_API_KEY env var
    // can use dotenv
    pub fn from_env() -> Result<Self, Error> {
        let api_key = env::var(API_KEY_VAR).map_err(|e| EnvVarError::new(API_KEY_VAR, e))?;
        let raise = env::var(RAISE_ERRORS_VAR)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self::new(api_key).error_mode(ErrorMode::from_flag(raise)))
    }

    pub fn error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn mode(&self) -> ErrorMode {
        self.error_mode
    }

    pub(crate) fn headers(&self) -> Result<HeaderMap, Error> {
        let mut key = HeaderValue::from_str(&self.api_key)?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("accept", HeaderValue::from_static("application/json"));
        headers.insert("x-api-key", key);
        Ok(headers)
    }

    pub(crate) fn parsed_base_url(&self) -> Result<Url, Error> {
        let url = Url::parse(&self.base_url).map_err(|e| Error::BaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(Error::BaseUrl {
                url: self.base_url.clone(),
                reason: "cannot be a base".into(),
            });
        }
        Ok(url)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("error_mode", &self.error_mode)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn error_message(body: &[u8]) -> Option<String> {
    let body: Value = serde_json::from_slice(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|field| body.get(field).and_then(Value::as_str))
        .map(str::to_owned)
}

/// Turns a completed response into the call's outcome. Both clients go
/// through here, so their error semantics cannot diverge.
pub(crate) fn settle<T: DeserializeOwned>(
    endpoint: &str,
    status: StatusCode,
    body: &[u8],
    mode: ErrorMode,
) -> Result<Option<T>, Error> {
    if status.is_success() {
        let value = serde_json::from_slice(body).map_err(|e| JSONError::new(endpoint, e))?;
        return Ok(Some(value));
    }

    let error = if status == StatusCode::NOT_FOUND {
        Error::NotFound {
            status,
            endpoint: endpoint.into(),
        }
    } else {
        ApiError::new(status, endpoint, error_message(body)).into()
    };

    match mode {
        ErrorMode::Raise => Err(error),
        ErrorMode::Suppress => {
            tracing::debug!("Suppressed API error: {}", error);
            Ok(None)
        }
    }
}

/// The async operation set. Every call is one round trip; `Ok(None)` is the
/// suppressed negative answer described by [`ErrorMode`].
#[async_trait]
pub trait RivalsApi {
    async fn hero(&self, hero: &str) -> Result<Option<Hero>, Error>;
    async fn heroes(&self) -> Result<Option<Vec<Hero>>, Error>;
    async fn hero_stats(&self, hero: &str) -> Result<Option<HeroStat>, Error>;
    async fn hero_leaderboard(
        &self,
        hero: &str,
        platform: Platform,
    ) -> Result<Option<HeroLeaderboard>, Error>;
    async fn hero_costumes(&self, hero: &str) -> Result<Option<Vec<Costume>>, Error>;
    async fn costume(&self, hero: &str, costume_id: &str)
        -> Result<Option<CostumeDetail>, Error>;
    async fn achievements(&self, query: &ListQuery) -> Result<Option<AchievementList>, Error>;
    async fn achievement(&self, name: &str) -> Result<Option<Achievement>, Error>;
    async fn items(&self, query: &ListQuery) -> Result<Option<ItemList>, Error>;
    async fn item(&self, id: &str) -> Result<Option<Item>, Error>;
    async fn battlepass(&self, season: SeasonKey) -> Result<Option<BattlePass>, Error>;
    async fn maps(&self, query: &ListQuery) -> Result<Option<MapList>, Error>;
}

#[cfg(test)]
mod test {
    use super::*;

    const ENDPOINT: &str = "https://marvelrivalsapi.com/api/v1/items/item/1";

    #[test]
    fn test_settle_success() {
        let value: Option<Value> =
            settle(ENDPOINT, StatusCode::OK, br#"{"id":"1"}"#, ErrorMode::Raise).unwrap();
        assert_eq!(value, Some(serde_json::json!({"id": "1"})));
    }

    #[test]
    fn test_settle_suppresses_api_errors() {
        for status in [StatusCode::NOT_FOUND, StatusCode::BAD_REQUEST, StatusCode::BAD_GATEWAY] {
            let value: Option<Value> = settle(ENDPOINT, status, b"", ErrorMode::Suppress).unwrap();
            assert_eq!(value, None);
        }
    }

    #[test]
    fn test_settle_raises_not_found() {
        let err = settle::<Value>(ENDPOINT, StatusCode::NOT_FOUND, b"{}", ErrorMode::Raise)
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(err.is_suppressible());
        assert!(err.to_string().contains(ENDPOINT));
    }

    #[test]
    fn test_settle_raises_api_error_with_message() {
        let body = br#"{"error": true, "message": "Invalid API key", "status": 401}"#;
        let err = settle::<Value>(ENDPOINT, StatusCode::UNAUTHORIZED, body, ErrorMode::Raise)
            .unwrap_err();
        match &err {
            Error::Api(api) => {
                assert_eq!(api.status, StatusCode::UNAUTHORIZED);
                assert_eq!(api.endpoint, ENDPOINT);
                assert_eq!(api.message.as_deref(), Some("Invalid API key"));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_settle_decode_failure_is_never_suppressed() {
        let err =
            settle::<Hero>(ENDPOINT, StatusCode::OK, b"<html>", ErrorMode::Suppress).unwrap_err();
        assert!(matches!(err, Error::JSON(_)));
        assert!(!err.is_suppressible());
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(error_message(br#"{"error":"nope"}"#).as_deref(), Some("nope"));
        assert_eq!(error_message(br#"{"error":true}"#), None);
        assert_eq!(error_message(b"gateway timeout"), None);
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new("asdf1234");
        assert_eq!(config.mode(), ErrorMode::Suppress);
        assert_eq!(config.parsed_base_url().unwrap().as_str(), BASE_URL);
        assert!(!format!("{config:?}").contains("asdf1234"));

        let headers = config.headers().unwrap();
        assert_eq!(headers["x-api-key"], "asdf1234");
        assert!(headers["x-api-key"].is_sensitive());
    }

    #[test]
    fn test_config_rejects_bad_input() {
        let err = ClientConfig::new("key").base_url("not a url").parsed_base_url();
        assert!(matches!(err, Err(Error::BaseUrl { .. })));

        let err = ClientConfig::new("key").base_url("mailto:a@b.c").parsed_base_url();
        assert!(matches!(err, Err(Error::BaseUrl { .. })));

        assert!(matches!(ClientConfig::new("bad\nkey").headers(), Err(Error::ApiKey(_))));
    }

    #[test]
    fn test_config_from_env() {
        dotenv::from_filename(".env.example").ok();
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.headers().unwrap()["x-api-key"], "asdf1234");
    }
}
