use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::client::{settle, ClientConfig, ErrorMode, RivalsApi};
use crate::endpoint::{Endpoint, ListQuery, Platform, SeasonKey};
use crate::error::Error;
use crate::types::*;

/// Non-blocking client. Calls suspend only while the request is in flight.
///
/// The connection pool is released by [`RivalsClient::close`] or when the
/// client is dropped, so keeping the client in a scope is enough to release
/// it on every exit path.
#[derive(Debug)]
pub struct RivalsClient {
    client: Option<reqwest::Client>,
    base_url: Url,
    error_mode: ErrorMode,
}

impl RivalsClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(ClientConfig::new(api_key))
    }

    pub fn from_env() -> Result<Self, Error> {
        Self::with_config(ClientConfig::from_env()?)
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        Ok(Self {
            client: Some(
                reqwest::Client::builder()
                    .default_headers(config.headers()?)
                    .build()?,
            ),
            base_url: config.parsed_base_url()?,
            error_mode: config.mode(),
        })
    }

    pub fn error_mode(&self) -> ErrorMode {
        self.error_mode
    }

    /// A handle on the same connection pool that answers with `mode` instead
    /// of the client default. `self` keeps its own mode.
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), rivalsapi::Error> {
    /// use rivalsapi::{ErrorMode, RivalsApi, RivalsClient};
    ///
    /// let client = RivalsClient::new("your-api-key")?;
    /// let hulk = client.with_error_mode(ErrorMode::Raise).hero("hulk").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_error_mode(&self, mode: ErrorMode) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            error_mode: mode,
        }
    }

    /// Releases this handle's connection pool. Calling it again does nothing;
    /// requests made afterwards fail with [`Error::Closed`].
    pub fn close(&mut self) {
        if self.client.take().is_some() {
            tracing::debug!("Closed client for {}", self.base_url);
        }
    }

    pub fn is_closed(&self) -> bool {
        self.client.is_none()
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<Option<T>, Error> {
        let client = self.client.as_ref().ok_or(Error::Closed)?;
        let url = endpoint.url(&self.base_url)?;
        tracing::debug!("Requesting from endpoint {}", url);

        let response = client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        settle(url.as_str(), status, &body, self.error_mode)
    }
}

#[async_trait]
impl RivalsApi for RivalsClient {
    async fn hero(&self, hero: &str) -> Result<Option<Hero>, Error> {
        self.fetch(Endpoint::Hero(hero)).await
    }
    async fn heroes(&self) -> Result<Option<Vec<Hero>>, Error> {
        self.fetch(Endpoint::AllHeroes).await
    }
    async fn hero_stats(&self, hero: &str) -> Result<Option<HeroStat>, Error> {
        self.fetch(Endpoint::HeroStats(hero)).await
    }
    async fn hero_leaderboard(
        &self,
        hero: &str,
        platform: Platform,
    ) -> Result<Option<HeroLeaderboard>, Error> {
        self.fetch(Endpoint::HeroLeaderboard(hero, platform)).await
    }
    async fn hero_costumes(&self, hero: &str) -> Result<Option<Vec<Costume>>, Error> {
        let costumes: Option<Vec<Costume>> = self.fetch(Endpoint::HeroCostumes(hero)).await?;
        Ok(costumes.map(|costumes| costumes.into_iter().map(|c| c.worn_by(hero)).collect()))
    }
    async fn costume(
        &self,
        hero: &str,
        costume_id: &str,
    ) -> Result<Option<CostumeDetail>, Error> {
        let detail: Option<CostumeDetail> = self.fetch(Endpoint::Costume(hero, costume_id)).await?;
        Ok(detail.map(|detail| detail.worn_by(hero)))
    }
    async fn achievements(&self, query: &ListQuery) -> Result<Option<AchievementList>, Error> {
        self.fetch(Endpoint::Achievements(query)).await
    }
    async fn achievement(&self, name: &str) -> Result<Option<Achievement>, Error> {
        self.fetch(Endpoint::Achievement(name)).await
    }
    async fn items(&self, query: &ListQuery) -> Result<Option<ItemList>, Error> {
        self.fetch(Endpoint::Items(query)).await
    }
    async fn item(&self, id: &str) -> Result<Option<Item>, Error> {
        self.fetch(Endpoint::Item(id)).await
    }
    async fn battlepass(&self, season: SeasonKey) -> Result<Option<BattlePass>, Error> {
        self.fetch(Endpoint::BattlePass(&season)).await
    }
    async fn maps(&self, query: &ListQuery) -> Result<Option<MapList>, Error> {
        self.fetch(Endpoint::Maps(query)).await
    }
}
