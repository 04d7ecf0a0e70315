//! Thread-blocking counterpart of [`RivalsClient`](crate::RivalsClient).
//!
//! Same operations, same [`ErrorMode`] semantics; each call occupies the
//! calling thread until the response is decoded. Do not use it from inside an
//! async runtime.

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::client::{settle, ClientConfig, ErrorMode};
use crate::endpoint::{Endpoint, ListQuery, Platform, SeasonKey};
use crate::error::Error;
use crate::types::*;

#[derive(Debug)]
pub struct BlockingRivalsClient {
    client: Option<reqwest::blocking::Client>,
    base_url: Url,
    error_mode: ErrorMode,
}

impl BlockingRivalsClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(ClientConfig::new(api_key))
    }

    pub fn from_env() -> Result<Self, Error> {
        Self::with_config(ClientConfig::from_env()?)
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        Ok(Self {
            client: Some(
                reqwest::blocking::Client::builder()
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

    /// See [`RivalsClient::with_error_mode`](crate::RivalsClient::with_error_mode).
    pub fn with_error_mode(&self, mode: ErrorMode) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            error_mode: mode,
        }
    }

    /// Releases this handle's connection pool; idempotent.
    pub fn close(&mut self) {
        if self.client.take().is_some() {
            tracing::debug!("Closed blocking client for {}", self.base_url);
        }
    }

    pub fn is_closed(&self) -> bool {
        self.client.is_none()
    }

    fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<Option<T>, Error> {
        let client = self.client.as_ref().ok_or(Error::Closed)?;
        let url = endpoint.url(&self.base_url)?;
        tracing::debug!("Requesting from endpoint {}", url);

        let response = client.get(url.clone()).send()?;
        let status = response.status();
        let body = response.bytes()?;

        settle(url.as_str(), status, &body, self.error_mode)
    }

    /// Hero-keyed calls take a name, an id or a [`HeroName`](crate::HeroName).
    pub fn hero(&self, hero: impl AsRef<str>) -> Result<Option<Hero>, Error> {
        self.fetch(Endpoint::Hero(hero.as_ref()))
    }

    pub fn heroes(&self) -> Result<Option<Vec<Hero>>, Error> {
        self.fetch(Endpoint::AllHeroes)
    }

    pub fn hero_stats(&self, hero: impl AsRef<str>) -> Result<Option<HeroStat>, Error> {
        self.fetch(Endpoint::HeroStats(hero.as_ref()))
    }

    pub fn hero_leaderboard(
        &self,
        hero: impl AsRef<str>,
        platform: Platform,
    ) -> Result<Option<HeroLeaderboard>, Error> {
        self.fetch(Endpoint::HeroLeaderboard(hero.as_ref(), platform))
    }

    pub fn hero_costumes(&self, hero: impl AsRef<str>) -> Result<Option<Vec<Costume>>, Error> {
        let hero = hero.as_ref();
        let costumes: Option<Vec<Costume>> = self.fetch(Endpoint::HeroCostumes(hero))?;
        Ok(costumes.map(|costumes| costumes.into_iter().map(|c| c.worn_by(hero)).collect()))
    }

    pub fn costume(
        &self,
        hero: impl AsRef<str>,
        costume_id: &str,
    ) -> Result<Option<CostumeDetail>, Error> {
        let hero = hero.as_ref();
        let detail: Option<CostumeDetail> = self.fetch(Endpoint::Costume(hero, costume_id))?;
        Ok(detail.map(|detail| detail.worn_by(hero)))
    }

    pub fn achievements(&self, query: &ListQuery) -> Result<Option<AchievementList>, Error> {
        self.fetch(Endpoint::Achievements(query))
    }

    pub fn achievement(&self, name: &str) -> Result<Option<Achievement>, Error> {
        self.fetch(Endpoint::Achievement(name))
    }

    pub fn items(&self, query: &ListQuery) -> Result<Option<ItemList>, Error> {
        self.fetch(Endpoint::Items(query))
    }

    pub fn item(&self, id: &str) -> Result<Option<Item>, Error> {
        self.fetch(Endpoint::Item(id))
    }

    pub fn battlepass(&self, season: SeasonKey) -> Result<Option<BattlePass>, Error> {
        self.fetch(Endpoint::BattlePass(&season))
    }

    pub fn maps(&self, query: &ListQuery) -> Result<Option<MapList>, Error> {
        self.fetch(Endpoint::Maps(query))
    }
}
