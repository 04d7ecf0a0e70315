use std::fmt;
use std::str::FromStr;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const BASE_URL: &str = "https://marvelrivalsapi.com/api/v1/";

const ASSET_URL: &str = "https://marvelrivalsapi.com/rivals";

/// Turns a relative asset path from a response into an absolute URL.
/// Paths that are already absolute are returned unchanged.
pub fn image_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{ASSET_URL}{path}")
    } else {
        format!("{ASSET_URL}/{path}")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[default]
    Pc,
    PlayStation,
    Xbox,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Pc => "pc",
            Platform::PlayStation => "ps",
            Platform::Xbox => "xbox",
        }
    }

    /// Maps the `login_os` code of a player record. Unknown codes count as PC.
    pub fn from_login_os(code: &str) -> Self {
        match code {
            "2" => Platform::PlayStation,
            "3" => Platform::Xbox,
            _ => Platform::Pc,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pc" => Ok(Platform::Pc),
            "ps" | "playstation" => Ok(Platform::PlayStation),
            "xbox" => Ok(Platform::Xbox),
            other => Err(format!("unknown platform '{other}', expected pc, ps or xbox")),
        }
    }
}

/// Search and paging parameters of the listing endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    fn pairs(&self, with_search: bool) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if with_search {
            if let Some(search) = &self.search {
                pairs.push(("s", search.clone()));
            }
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Battle pass season as the caller wrote it. The API accepts fractional
/// seasons, so the value is kept as text and never reinterpreted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeasonKey(String);

impl SeasonKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<f64> for SeasonKey {
    fn from(season: f64) -> Self {
        // Debug keeps the fractional part: 1.0 renders as "1.0", not "1"
        Self(format!("{season:?}"))
    }
}

impl From<u32> for SeasonKey {
    fn from(season: u32) -> Self {
        Self(season.to_string())
    }
}

impl fmt::Display for SeasonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum Endpoint<'a> {
    Hero(&'a str),
    AllHeroes,
    HeroStats(&'a str),
    HeroLeaderboard(&'a str, Platform),
    HeroCostumes(&'a str),
    Costume(&'a str, &'a str),
    Achievements(&'a ListQuery),
    Achievement(&'a str),
    Items(&'a ListQuery),
    Item(&'a str),
    BattlePass(&'a SeasonKey),
    Maps(&'a ListQuery),
}

impl Endpoint<'_> {
    fn segments(&self) -> Vec<&str> {
        match *self {
            Endpoint::Hero(hero) => vec!["heroes", "hero", hero],
            Endpoint::AllHeroes => vec!["heroes"],
            Endpoint::HeroStats(hero) => vec!["heroes", "hero", hero, "stats"],
            Endpoint::HeroLeaderboard(hero, _) => vec!["heroes", "leaderboard", hero],
            Endpoint::HeroCostumes(hero) => vec!["heroes", "hero", hero, "costumes"],
            Endpoint::Costume(hero, costume) => vec!["heroes", "hero", hero, "costume", costume],
            Endpoint::Achievements(_) => vec!["achievements"],
            Endpoint::Achievement(name) => vec!["achievements", "achievement", name],
            Endpoint::Items(_) => vec!["items"],
            Endpoint::Item(id) => vec!["items", "item", id],
            Endpoint::BattlePass(_) => vec!["battlepass"],
            Endpoint::Maps(_) => vec!["maps"],
        }
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        match *self {
            Endpoint::HeroLeaderboard(_, platform) => vec![("platform", platform.to_string())],
            Endpoint::Achievements(query) | Endpoint::Items(query) => query.pairs(true),
            Endpoint::Maps(query) => query.pairs(false),
            Endpoint::BattlePass(season) => vec![("season", season.to_string())],
            _ => Vec::new(),
        }
    }

    /// Resolves the endpoint against `base`. Segments are percent-encoded and
    /// query pairs appear in a fixed order.
    pub(crate) fn url(&self, base: &Url) -> Result<Url, Error> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::BaseUrl {
                url: base.to_string(),
                reason: "cannot be a base".into(),
            })?
            .pop_if_empty()
            .extend(self.segments());

        let query = self.query();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn base() -> Url {
        Url::parse(BASE_URL).unwrap()
    }

    #[test]
    fn test_hero_path() {
        let url = Endpoint::Hero("hulk").url(&base()).unwrap();
        assert_eq!(url.as_str(), "https://marvelrivalsapi.com/api/v1/heroes/hero/hulk");
    }

    #[test]
    fn test_segments_are_encoded() {
        let url = Endpoint::Costume("jeff the land shark", "a/b").url(&base()).unwrap();
        assert_eq!(
            url.path(),
            "/api/v1/heroes/hero/jeff%20the%20land%20shark/costume/a%2Fb"
        );
    }

    #[test]
    fn test_base_without_trailing_slash() {
        let base = Url::parse("http://127.0.0.1:1234/api/v1").unwrap();
        let url = Endpoint::AllHeroes.url(&base).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:1234/api/v1/heroes");
    }

    #[test]
    fn test_list_query_order() {
        let query = ListQuery::new().limit(5).search("win").page(2);
        let url = Endpoint::Achievements(&query).url(&base()).unwrap();
        assert_eq!(url.query(), Some("s=win&page=2&limit=5"));

        // maps have no search parameter
        let url = Endpoint::Maps(&query).url(&base()).unwrap();
        assert_eq!(url.query(), Some("page=2&limit=5"));

        let url = Endpoint::Items(&ListQuery::new()).url(&base()).unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_leaderboard_platform() {
        let url = Endpoint::HeroLeaderboard("storm", Platform::Xbox)
            .url(&base())
            .unwrap();
        assert_eq!(url.path(), "/api/v1/heroes/leaderboard/storm");
        assert_eq!(url.query(), Some("platform=xbox"));
    }

    #[test]
    fn test_season_key_is_opaque() {
        assert_eq!(SeasonKey::from(1.0).as_str(), "1.0");
        assert_eq!(SeasonKey::from(1.5).as_str(), "1.5");
        assert_eq!(SeasonKey::from(2u32).as_str(), "2");

        let season = SeasonKey::from(1.0);
        let url = Endpoint::BattlePass(&season).url(&base()).unwrap();
        assert_eq!(url.query(), Some("season=1.0"));
    }

    #[test]
    fn test_image_url() {
        assert_eq!(
            image_url("/heroes/hulk.png"),
            "https://marvelrivalsapi.com/rivals/heroes/hulk.png"
        );
        assert_eq!(
            image_url("items/a.png"),
            "https://marvelrivalsapi.com/rivals/items/a.png"
        );
        assert_eq!(image_url("https://cdn.example/a.png"), "https://cdn.example/a.png");
    }

    #[test]
    fn test_platform_from_login_os() {
        assert_eq!(Platform::from_login_os("1"), Platform::Pc);
        assert_eq!(Platform::from_login_os("2"), Platform::PlayStation);
        assert_eq!(Platform::from_login_os("3"), Platform::Xbox);
        assert_eq!(Platform::from_login_os("9"), Platform::Pc);
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("PS".parse::<Platform>(), Ok(Platform::PlayStation));
        assert_eq!("xbox".parse::<Platform>(), Ok(Platform::Xbox));
        assert!("switch".parse::<Platform>().is_err());
    }
}
