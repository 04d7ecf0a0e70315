use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::endpoint::Platform;

/// Ranked standing of a player for the current season. Players without a
/// ranked record come back as an empty object, which decodes to the zero season.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankSeason {
    pub rank_game_id: i64,
    pub level: u32,
    pub rank_score: String,
    pub max_level: u32,
    pub max_rank_score: String,
    /// unix seconds
    pub update_time: i64,
    pub win_count: u32,
    pub protect_score: i64,
    pub diff_score: String,
}

impl Default for RankSeason {
    fn default() -> Self {
        Self {
            rank_game_id: 0,
            level: 0,
            rank_score: "0".into(),
            max_level: 0,
            max_rank_score: "0".into(),
            update_time: 0,
            win_count: 0,
            protect_score: 0,
            diff_score: "0".into(),
        }
    }
}

impl RankSeason {
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.update_time, 0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub name: String,
    pub cur_head_icon_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rank_season: RankSeason,
    pub login_os: String,
}

impl PlayerInfo {
    pub fn platform(&self) -> Platform {
        Platform::from_login_os(&self.login_os)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardPlayer {
    pub info: PlayerInfo,
    pub player_uid: u64,
    pub matches: u32,
    pub wins: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    /// minutes, as a decimal string
    pub play_time: String,
    pub total_hero_damage: String,
    pub total_damage_taken: String,
    pub total_hero_heal: String,
    pub mvps: u32,
    pub svps: u32,
}

impl LeaderboardPlayer {
    fn per_match(&self, total: f64) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        total / self.matches as f64
    }

    pub fn win_rate(&self) -> f64 {
        self.per_match(self.wins as f64)
    }

    /// (kills + assists) / deaths, with zero deaths counted as one.
    pub fn kda(&self) -> f64 {
        (self.kills + self.assists) as f64 / self.deaths.max(1) as f64
    }

    pub fn avg_kills(&self) -> f64 {
        self.per_match(self.kills as f64)
    }

    pub fn avg_deaths(&self) -> f64 {
        self.per_match(self.deaths as f64)
    }

    pub fn avg_assists(&self) -> f64 {
        self.per_match(self.assists as f64)
    }

    /// Zero when the damage total is not a number.
    pub fn avg_hero_damage(&self) -> f64 {
        match self.total_hero_damage.trim().parse::<f64>() {
            Ok(damage) => self.per_match(damage),
            Err(_) => 0.0,
        }
    }

    pub fn mvp_rate(&self) -> f64 {
        self.per_match(self.mvps as f64)
    }
}

/// Players in the order the API ranked them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroLeaderboard {
    #[serde(default)]
    pub players: Vec<LeaderboardPlayer>,
}

impl HeroLeaderboard {
    pub fn top_players(&self, limit: usize) -> &[LeaderboardPlayer] {
        &self.players[..limit.min(self.players.len())]
    }

    // all sorts are stable and descending: ties keep the API order

    pub fn sort_by_wins(&self) -> Vec<&LeaderboardPlayer> {
        let mut players: Vec<_> = self.players.iter().collect();
        players.sort_by(|a, b| b.wins.cmp(&a.wins));
        players
    }

    pub fn sort_by_kda(&self) -> Vec<&LeaderboardPlayer> {
        let mut players: Vec<_> = self.players.iter().collect();
        players.sort_by(|a, b| b.kda().total_cmp(&a.kda()));
        players
    }

    pub fn sort_by_rank(&self) -> Vec<&LeaderboardPlayer> {
        let mut players: Vec<_> = self.players.iter().collect();
        players.sort_by(|a, b| b.info.rank_season.level.cmp(&a.info.rank_season.level));
        players
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn player(name: &str, wins: u32, kills: u32, deaths: u32, level: u32) -> LeaderboardPlayer {
        LeaderboardPlayer {
            info: PlayerInfo {
                name: name.into(),
                cur_head_icon_id: "30000001".into(),
                rank_season: RankSeason {
                    level,
                    ..Default::default()
                },
                login_os: "1".into(),
            },
            player_uid: 1,
            matches: 20,
            wins,
            kills,
            deaths,
            assists: 0,
            play_time: "100.5".into(),
            total_hero_damage: "4000".into(),
            total_damage_taken: "0".into(),
            total_hero_heal: "0".into(),
            mvps: 5,
            svps: 0,
        }
    }

    fn names(players: &[&LeaderboardPlayer]) -> Vec<String> {
        players.iter().map(|p| p.info.name.clone()).collect()
    }

    #[test]
    fn test_leaderboard_from_json() {
        let json = r###"
            {
              "players": [
                {
                  "info": {
                    "name": "shark",
                    "cur_head_icon_id": "30000001",
                    "rank_season": {
                      "rank_game_id": 1,
                      "level": 18,
                      "rank_score": "4200",
                      "max_level": 19,
                      "max_rank_score": "4500",
                      "update_time": 1735689600,
                      "win_count": 40,
                      "protect_score": 0,
                      "diff_score": "25"
                    },
                    "login_os": "2"
                  },
                  "player_uid": 123456,
                  "matches": 50,
                  "wins": 30,
                  "kills": 500,
                  "deaths": 100,
                  "assists": 100,
                  "play_time": "900.5",
                  "total_hero_damage": "1000000",
                  "total_damage_taken": "500000",
                  "total_hero_heal": "0",
                  "mvps": 10,
                  "svps": 5
                },
                {
                  "info": { "name": "unranked", "cur_head_icon_id": "1", "rank_season": {}, "login_os": "1" },
                  "player_uid": 7, "matches": 0, "wins": 0, "kills": 0, "deaths": 0, "assists": 0,
                  "play_time": "0", "total_hero_damage": "n/a", "total_damage_taken": "0",
                  "total_hero_heal": "0", "mvps": 0, "svps": 0
                }
              ]
            }
        "###;

        let board: HeroLeaderboard = serde_json::from_str(json).unwrap();
        let top = &board.players[0];
        assert_eq!(top.info.platform(), Platform::PlayStation);
        assert_eq!(top.kda(), 6.0);
        assert_eq!(top.win_rate(), 0.6);
        assert_eq!(top.avg_kills(), 10.0);
        assert_eq!(top.avg_hero_damage(), 20000.0);
        assert_eq!(top.mvp_rate(), 0.2);
        assert_eq!(
            top.info.rank_season.last_updated().map(|t| t.timestamp()),
            Some(1735689600)
        );

        let unranked = &board.players[1];
        assert_eq!(unranked.info.rank_season, RankSeason::default());
        assert_eq!(unranked.info.rank_season.rank_score, "0");
        assert_eq!(unranked.win_rate(), 0.0);
        assert_eq!(unranked.avg_hero_damage(), 0.0);
        assert_eq!(unranked.kda(), 0.0);
    }

    #[test]
    fn test_empty_leaderboard() {
        let board: HeroLeaderboard = serde_json::from_str("{}").unwrap();
        assert!(board.players.is_empty());
        assert!(board.top_players(10).is_empty());
        assert!(board.sort_by_kda().is_empty());
    }

    #[test]
    fn test_top_players_keeps_api_order() {
        let board = HeroLeaderboard {
            players: vec![
                player("a", 1, 0, 0, 0),
                player("b", 9, 0, 0, 0),
                player("c", 5, 0, 0, 0),
            ],
        };
        let top: Vec<_> = board.top_players(2).iter().map(|p| p.info.name.as_str()).collect();
        assert_eq!(top, vec!["a", "b"]);
        assert_eq!(board.top_players(10).len(), 3);
    }

    #[test]
    fn test_sorts_are_stable_and_descending() {
        let board = HeroLeaderboard {
            players: vec![
                player("a", 3, 10, 5, 10),
                player("b", 7, 10, 1, 12),
                player("c", 3, 4, 2, 12),
                player("d", 7, 0, 0, 1),
            ],
        };

        assert_eq!(names(&board.sort_by_wins()), vec!["b", "d", "a", "c"]);
        // kda: a=2, b=10, c=2, d=0
        assert_eq!(names(&board.sort_by_kda()), vec!["b", "a", "c", "d"]);
        assert_eq!(names(&board.sort_by_rank()), vec!["b", "c", "a", "d"]);
        // the board itself is untouched
        assert_eq!(board.players[0].info.name, "a");
    }
}
