use serde::{Deserialize, Deserializer};

mod achievement;
mod battlepass;
mod hero;
mod item;
mod leaderboard;
mod map;

pub use achievement::{points, Achievement, AchievementList};
pub use battlepass::{BattlePass, BattlePassItem};
pub use hero::{Ability, Costume, CostumeDetail, Hero, HeroStat, Transformation};
pub use item::{Item, ItemList};
pub use leaderboard::{HeroLeaderboard, LeaderboardPlayer, PlayerInfo, RankSeason};
pub use map::{Map, MapList, SubMap};

/// Decodes `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Case-insensitive equality with full Unicode case folding, so "Émote"
/// matches "émote".
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
