use serde::{Deserialize, Serialize};

use super::eq_ignore_case;
use crate::endpoint::image_url;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AchievementRecord")]
pub struct Achievement {
    /// The API omits ids for some achievements; those use their name instead.
    pub id: String,
    pub name: String,
    pub mission: String,
    pub category: String,
    pub points: u32,
    pub icon: String,
}

#[derive(Deserialize)]
struct AchievementRecord {
    #[serde(default)]
    id: Option<String>,
    name: String,
    mission: String,
    category: String,
    points: u32,
    icon: String,
}

impl From<AchievementRecord> for Achievement {
    fn from(record: AchievementRecord) -> Self {
        Self {
            id: record.id.unwrap_or_else(|| record.name.clone()),
            name: record.name,
            mission: record.mission,
            category: record.category,
            points: record.points,
            icon: record.icon,
        }
    }
}

impl Achievement {
    pub fn icon_url(&self) -> String {
        image_url(&self.icon)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementList {
    pub total_achievements: u32,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl AchievementList {
    /// Case-insensitive category match, in list order.
    pub fn filter_by_category(&self, category: &str) -> Vec<&Achievement> {
        self.achievements
            .iter()
            .filter(|a| eq_ignore_case(&a.category, category))
            .collect()
    }

    pub fn get_achievement(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn total_points(&self) -> u32 {
        self.achievements.iter().map(|a| a.points).sum()
    }
}

/// Sum of points over any subset, e.g. the result of [`AchievementList::filter_by_category`].
pub fn points(achievements: &[&Achievement]) -> u32 {
    achievements.iter().map(|a| a.points).sum()
}
