use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::eq_ignore_case;
use crate::endpoint::image_url;

fn no_quality() -> String {
    "NO_QUALITY".into()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformation {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub health: Option<String>,
    /// e.g. "6m/s"
    #[serde(default)]
    pub movement_speed: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub id: i64,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ability_type: String,
    #[serde(rename = "isCollab", default)]
    pub is_collab: bool,
    #[serde(default)]
    pub description: Option<String>,
    pub transformation_id: String,
    /// Per-ability metadata such as cooldown or energy cost. Keys vary.
    #[serde(default)]
    pub additional_fields: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Costume {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default = "no_quality")]
    pub quality: String,
    pub description: String,
    pub appearance: String,
    /// Hero wearing the costume. Costumes nested in a [`Hero`] get the hero's
    /// id; the costume endpoints fall back to the key the caller asked for.
    #[serde(default)]
    pub hero_id: Option<String>,
}

impl Costume {
    /// Sets `hero_id` unless the payload already carried one.
    pub(crate) fn worn_by(mut self, hero: &str) -> Self {
        self.hero_id.get_or_insert_with(|| hero.to_owned());
        self
    }

    pub fn icon_url(&self) -> String {
        image_url(&self.icon)
    }
}

/// Single costume lookup, which also carries the showcase video.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostumeDetail {
    #[serde(flatten)]
    pub costume: Costume,
    #[serde(default)]
    pub video: Option<String>,
}

impl CostumeDetail {
    pub(crate) fn worn_by(mut self, hero: &str) -> Self {
        self.costume = self.costume.worn_by(hero);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "HeroRecord")]
pub struct Hero {
    pub id: String,
    pub name: String,
    pub real_name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub role: String,
    pub attack_type: String,
    pub team: Vec<String>,
    pub difficulty: String,
    pub bio: String,
    pub lore: String,
    pub transformations: Vec<Transformation>,
    pub costumes: Vec<Costume>,
    pub abilities: Vec<Ability>,
}

#[derive(Deserialize)]
struct HeroRecord {
    id: String,
    name: String,
    real_name: String,
    #[serde(rename = "imageUrl")]
    image_url: String,
    role: String,
    attack_type: String,
    #[serde(default)]
    team: Vec<String>,
    difficulty: String,
    bio: String,
    lore: String,
    #[serde(default)]
    transformations: Vec<Transformation>,
    #[serde(default)]
    costumes: Vec<Costume>,
    #[serde(default)]
    abilities: Vec<Ability>,
}

impl From<HeroRecord> for Hero {
    fn from(record: HeroRecord) -> Self {
        let costumes = record
            .costumes
            .into_iter()
            .map(|costume| costume.worn_by(&record.id))
            .collect();

        Self {
            id: record.id,
            name: record.name,
            real_name: record.real_name,
            image_url: record.image_url,
            role: record.role,
            attack_type: record.attack_type,
            team: record.team,
            difficulty: record.difficulty,
            bio: record.bio,
            lore: record.lore,
            transformations: record.transformations,
            costumes,
            abilities: record.abilities,
        }
    }
}

impl Hero {
    pub fn ability(&self, name: &str) -> Option<&Ability> {
        self.abilities.iter().find(|a| {
            a.name
                .as_deref()
                .is_some_and(|n| eq_ignore_case(n, name))
        })
    }

    pub fn transformation(&self, id: &str) -> Option<&Transformation> {
        self.transformations.iter().find(|t| t.id == id)
    }

    pub fn image(&self) -> String {
        image_url(&self.image_url)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroStat {
    pub hero_id: i64,
    pub hero_name: String,
    pub hero_icon: String,
    pub matches: u32,
    pub wins: u32,
    /// average kills per match
    pub k: f64,
    pub d: f64,
    pub a: f64,
    pub play_time: String,
    pub total_hero_damage: f64,
    pub total_hero_heal: f64,
    pub total_damage_taken: f64,
    pub session_hit_rate: f64,
    pub solo_kill: f64,
}

impl HeroStat {
    pub fn win_rate(&self) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        self.wins as f64 / self.matches as f64
    }

    /// (kills + assists) / deaths, with zero deaths counted as one.
    pub fn kda(&self) -> f64 {
        let deaths = if self.d == 0.0 { 1.0 } else { self.d };
        (self.k + self.a) / deaths
    }
}
