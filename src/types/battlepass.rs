use serde::{Deserialize, Serialize};

use super::eq_ignore_case;
use crate::endpoint::image_url;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattlePassItem {
    pub name: String,
    pub image: String,
    /// e.g. "Unlock To Claim"
    pub cost: String,
    /// premium tier
    #[serde(rename = "isLuxury")]
    pub is_luxury: bool,
}

impl BattlePassItem {
    pub fn image_url(&self) -> String {
        image_url(&self.image)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattlePass {
    pub season: f64,
    pub season_name: String,
    #[serde(default)]
    pub items: Vec<BattlePassItem>,
}

impl BattlePass {
    pub fn free_items(&self) -> Vec<&BattlePassItem> {
        self.items.iter().filter(|i| !i.is_luxury).collect()
    }

    pub fn premium_items(&self) -> Vec<&BattlePassItem> {
        self.items.iter().filter(|i| i.is_luxury).collect()
    }

    /// First tier item, free or premium, whose name matches ignoring case.
    pub fn find_item(&self, name: &str) -> Option<&BattlePassItem> {
        self.items.iter().find(|i| eq_ignore_case(&i.name, name))
    }
}
