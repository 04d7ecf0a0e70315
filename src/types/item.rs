use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::eq_ignore_case;
use crate::endpoint::image_url;

/// The API marks items without a hero as `"0"`; that, null and a missing
/// field all become `None`.
fn hero_reference<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(id)) if !id.is_empty() && id != "0" => Some(id),
        Some(Value::Number(id)) if id.as_u64() != Some(0) => Some(id.to_string()),
        _ => None,
    })
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    /// rarity, e.g. "BLUE"
    pub quality: String,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default, deserialize_with = "hero_reference")]
    pub associated_hero: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub icon: String,
}

impl Item {
    pub fn icon_url(&self) -> String {
        image_url(&self.icon)
    }

    pub fn is_hero_specific(&self) -> bool {
        self.associated_hero.is_some()
    }

    pub fn has_type(&self, item_type: &str) -> bool {
        eq_ignore_case(&self.item_type, item_type)
    }

    pub fn has_quality(&self, quality: &str) -> bool {
        eq_ignore_case(&self.quality, quality)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList {
    pub total_items: u32,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl ItemList {
    pub fn filter_by_type(&self, item_type: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|i| i.has_type(item_type))
            .collect()
    }

    pub fn filter_by_quality(&self, quality: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|i| i.has_quality(quality))
            .collect()
    }

    pub fn filter_by_hero(&self, hero_id: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|i| i.associated_hero.as_deref() == Some(hero_id))
            .collect()
    }

    pub fn get_item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn get_item_by_slug(&self, slug: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.slug == slug)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn list() -> ItemList {
        serde_json::from_str(
            r###"
            {
              "total_items": 4,
              "items": [
                { "id": "10", "name": "Gold Plate", "quality": "GOLD", "type": "Nameplate", "associated_hero": "0", "slug": "gold-plate", "icon": "/i/10.png" },
                { "id": "11", "name": "Hulk Spray", "quality": "blue", "type": "Spray", "associated_hero": "1011", "slug": "hulk-spray", "description": "Smash", "icon": "/i/11.png" },
                { "id": "12", "name": "Storm Emote", "quality": "BLUE", "type": "Emote", "associated_hero": 1015, "slug": "storm-emote", "icon": "/i/12.png" },
                { "id": "13", "name": "Hulk Plate", "quality": "PURPLE", "type": "nameplate", "associated_hero": "1011", "slug": "hulk-plate", "icon": "/i/13.png" }
              ]
            }
            "###,
        )
        .unwrap()
    }

    #[test]
    fn test_hero_association() {
        let list = list();
        assert_eq!(list.items[0].associated_hero, None);
        assert!(!list.items[0].is_hero_specific());
        assert_eq!(list.items[2].associated_hero.as_deref(), Some("1015"));
        assert_eq!(list.items[0].description, None);

        let item: Item = serde_json::from_str(
            r#"{"id":"1","name":"n","quality":"q","type":"t","slug":"s","icon":"i"}"#,
        )
        .unwrap();
        assert_eq!(item.associated_hero, None);
    }

    #[test]
    fn test_filters_are_stable() {
        let list = list();
        let ids = |items: Vec<&Item>| items.iter().map(|i| i.id.clone()).collect::<Vec<_>>();

        assert_eq!(ids(list.filter_by_type("NAMEPLATE")), vec!["10", "13"]);
        assert_eq!(ids(list.filter_by_quality("Blue")), vec!["11", "12"]);
        assert_eq!(ids(list.filter_by_hero("1011")), vec!["11", "13"]);
        assert!(list.filter_by_type("Banner").is_empty());
        assert!(list.filter_by_hero("0").is_empty());
    }

    #[test]
    fn test_type_and_quality_fold_unicode_case() {
        let item: Item = serde_json::from_str(
            r#"{"id":"1","name":"n","quality":"ÉPIQUE","type":"Émote","slug":"s","icon":"i"}"#,
        )
        .unwrap();
        assert!(item.has_type("émote"));
        assert!(item.has_quality("épique"));
        assert!(!item.has_quality("epique"));
    }

    #[test]
    fn test_lookups() {
        let list = list();
        assert_eq!(list.get_item("12").map(|i| i.slug.as_str()), Some("storm-emote"));
        assert_eq!(list.get_item_by_slug("hulk-plate").map(|i| i.id.as_str()), Some("13"));
        assert!(list.get_item("99").is_none());
        assert_eq!(list.items[1].icon_url(), "https://marvelrivalsapi.com/rivals/i/11.png");
    }
}
