use serde::{Deserialize, Serialize};

use super::eq_ignore_case;
use crate::endpoint::image_url;

fn not_provided() -> String {
    "Not provided".into()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubMap {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    pub id: i64,
    pub name: String,
    pub full_name: String,
    pub location: String,
    #[serde(default = "not_provided")]
    pub description: String,
    pub game_mode: String,
    #[serde(default)]
    pub is_competitive: bool,
    pub sub_map: SubMap,
    pub video: String,
    /// thumbnail, medium and large renders, in that order
    #[serde(default)]
    pub images: Vec<String>,
}

impl Map {
    pub fn thumbnail_url(&self) -> Option<String> {
        self.images.first().map(|path| image_url(path))
    }

    pub fn medium_image_url(&self) -> Option<String> {
        match self.images.get(1) {
            Some(path) => Some(image_url(path)),
            None => self.thumbnail_url(),
        }
    }

    pub fn large_image_url(&self) -> Option<String> {
        match self.images.get(2) {
            Some(path) => Some(image_url(path)),
            None => self.medium_image_url(),
        }
    }

    /// YouTube video id of the showcase video, if it is hosted there.
    pub fn video_id(&self) -> Option<&str> {
        let video = self.video.as_str();
        if video.contains("youtube.com/watch") {
            // first "v=" followed by a non-empty id
            return video.match_indices("v=").find_map(|(start, _)| {
                let id = &video[start + 2..];
                let end = id
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
                    .unwrap_or(id.len());
                (end > 0).then(|| &id[..end])
            });
        }
        if let Some((_, rest)) = video.split_once("youtu.be/") {
            let id = rest.split('?').next().unwrap_or_default();
            return (!id.is_empty()).then_some(id);
        }
        None
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapList {
    pub total_maps: u32,
    #[serde(default)]
    pub maps: Vec<Map>,
}

impl MapList {
    pub fn filter_by_game_mode(&self, game_mode: &str) -> Vec<&Map> {
        self.maps
            .iter()
            .filter(|m| eq_ignore_case(&m.game_mode, game_mode))
            .collect()
    }

    pub fn filter_by_location(&self, location: &str) -> Vec<&Map> {
        self.maps
            .iter()
            .filter(|m| eq_ignore_case(&m.location, location))
            .collect()
    }

    pub fn competitive_maps(&self) -> Vec<&Map> {
        self.maps.iter().filter(|m| m.is_competitive).collect()
    }

    pub fn get_map(&self, id: i64) -> Option<&Map> {
        self.maps.iter().find(|m| m.id == id)
    }

    pub fn get_map_by_name(&self, name: &str) -> Option<&Map> {
        self.maps.iter().find(|m| eq_ignore_case(&m.name, name))
    }
}
