use std::fs;

use serde::{Deserialize, Serialize};

use crate::static_data;

#[derive(Deserialize, Serialize)]
pub struct Config {
    pub base_origin: String,
    pub quality: String,
    pub save_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_origin: static_data::BASE_ORIGIN.to_string(),
            quality: "".to_string(),
            save_path: "links.txt".to_string(),
        }
    }
}

impl Config {
    // missing or unreadable file falls back to defaults, a broken config never blocks a run
    pub fn load() -> Self {
        match fs::read_to_string(static_data::CONFIG_FILE) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    }
}
