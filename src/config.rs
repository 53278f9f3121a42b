use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application settings, restored from eframe storage between runs.
///
/// Tool state is deliberately absent: every session starts on `Room`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct AppConfig {
    /// Where the open/save dialogs start
    pub maps_directory: PathBuf,
    pub info_path: PathBuf,
    pub help_path: PathBuf,
    pub credits_path: PathBuf,
    /// Extension (without the dot) offered by the map file dialogs
    pub map_extension: String,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            maps_directory: PathBuf::from("resources/maps"),
            info_path: PathBuf::from("resources/info.txt"),
            help_path: PathBuf::from("resources/help.txt"),
            credits_path: PathBuf::from("resources/icons/credits.txt"),
            map_extension: "map".to_owned(),
            window_size: [800.0, 800.0],
        }
    }
}
