use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::env_or;

pub const DEFAULT_FREQUENCY_THRESHOLD: u32 = 40_000;

fn default_frequency_threshold() -> u32 {
    DEFAULT_FREQUENCY_THRESHOLD
}

fn default_frequency_data_path() -> PathBuf {
    PathBuf::from("novels_frequency.json")
}

fn default_input_path() -> PathBuf {
    PathBuf::from("giongo_anki_deck.txt")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("sorted_anki_deck.txt")
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SortConfig {
    /// Words ranked after this are dropped
    #[serde(default = "default_frequency_threshold")]
    pub frequency_threshold: u32,
    #[serde(default = "default_frequency_data_path")]
    pub frequency_data_path: PathBuf,
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

impl SortConfig {
    pub fn new() -> Self {
        let frequency_threshold = env_or("FREQUENCY_THRESHOLD", default_frequency_threshold());
        let frequency_data_path = env::var("FREQUENCY_DATA_FILENAME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_frequency_data_path());

        Self {
            frequency_threshold,
            frequency_data_path,
            input_path: default_input_path(),
            output_path: default_output_path(),
        }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            frequency_threshold: default_frequency_threshold(),
            frequency_data_path: default_frequency_data_path(),
            input_path: default_input_path(),
            output_path: default_output_path(),
        }
    }
}
