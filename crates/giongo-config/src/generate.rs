use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

fn default_start_line() -> usize {
    1
}

fn default_input_path() -> PathBuf {
    PathBuf::from("giongo-test.txt")
}

/// Milliseconds since the unix epoch, used to name output files
pub fn timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GenerateConfig {
    /// 1-based line of the word list to start from
    #[serde(default = "default_start_line")]
    pub start_line: usize,
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub failed_path: PathBuf,
}

impl GenerateConfig {
    pub fn new() -> Self {
        let now = timestamp_millis();

        Self {
            start_line: default_start_line(),
            input_path: default_input_path(),
            output_path: PathBuf::from(format!("giongo_anki_deck-{now}.txt")),
            failed_path: PathBuf::from(format!("failed-{now}.txt")),
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self::new()
    }
}
