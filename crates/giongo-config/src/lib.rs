use serde::{Deserialize, Serialize};

use self::completion::CompletionConfig;
use self::generate::GenerateConfig;
use self::sort::SortConfig;

pub mod completion;
pub mod generate;
pub mod sort;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub completion: CompletionConfig,
    pub generate: GenerateConfig,
    pub sort: SortConfig,
}

impl Config {
    /// Build config from environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            completion: CompletionConfig::new(),
            generate: GenerateConfig::new(),
            sort: SortConfig::new(),
        }
    }
}

pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
