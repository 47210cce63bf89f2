use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_DATA_FILE: &str = "scores.json";

/// Runtime settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    pub data_file: PathBuf,
    /// Channel that receives the midnight summary; `None` disables it
    pub summary_channel: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            summary_channel: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            bind_addr: read("DLEBOT_BIND_ADDR").unwrap_or(defaults.bind_addr),
            data_file: read("DLEBOT_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            summary_channel: read("DLEBOT_SUMMARY_CHANNEL"),
        }
    }
}
