use serde::{Deserialize, Serialize};

/// Environment variable that overrides `api.public_key`.
pub const PUBLIC_KEY_ENV_VAR: &str = "MARVEL_PUBLIC_KEY";

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub panel: PanelConfig,
}

/// Connection settings for the Marvel Comics API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API gateway (e.g., "https://gateway.marvel.com:443").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Public API key sent as the `apikey` query parameter.
    #[serde(default)]
    pub public_key: Option<String>,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// What the character panel does with a result that arrives after a newer
/// request has already been issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Whatever completes last overwrites the panel, stale or not. A success
    /// never clears an error; only a new request does.
    #[default]
    LastResolvedWins,
    /// Only the most recently issued request may change the panel.
    LatestRequestWins,
}

/// Settings for the character panel and its host loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default)]
    pub stale_results: StalePolicy,
    /// UI tick interval in milliseconds (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "https://gateway.marvel.com:443".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            public_key: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            stale_results: StalePolicy::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl ApiConfig {
    /// Replace the configured key with `env_key` when the latter is non-empty.
    pub fn with_key_override(mut self, env_key: Option<String>) -> Self {
        if let Some(key) = env_key.filter(|k| !k.trim().is_empty()) {
            self.public_key = Some(key);
        }
        self
    }
}
