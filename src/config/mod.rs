mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, PanelConfig, StalePolicy, PUBLIC_KEY_ENV_VAR};
