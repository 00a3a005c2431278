mod app_config;
mod config;
mod error;

pub use app_config::{AppConfig, DEFAULT_BASE_URL};
pub use config::{load_app_config, load_app_config_from_env, validate_base_url};
pub use error::ConfigError;
