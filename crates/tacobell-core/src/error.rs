use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("\"{base_url}\" is not an http(s) URL")]
    InvalidBaseUrl { base_url: String },
}
