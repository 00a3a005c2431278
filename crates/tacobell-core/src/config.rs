use crate::app_config::{AppConfig, DEFAULT_BASE_URL};
use crate::ConfigError;

/// Load server configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load server configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let log_level = or_default("TACOBELL_MCP_LOG_LEVEL", "info");
    if log_level.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "TACOBELL_MCP_LOG_LEVEL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let base_url = validate_base_url(&or_default("TACOBELL_MCP_BASE_URL", DEFAULT_BASE_URL))
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "TACOBELL_MCP_BASE_URL".to_string(),
            reason: e.to_string(),
        })?;

    let raw_timeout = or_default("TACOBELL_MCP_REQUEST_TIMEOUT_SECS", "30");
    let request_timeout_secs =
        raw_timeout
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: "TACOBELL_MCP_REQUEST_TIMEOUT_SECS".to_string(),
                reason: e.to_string(),
            })?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TACOBELL_MCP_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        log_level,
        base_url,
        request_timeout_secs,
    })
}

/// Accept only absolute `http`/`https` URLs; full parsing happens when the
/// upstream client is built. Applied to the environment value and to the
/// `--base-url` flag alike.
///
/// # Errors
///
/// Returns `ConfigError::InvalidBaseUrl` for any other scheme.
pub fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        return Ok(trimmed.to_string());
    }
    Err(ConfigError::InvalidBaseUrl {
        base_url: raw.to_string(),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
