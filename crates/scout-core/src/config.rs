use crate::app_config::{AppConfig, Environment, ServiceMode};
use crate::ConfigError;

pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files, which is useful
/// when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load configuration for a fixed service mode, ignoring `SCOUT_SERVICE_MODE`.
///
/// Used by one-shot callers such as the CLI, where the command being run
/// decides which collaborator is needed. Loads `.env` like [`load_app_config`].
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_for_mode(mode: ServiceMode) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| {
        if key == "SCOUT_SERVICE_MODE" {
            Ok(mode.to_string())
        } else {
            std::env::var(key)
        }
    })
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing and validation are decoupled from the process environment so tests
/// can drive it with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("SCOUT_ENV", "development"))?;
    let mode = parse_service_mode(&or_default("SCOUT_SERVICE_MODE", "places"))?;

    let bind_addr = parse_addr("SCOUT_BIND_ADDR", "0.0.0.0:5000")?;
    let log_level = or_default("SCOUT_LOG_LEVEL", "info");

    let places_api_key = lookup("GOOGLE_PLACES_API_KEY")
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty());
    if mode == ServiceMode::Places && places_api_key.is_none() {
        return Err(ConfigError::MissingEnvVar(
            "GOOGLE_PLACES_API_KEY".to_string(),
        ));
    }
    let places_base_url = or_default("SCOUT_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);

    let scraper_request_timeout_secs = parse_u64("SCOUT_SCRAPER_REQUEST_TIMEOUT_SECS", "10")?;
    if scraper_request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SCOUT_SCRAPER_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let scraper_user_agent = or_default("SCOUT_SCRAPER_USER_AGENT", "Mozilla/5.0");

    Ok(AppConfig {
        env,
        mode,
        bind_addr,
        log_level,
        places_api_key,
        places_base_url,
        scraper_request_timeout_secs,
        scraper_user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SCOUT_ENV".to_string(),
            reason: format!("expected development, test, or production; got {other:?}"),
        }),
    }
}

/// Parse a string into a `ServiceMode` variant (case-insensitive).
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
fn parse_service_mode(s: &str) -> Result<ServiceMode, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "scrape" => Ok(ServiceMode::Scrape),
        "places" => Ok(ServiceMode::Places),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SCOUT_SERVICE_MODE".to_string(),
            reason: format!("expected scrape or places; got {other:?}"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
