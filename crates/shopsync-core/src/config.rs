use std::path::PathBuf;
use std::str::FromStr;

use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_API_VERSION: &str = "2024-04";

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
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let shop = require("SHOPSYNC_SHOP")?;
    let access_token = require("SHOPSYNC_ACCESS_TOKEN")?;
    let api_version = or_default("SHOPSYNC_API_VERSION", DEFAULT_API_VERSION);

    let admin_api_url = lookup("SHOPSYNC_ADMIN_API_URL")
        .unwrap_or_else(|_| format!("https://{shop}/admin/api/{api_version}"))
        .trim_end_matches('/')
        .to_string();

    let location_id = match lookup("SHOPSYNC_LOCATION_ID") {
        Ok(raw) => Some(parse_value::<i64>("SHOPSYNC_LOCATION_ID", &raw)?),
        Err(_) => None,
    };

    let cache_path = PathBuf::from(or_default("SHOPSYNC_CACHE_PATH", "all_products.json"));
    let cache_ttl_secs =
        parse_value::<u64>("SHOPSYNC_CACHE_TTL_SECS", &or_default("SHOPSYNC_CACHE_TTL_SECS", "7200"))?;
    let request_timeout_secs = parse_value::<u64>(
        "SHOPSYNC_REQUEST_TIMEOUT_SECS",
        &or_default("SHOPSYNC_REQUEST_TIMEOUT_SECS", "30"),
    )?;
    let user_agent = or_default("SHOPSYNC_USER_AGENT", "shopsync/0.1 (admin-client)");
    let max_pages =
        parse_value::<usize>("SHOPSYNC_MAX_PAGES", &or_default("SHOPSYNC_MAX_PAGES", "200"))?;
    if max_pages == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPSYNC_MAX_PAGES".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let log_level = or_default("SHOPSYNC_LOG_LEVEL", "info");

    Ok(AppConfig {
        shop,
        access_token,
        api_version,
        admin_api_url,
        location_id,
        cache_path,
        cache_ttl_secs,
        request_timeout_secs,
        user_agent,
        max_pages,
        log_level,
    })
}

fn parse_value<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
