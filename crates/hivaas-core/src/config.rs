use crate::app_config::AppConfig;
use crate::ConfigError;

pub(crate) const DEFAULT_CATALOG_URL: &str = "https://hivaas-backend-api.onrender.com/api/products";
pub(crate) const DEFAULT_USER_AGENT: &str = "hivaas/0.1 (catalog-browser)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function,
/// so tests can drive it from a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>().map_err(|e| invalid(var, e.to_string()))
    };

    let catalog_url = or_default("HIVAAS_CATALOG_URL", DEFAULT_CATALOG_URL);
    if catalog_url.trim().is_empty() {
        return Err(invalid("HIVAAS_CATALOG_URL", "must not be empty".to_string()));
    }

    let log_level = or_default("HIVAAS_LOG_LEVEL", "info");

    let request_timeout_secs = match lookup("HIVAAS_REQUEST_TIMEOUT_SECS") {
        Ok(raw) if !raw.trim().is_empty() => Some(
            raw.trim()
                .parse::<u64>()
                .map_err(|e| invalid("HIVAAS_REQUEST_TIMEOUT_SECS", e.to_string()))?,
        ),
        _ => None,
    };

    let user_agent = or_default("HIVAAS_USER_AGENT", DEFAULT_USER_AGENT);
    let share_phone = or_default("HIVAAS_SHARE_PHONE", crate::DEFAULT_SHARE_PHONE);
    let currency_symbol = or_default("HIVAAS_CURRENCY_SYMBOL", crate::DEFAULT_CURRENCY_SYMBOL);

    let page_size = parse_usize("HIVAAS_PAGE_SIZE", "10")?;
    if page_size == 0 {
        return Err(invalid("HIVAAS_PAGE_SIZE", "must be at least 1".to_string()));
    }

    let notice_millis = parse_u64("HIVAAS_NOTICE_MILLIS", "2000")?;
    let recommended_count = parse_usize("HIVAAS_RECOMMENDED_COUNT", "5")?;

    Ok(AppConfig {
        catalog_url,
        log_level,
        request_timeout_secs,
        user_agent,
        share_phone,
        currency_symbol,
        page_size,
        notice_millis,
        recommended_count,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
