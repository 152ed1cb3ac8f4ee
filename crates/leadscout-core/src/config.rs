use crate::app_config::AppConfig;
use crate::ConfigError;

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
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let google_maps_api_key = require("GOOGLE_MAPS_API_KEY")?;
    let sheets_api_key = lookup("GOOGLE_SHEETS_API_KEY").ok();

    let log_level = or_default("LEADSCOUT_LOG_LEVEL", "info");
    let qualification_path = PathBuf::from(or_default(
        "LEADSCOUT_QUALIFICATION_PATH",
        "./config/qualification.yaml",
    ));

    let fetch_timeout_secs = parse_u64("LEADSCOUT_FETCH_TIMEOUT_SECS", "10")?;
    let fetch_user_agent = or_default(
        "LEADSCOUT_FETCH_USER_AGENT",
        "leadscout/0.1 (lead-qualification)",
    );
    let max_concurrent_fetches = parse_usize("LEADSCOUT_MAX_CONCURRENT_FETCHES", "1")?;
    let places_timeout_secs = parse_u64("LEADSCOUT_PLACES_TIMEOUT_SECS", "10")?;
    let places_page_delay_ms = parse_u64("LEADSCOUT_PLACES_PAGE_DELAY_MS", "2000")?;

    Ok(AppConfig {
        google_maps_api_key,
        sheets_api_key,
        log_level,
        qualification_path,
        fetch_timeout_secs,
        fetch_user_agent,
        max_concurrent_fetches,
        places_timeout_secs,
        places_page_delay_ms,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("GOOGLE_MAPS_API_KEY", "test-maps-key");
        m
    }

    #[test]
    fn build_app_config_fails_without_maps_api_key() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GOOGLE_MAPS_API_KEY"),
            "expected MissingEnvVar(GOOGLE_MAPS_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_all_required_vars() {
        let map = full_env();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.google_maps_api_key, "test-maps-key");
        assert!(cfg.sheets_api_key.is_none());
        assert_eq!(cfg.log_level, "info");
        assert_eq!(
            cfg.qualification_path.to_string_lossy(),
            "./config/qualification.yaml"
        );
        assert_eq!(cfg.fetch_timeout_secs, 10);
        assert_eq!(cfg.fetch_user_agent, "leadscout/0.1 (lead-qualification)");
        assert_eq!(cfg.max_concurrent_fetches, 1);
        assert_eq!(cfg.places_timeout_secs, 10);
        assert_eq!(cfg.places_page_delay_ms, 2000);
    }

    #[test]
    fn build_app_config_sheets_key_falls_back_to_none() {
        let mut map = full_env();
        map.insert("GOOGLE_SHEETS_API_KEY", "test-sheets-key");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.sheets_api_key.as_deref(), Some("test-sheets-key"));
    }

    #[test]
    fn build_app_config_fetch_timeout_override() {
        let mut map = full_env();
        map.insert("LEADSCOUT_FETCH_TIMEOUT_SECS", "3");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.fetch_timeout_secs, 3);
    }

    #[test]
    fn build_app_config_fetch_timeout_invalid() {
        let mut map = full_env();
        map.insert("LEADSCOUT_FETCH_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LEADSCOUT_FETCH_TIMEOUT_SECS"),
            "expected InvalidEnvVar(LEADSCOUT_FETCH_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_max_concurrent_fetches_override() {
        let mut map = full_env();
        map.insert("LEADSCOUT_MAX_CONCURRENT_FETCHES", "8");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.max_concurrent_fetches, 8);
    }

    #[test]
    fn build_app_config_max_concurrent_fetches_invalid() {
        let mut map = full_env();
        map.insert("LEADSCOUT_MAX_CONCURRENT_FETCHES", "many");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LEADSCOUT_MAX_CONCURRENT_FETCHES"),
            "expected InvalidEnvVar(LEADSCOUT_MAX_CONCURRENT_FETCHES), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_page_delay_override() {
        let mut map = full_env();
        map.insert("LEADSCOUT_PLACES_PAGE_DELAY_MS", "0");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.places_page_delay_ms, 0);
    }

    #[test]
    fn build_app_config_qualification_path_override() {
        let mut map = full_env();
        map.insert("LEADSCOUT_QUALIFICATION_PATH", "/etc/leadscout/policy.yaml");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(
            cfg.qualification_path.to_string_lossy(),
            "/etc/leadscout/policy.yaml"
        );
    }
}
