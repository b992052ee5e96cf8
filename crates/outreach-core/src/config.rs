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
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
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

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        match or_default(var, default).to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected a boolean, got '{other}'"),
            }),
        }
    };

    let places_base_url = require("OUTREACH_PLACES_URL")?;
    let call_base_url = require("OUTREACH_CALL_URL")?;
    let mapbox_token = lookup("MAPBOX_TOKEN").ok();

    let log_level = or_default("OUTREACH_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("OUTREACH_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("OUTREACH_USER_AGENT", "outreach/0.1 (hiring-outreach)");
    let poll_interval_ms = parse_u64("OUTREACH_POLL_INTERVAL_MS", "5000")?;
    let poll_max_attempts = parse_u32("OUTREACH_POLL_MAX_ATTEMPTS", "60")?;
    let filter_results = parse_bool("OUTREACH_FILTER_RESULTS", "true")?;
    let default_radius_km = parse_f64("OUTREACH_DEFAULT_RADIUS_KM", "5")?;

    Ok(AppConfig {
        places_base_url,
        call_base_url,
        mapbox_token,
        log_level,
        request_timeout_secs,
        user_agent,
        poll_interval_ms,
        poll_max_attempts,
        filter_results,
        default_radius_km,
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
        m.insert("OUTREACH_PLACES_URL", "http://localhost:8000");
        m.insert("OUTREACH_CALL_URL", "http://localhost:8001");
        m
    }

    #[test]
    fn build_app_config_fails_without_places_url() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "OUTREACH_PLACES_URL"),
            "expected MissingEnvVar(OUTREACH_PLACES_URL), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_without_call_url() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("OUTREACH_PLACES_URL", "http://localhost:8000");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "OUTREACH_CALL_URL"),
            "expected MissingEnvVar(OUTREACH_CALL_URL), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_all_required_vars() {
        let map = full_env();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.places_base_url, "http://localhost:8000");
        assert_eq!(cfg.call_base_url, "http://localhost:8001");
        assert!(cfg.mapbox_token.is_none());
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "outreach/0.1 (hiring-outreach)");
        assert_eq!(cfg.poll_interval_ms, 5000);
        assert_eq!(cfg.poll_max_attempts, 60);
        assert!(cfg.filter_results);
        assert!((cfg.default_radius_km - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mapbox_token_is_picked_up_when_present() {
        let mut map = full_env();
        map.insert("MAPBOX_TOKEN", "pk.test-token");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.mapbox_token.as_deref(), Some("pk.test-token"));
    }

    #[test]
    fn poll_interval_override() {
        let mut map = full_env();
        map.insert("OUTREACH_POLL_INTERVAL_MS", "250");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.poll_interval_ms, 250);
    }

    #[test]
    fn poll_interval_invalid() {
        let mut map = full_env();
        map.insert("OUTREACH_POLL_INTERVAL_MS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "OUTREACH_POLL_INTERVAL_MS"),
            "expected InvalidEnvVar(OUTREACH_POLL_INTERVAL_MS), got: {result:?}"
        );
    }

    #[test]
    fn poll_max_attempts_override() {
        let mut map = full_env();
        map.insert("OUTREACH_POLL_MAX_ATTEMPTS", "3");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.poll_max_attempts, 3);
    }

    #[test]
    fn filter_results_accepts_bool_spellings() {
        for (raw, expected) in [("true", true), ("0", false), ("yes", true), ("false", false)] {
            let mut map = full_env();
            map.insert("OUTREACH_FILTER_RESULTS", raw);
            let cfg = build_app_config(lookup_from_map(&map)).unwrap();
            assert_eq!(cfg.filter_results, expected, "raw = {raw}");
        }
    }

    #[test]
    fn filter_results_invalid() {
        let mut map = full_env();
        map.insert("OUTREACH_FILTER_RESULTS", "maybe");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "OUTREACH_FILTER_RESULTS"),
            "expected InvalidEnvVar(OUTREACH_FILTER_RESULTS), got: {result:?}"
        );
    }

    #[test]
    fn default_radius_override() {
        let mut map = full_env();
        map.insert("OUTREACH_DEFAULT_RADIUS_KM", "12.5");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!((cfg.default_radius_km - 12.5).abs() < f64::EPSILON);
    }
}
