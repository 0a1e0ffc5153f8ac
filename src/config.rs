use crate::{
    core::planner::DEFAULT_LOADING_NOTICE,
    error::{Result, TripError},
    services::{
        chat_client::{DEFAULT_CHAT_BASE_URL, DEFAULT_MODEL},
        http_client::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT},
    },
    types::TripLimits,
};
use std::{env, str::FromStr, time::Duration};

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub request_timeout: Duration,
    pub loading_notice_after: Duration,
    pub limits: TripLimits,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub model: String,
    pub firebase_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            loading_notice_after: DEFAULT_LOADING_NOTICE,
            limits: TripLimits::default(),
            openai_api_key: None,
            openai_base_url: DEFAULT_CHAT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            firebase_api_key: None,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let limits = TripLimits {
            min_days: parse_var(&get, "TRIPSIGHT_MIN_DAYS")?.unwrap_or(defaults.limits.min_days),
            max_days: parse_var(&get, "TRIPSIGHT_MAX_DAYS")?.unwrap_or(defaults.limits.max_days),
            require_destination: parse_var(&get, "TRIPSIGHT_REQUIRE_DESTINATION")?
                .unwrap_or(defaults.limits.require_destination),
        };
        if limits.min_days > limits.max_days {
            return Err(TripError::Config(format!(
                "TRIPSIGHT_MIN_DAYS ({}) is greater than TRIPSIGHT_MAX_DAYS ({})",
                limits.min_days, limits.max_days
            )));
        }

        Ok(Self {
            base_url: get("TRIPSIGHT_BASE_URL").unwrap_or(defaults.base_url),
            request_timeout: parse_var(&get, "TRIPSIGHT_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            loading_notice_after: parse_var(&get, "TRIPSIGHT_LOADING_NOTICE_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.loading_notice_after),
            limits,
            openai_api_key: get("OPENAI_API_KEY"),
            openai_base_url: get("OPENAI_BASE_URL")
                .or_else(|| get("OPENROUTER_BASE_URL"))
                .unwrap_or(defaults.openai_base_url),
            model: get("TRIPSIGHT_MODEL").unwrap_or(defaults.model),
            firebase_api_key: get("FIREBASE_API_KEY"),
        })
    }
}

fn parse_var<T, G>(get: &G, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|err| TripError::Config(format!("{key}=`{raw}`: {err}")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.loading_notice_after, Duration::from_secs(8));
        assert_eq!(config.limits, TripLimits::default());
        assert!(config.openai_api_key.is_none());
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config_from(&[
            ("TRIPSIGHT_BASE_URL", "http://localhost:8000"),
            ("TRIPSIGHT_MIN_DAYS", "2"),
            ("TRIPSIGHT_MAX_DAYS", "10"),
            ("TRIPSIGHT_REQUIRE_DESTINATION", "false"),
            ("TRIPSIGHT_LOADING_NOTICE_SECS", "3"),
            ("OPENAI_API_KEY", "sk-test"),
        ])
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(
            config.limits,
            TripLimits {
                min_days: 2,
                max_days: 10,
                require_destination: false
            }
        );
        assert_eq!(config.loading_notice_after, Duration::from_secs(3));
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn bad_values_are_config_errors() {
        let err = config_from(&[("TRIPSIGHT_MAX_DAYS", "lots")]).unwrap_err();
        assert!(err.to_string().contains("TRIPSIGHT_MAX_DAYS"));

        let err = config_from(&[("TRIPSIGHT_MIN_DAYS", "12"), ("TRIPSIGHT_MAX_DAYS", "10")])
            .unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }
}
