//! Process-wide configuration loaded once at startup.
//!
//! Secrets arrive through environment variables set by the deployment. The
//! resulting [`Config`] is immutable and handed to each client constructor.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};

pub const TRAIL_API_KEY_ENV: &str = "HIKEPLAN_TRAIL_API_KEY";
pub const WEATHER_API_KEY_ENV: &str = "HIKEPLAN_WEATHER_API_KEY";
pub const COGNITO_POOL_ID_ENV: &str = "HIKEPLAN_COGNITO_POOL_ID";
pub const COGNITO_MANAGER_ID_ENV: &str = "HIKEPLAN_COGNITO_MANAGER_ID";
pub const COGNITO_MANAGER_KEY_ENV: &str = "HIKEPLAN_COGNITO_MANAGER_KEY";
pub const TRAIL_BASE_URL_ENV: &str = "HIKEPLAN_TRAIL_BASE_URL";
pub const WEATHER_BASE_URL_ENV: &str = "HIKEPLAN_WEATHER_BASE_URL";
pub const AWS_REGION_ENV: &str = "HIKEPLAN_AWS_REGION";
pub const MAIL_SENDER_ENV: &str = "HIKEPLAN_MAIL_SENDER";
pub const HTTP_TIMEOUT_ENV: &str = "HIKEPLAN_HTTP_TIMEOUT_SECS";

pub const DEFAULT_TRAIL_BASE_URL: &str = "https://www.hikingproject.com/data/get-trails-by-id";
pub const DEFAULT_WEATHER_BASE_URL: &str =
    "https://weatherbit-v1-mashape.p.rapidapi.com/forecast/daily";
pub const DEFAULT_AWS_REGION: &str = "us-east-1";
pub const DEFAULT_MAIL_SENDER: &str = "Hiker App <bens.hiker.app@gmail.com>";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Static credential pair for the user pool manager.
#[derive(Clone)]
pub struct ManagerCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl fmt::Debug for ManagerCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagerCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .finish()
    }
}

/// Resolved configuration for one Lambda process.
#[derive(Clone)]
pub struct Config {
    pub trail_api_key: String,
    pub trail_base_url: String,
    pub weather_api_key: String,
    pub weather_base_url: String,
    pub user_pool_id: String,
    pub manager: ManagerCredentials,
    pub aws_region: String,
    pub mail_sender: String,
    pub http_timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("trail_api_key", &"<redacted>")
            .field("trail_base_url", &self.trail_base_url)
            .field("weather_api_key", &"<redacted>")
            .field("weather_base_url", &self.weather_base_url)
            .field("user_pool_id", &self.user_pool_id)
            .field("manager", &self.manager)
            .field("aws_region", &self.aws_region)
            .field("mail_sender", &self.mail_sender)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty or whitespace-only values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let required = |name: &'static str| get(name).ok_or(Error::MissingConfig { name });

        let http_timeout = match get(HTTP_TIMEOUT_ENV) {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| Error::InvalidConfig {
                    name: HTTP_TIMEOUT_ENV,
                    message: e.to_string(),
                })?;
                if secs == 0 {
                    return Err(Error::InvalidConfig {
                        name: HTTP_TIMEOUT_ENV,
                        message: "timeout must be at least one second".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Ok(Self {
            trail_api_key: required(TRAIL_API_KEY_ENV)?,
            trail_base_url: get(TRAIL_BASE_URL_ENV)
                .unwrap_or_else(|| DEFAULT_TRAIL_BASE_URL.to_string()),
            weather_api_key: required(WEATHER_API_KEY_ENV)?,
            weather_base_url: get(WEATHER_BASE_URL_ENV)
                .unwrap_or_else(|| DEFAULT_WEATHER_BASE_URL.to_string()),
            user_pool_id: required(COGNITO_POOL_ID_ENV)?,
            manager: ManagerCredentials {
                access_key_id: required(COGNITO_MANAGER_ID_ENV)?,
                secret_access_key: required(COGNITO_MANAGER_KEY_ENV)?,
            },
            aws_region: get(AWS_REGION_ENV).unwrap_or_else(|| DEFAULT_AWS_REGION.to_string()),
            mail_sender: get(MAIL_SENDER_ENV).unwrap_or_else(|| DEFAULT_MAIL_SENDER.to_string()),
            http_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn required_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (TRAIL_API_KEY_ENV, "trail-secret"),
            (WEATHER_API_KEY_ENV, "weather-secret"),
            (COGNITO_POOL_ID_ENV, "us-east-1_example"),
            (COGNITO_MANAGER_ID_ENV, "AKIAEXAMPLE"),
            (COGNITO_MANAGER_KEY_ENV, "manager-secret"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<Config> {
        Config::from_lookup(|name| vars.get(name).map(|v| v.to_string()))
    }

    #[test]
    fn defaults_fill_optional_values() {
        let config = load(&required_vars()).expect("config loads");
        assert_eq!(config.trail_base_url, DEFAULT_TRAIL_BASE_URL);
        assert_eq!(config.weather_base_url, DEFAULT_WEATHER_BASE_URL);
        assert_eq!(config.aws_region, "us-east-1");
        assert_eq!(config.mail_sender, DEFAULT_MAIL_SENDER);
        assert_eq!(config.http_timeout, Duration::from_secs(10));
    }

    #[test]
    fn missing_required_value_names_variable() {
        let mut vars = required_vars();
        vars.remove(WEATHER_API_KEY_ENV);
        let err = load(&vars).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingConfig {
                name: WEATHER_API_KEY_ENV
            }
        ));
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let mut vars = required_vars();
        vars.insert(COGNITO_POOL_ID_ENV, "   ");
        assert!(matches!(
            load(&vars),
            Err(Error::MissingConfig {
                name: COGNITO_POOL_ID_ENV
            })
        ));
    }

    #[test]
    fn timeout_must_be_positive_integer() {
        let mut vars = required_vars();
        vars.insert(HTTP_TIMEOUT_ENV, "abc");
        assert!(matches!(load(&vars), Err(Error::InvalidConfig { .. })));

        vars.insert(HTTP_TIMEOUT_ENV, "0");
        assert!(matches!(load(&vars), Err(Error::InvalidConfig { .. })));

        vars.insert(HTTP_TIMEOUT_ENV, "3");
        let config = load(&vars).expect("config loads");
        assert_eq!(config.http_timeout, Duration::from_secs(3));
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let config = load(&required_vars()).expect("config loads");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("trail-secret"));
        assert!(!rendered.contains("weather-secret"));
        assert!(!rendered.contains("manager-secret"));
        assert!(rendered.contains("AKIAEXAMPLE"));
    }
}
