use std::fmt;

use thiserror::Error;

/// Convenient result alias for the hike planner library.
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline stage an error originated from.
///
/// Parameter, trail, and weather failures abort an invocation with a 502;
/// user lookup and mail dispatch failures are non-fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    Parameter,
    Trail,
    Weather,
    UserLookup,
    MailDispatch,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Config => "configuration",
            Stage::Parameter => "request parameters",
            Stage::Trail => "trail lookup",
            Stage::Weather => "weather lookup",
            Stage::UserLookup => "user lookup",
            Stage::MailDispatch => "mail dispatch",
        };
        f.write_str(name)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A required configuration variable was not set.
    #[error("missing required configuration variable {name}")]
    MissingConfig { name: &'static str },

    /// A configuration variable was set but could not be interpreted.
    #[error("invalid value for configuration variable {name}: {message}")]
    InvalidConfig { name: &'static str, message: String },

    /// The trail provider answered but did not describe the requested trail.
    #[error("trail {trail_id} not found in provider response")]
    TrailNotFound { trail_id: String },

    /// The trail provider response could not be decoded.
    #[error("malformed trail response: {0}")]
    TrailResponse(#[source] serde_json::Error),

    /// Transport or status failure talking to the trail provider.
    #[error("trail request failed: {0}")]
    TrailHttp(#[source] reqwest::Error),

    /// The weather provider response could not be decoded.
    #[error("malformed weather response: {0}")]
    WeatherResponse(#[source] serde_json::Error),

    /// Transport or status failure talking to the weather provider.
    #[error("weather request failed: {0}")]
    WeatherHttp(#[source] reqwest::Error),

    /// The identity provider rejected or failed the user lookup.
    #[error("user lookup for {username} failed: {message}")]
    UserLookup { username: String, message: String },

    /// The user record lacked an attribute the notification needs.
    #[error("user {username} has no '{attribute}' attribute")]
    MissingUserAttribute {
        username: String,
        attribute: &'static str,
    },

    /// The mail provider refused or failed to send the message.
    #[error("mail dispatch failed: {0}")]
    MailDispatch(String),
}

impl Error {
    /// Pipeline stage this error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            Error::MissingConfig { .. } | Error::InvalidConfig { .. } => Stage::Config,
            Error::TrailNotFound { .. } | Error::TrailResponse(_) | Error::TrailHttp(_) => {
                Stage::Trail
            }
            Error::WeatherResponse(_) | Error::WeatherHttp(_) => Stage::Weather,
            Error::UserLookup { .. } | Error::MissingUserAttribute { .. } => Stage::UserLookup,
            Error::MailDispatch(_) => Stage::MailDispatch,
        }
    }
}
