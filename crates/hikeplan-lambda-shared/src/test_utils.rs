//! Test utilities for Lambda handler testing.
//!
//! Provides fixture loading and in-memory stand-ins for the four external
//! providers so handlers can be exercised without network access.
//!
//! # Usage
//!
//! ```ignore
//! use hikeplan_lambda_shared::test_utils::{fixture_pipeline, api_gateway_event, RecordingMailer};
//!
//! #[tokio::test]
//! async fn test_handler() {
//!     let mailer = RecordingMailer::default();
//!     let pipeline = fixture_pipeline(mailer.clone());
//!     let payload = api_gateway_event(r#"{"StartDate":"2023-06-01","TrailId":"7003603","Username":"alice"}"#);
//!     // ... invoke the handler and inspect mailer.sent()
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use lambda_runtime::{Context, LambdaEvent};
use serde_json::{json, Value};

use hikeplan_lib::directory::UserDirectory;
use hikeplan_lib::mail::MailSender;
use hikeplan_lib::trail::{parse_trail_response, TrailProvider};
use hikeplan_lib::weather::{select_forecast_day, WeatherProvider};
use hikeplan_lib::{EmailMessage, Error, Forecast, Pipeline, Result, TrailInfo, UserInfo};

/// Directory holding recorded provider responses and sample events.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Read a fixture file by name.
pub fn fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {}", path.display(), e))
}

/// Load a fixture event as JSON.
pub fn fixture_event(name: &str) -> Value {
    serde_json::from_str(&fixture(name)).expect("fixture event should be valid JSON")
}

/// Wrap `body` in a minimal API Gateway proxy event.
pub fn api_gateway_event(body: &str) -> Value {
    json!({
        "resource": "/gethikedata",
        "path": "/gethikedata",
        "httpMethod": "POST",
        "body": body,
        "isBase64Encoded": false,
    })
}

/// Build a Lambda event around `payload` with a default context.
///
/// `lambda_runtime::Context` leaves `request_id` empty by default.
pub fn lambda_event(payload: Value) -> LambdaEvent<Value> {
    LambdaEvent::new(payload, Context::default())
}

/// Trail provider answering every lookup with a recorded response body.
pub struct FixtureTrails {
    body: String,
}

impl FixtureTrails {
    pub fn from_body(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Responds with `trail_7003603.json`.
    pub fn known() -> Self {
        Self::from_body(fixture("trail_7003603.json"))
    }

    /// Responds with an empty `trails` array.
    pub fn unknown() -> Self {
        Self::from_body(fixture("trail_unknown.json"))
    }
}

#[async_trait]
impl TrailProvider for FixtureTrails {
    async fn lookup_trail(&self, trail_id: &str) -> Result<TrailInfo> {
        parse_trail_response(trail_id, &self.body)
    }
}

/// Weather provider answering every lookup with a recorded response body.
pub struct FixtureForecast {
    body: String,
}

impl FixtureForecast {
    pub fn from_body(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Responds with `forecast_daily.json` (2023-05-31 through 2023-06-02).
    pub fn window() -> Self {
        Self::from_body(fixture("forecast_daily.json"))
    }

    /// Responds with a gateway error page instead of JSON.
    pub fn broken() -> Self {
        Self::from_body("<html><body>502 Bad Gateway</body></html>")
    }
}

#[async_trait]
impl WeatherProvider for FixtureForecast {
    async fn forecast_for(&self, _lat: f64, _lon: f64, date: NaiveDate) -> Result<Forecast> {
        select_forecast_day(&self.body, date)
    }
}

/// In-memory user directory.
#[derive(Default)]
pub struct StaticDirectory {
    users: HashMap<String, UserInfo>,
}

impl StaticDirectory {
    pub fn with_user(mut self, username: &str, first_name: &str, email: &str) -> Self {
        self.users.insert(
            username.to_string(),
            UserInfo {
                first_name: first_name.to_string(),
                email: email.to_string(),
            },
        );
        self
    }
}

#[async_trait]
impl UserDirectory for StaticDirectory {
    async fn lookup_user(&self, username: &str) -> Result<UserInfo> {
        self.users
            .get(username)
            .cloned()
            .ok_or_else(|| Error::UserLookup {
                username: username.to_string(),
                message: "UserNotFoundException: User does not exist.".to_string(),
            })
    }
}

/// Mail sender that records messages instead of delivering them.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    reject: bool,
}

impl RecordingMailer {
    /// A sender whose every dispatch fails.
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    /// Messages accepted so far.
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().expect("mailer lock poisoned").clone()
    }
}

#[async_trait]
impl MailSender for RecordingMailer {
    async fn send_email(&self, email: &EmailMessage) -> Result<String> {
        if self.reject {
            return Err(Error::MailDispatch(
                "MessageRejected: Email address is not verified.".to_string(),
            ));
        }
        let mut sent = self.sent.lock().expect("mailer lock poisoned");
        sent.push(email.clone());
        Ok(format!("fixture-message-{}", sent.len()))
    }
}

/// The directory used by [`fixture_pipeline`]: `alice` resolves, nobody else.
pub fn fixture_directory() -> StaticDirectory {
    StaticDirectory::default().with_user("alice", "Alice", "alice@example.com")
}

/// Pipeline wired to the recorded trail and forecast fixtures.
pub fn fixture_pipeline(mailer: RecordingMailer) -> Pipeline {
    Pipeline::new(
        Box::new(FixtureTrails::known()),
        Box::new(FixtureForecast::window()),
        Box::new(fixture_directory()),
        Box::new(mailer),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_events_load() {
        let event = fixture_event("event_valid.json");
        assert!(event["body"].as_str().unwrap().contains("7003603"));
    }

    #[tokio::test]
    async fn fixture_trails_resolve_known_trail() {
        let trail = FixtureTrails::known().lookup_trail("7003603").await.unwrap();
        assert_eq!(trail.name, "Mount Example Trail");

        let err = FixtureTrails::unknown().lookup_trail("1").await.unwrap_err();
        assert!(matches!(err, Error::TrailNotFound { .. }));
    }

    #[tokio::test]
    async fn static_directory_rejects_unknown_user() {
        let directory = fixture_directory();
        assert!(directory.lookup_user("alice").await.is_ok());
        assert!(directory.lookup_user("mallory").await.is_err());
    }

    #[tokio::test]
    async fn recording_mailer_numbers_messages() {
        let mailer = RecordingMailer::default();
        let email = EmailMessage {
            to: "alice@example.com".to_string(),
            subject: "s".to_string(),
            body: "b".to_string(),
        };
        assert_eq!(mailer.send_email(&email).await.unwrap(), "fixture-message-1");
        assert_eq!(mailer.send_email(&email).await.unwrap(), "fixture-message-2");
        assert_eq!(mailer.sent().len(), 2);

        assert!(RecordingMailer::rejecting().send_email(&email).await.is_err());
    }
}
