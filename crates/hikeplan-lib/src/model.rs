//! Request-scoped value records that flow through the pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A validated hike planning request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub start_date: NaiveDate,
    pub trail_id: String,
    pub username: String,
}

/// Descriptive and location metadata for one trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailInfo {
    pub name: String,
    pub url: String,
    pub lat: f64,
    pub lon: f64,
}

/// Forecast values for a single day.
///
/// Temperatures keep the provider's own textual rendering of the number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherInfo {
    pub high_temp: String,
    pub low_temp: String,
    pub avg_temp: String,
    pub description: String,
}

/// Outcome of scanning the forecast window for the start date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Forecast {
    Available(WeatherInfo),
    /// The provider answered but the window did not include the date.
    DateNotInWindow,
}

impl Forecast {
    pub fn is_available(&self) -> bool {
        matches!(self, Forecast::Available(_))
    }

    /// Weather values, or empty strings when the date was not in the window.
    pub fn weather(&self) -> WeatherInfo {
        match self {
            Forecast::Available(info) => info.clone(),
            Forecast::DateNotInWindow => WeatherInfo::default(),
        }
    }
}

/// Profile attributes resolved from the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub first_name: String,
    pub email: String,
}

/// Everything the formatter needs to render a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationContext {
    pub request: PlanRequest,
    pub trail: TrailInfo,
    pub forecast: Forecast,
}

/// A rendered plaintext email ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}
