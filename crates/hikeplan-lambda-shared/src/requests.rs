//! Request types and validation for the hike plan endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use hikeplan_lib::PlanRequest;

/// Date format accepted for `StartDate`.
pub const START_DATE_FORMAT: &str = "%Y-%m-%d";

/// The inbound event did not carry a usable request.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("event has no body")]
    MissingBody,

    #[error("event body must be a JSON-encoded string")]
    BodyNotString,

    #[error("{0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("field `StartDate` must be a YYYY-MM-DD date, got '{value}'")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Validation trait for Lambda request types.
pub trait Validate {
    /// Validate the request, returning the first problem found.
    fn validate(&self) -> Result<(), ParameterError>;
}

/// JSON body posted by the planner front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HikePlanRequest {
    /// First day of the hike.
    pub start_date: String,

    /// Trail provider identifier.
    pub trail_id: String,

    /// User directory username of the hiker.
    pub username: String,
}

impl Validate for HikePlanRequest {
    fn validate(&self) -> Result<(), ParameterError> {
        self.checked_start_date().map(|_| ())
    }
}

impl HikePlanRequest {
    /// Validate and convert into the library's request type.
    pub fn into_plan(self) -> Result<PlanRequest, ParameterError> {
        let start_date = self.checked_start_date()?;
        Ok(PlanRequest {
            start_date,
            trail_id: self.trail_id.trim().to_string(),
            username: self.username.trim().to_string(),
        })
    }

    /// Check every field, returning the parsed start date.
    fn checked_start_date(&self) -> Result<NaiveDate, ParameterError> {
        if self.start_date.trim().is_empty() {
            return Err(ParameterError::EmptyField("StartDate"));
        }

        if self.trail_id.trim().is_empty() {
            return Err(ParameterError::EmptyField("TrailId"));
        }

        if self.username.trim().is_empty() {
            return Err(ParameterError::EmptyField("Username"));
        }

        parse_start_date(&self.start_date)
    }
}

fn parse_start_date(raw: &str) -> Result<NaiveDate, ParameterError> {
    let value = raw.trim();
    NaiveDate::parse_from_str(value, START_DATE_FORMAT).map_err(|source| {
        ParameterError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}

/// Extract and validate the request carried in an API Gateway proxy event.
pub fn parse_event(payload: &Value) -> Result<PlanRequest, ParameterError> {
    let body = match payload.get("body") {
        None | Some(Value::Null) => return Err(ParameterError::MissingBody),
        Some(Value::String(body)) => body,
        Some(_) => return Err(ParameterError::BodyNotString),
    };

    let request: HikePlanRequest = serde_json::from_str(body)?;
    request.into_plan()
}
