//! API Gateway proxy responses.
//!
//! The body is always a JSON-encoded string message, so a client sees
//! `"\"Hike app call successful. Email should arrive shortly\""` on the wire.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use hikeplan_lib::PipelineError;

use crate::requests::ParameterError;

pub const SUCCESS_MESSAGE: &str = "Hike app call successful. Email should arrive shortly";
pub const PARAMETER_ERROR_PREFIX: &str = "Error occured in request parameter processing";
pub const TRAIL_ERROR_PREFIX: &str = "Error occured in Trail API request";
pub const WEATHER_ERROR_PREFIX: &str = "Error occured in Weather API request";

/// `{statusCode, body}` result returned to API Gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// JSON-encoded string message.
    pub body: String,
}

impl ApiResponse {
    /// Build a response whose body is `message` encoded as a JSON string.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            body: Value::String(message.into()).to_string(),
        }
    }

    /// The pipeline reached the mail dispatch stage.
    ///
    /// Dispatch failures do not change this response.
    pub fn success() -> Self {
        Self::message(StatusCode::OK, SUCCESS_MESSAGE)
    }

    pub fn parameter_error(err: &ParameterError) -> Self {
        Self::message(
            StatusCode::BAD_GATEWAY,
            format!("{}: {}", PARAMETER_ERROR_PREFIX, err),
        )
    }

    pub fn pipeline_error(err: &PipelineError) -> Self {
        let prefix = match err {
            PipelineError::Trail(_) => TRAIL_ERROR_PREFIX,
            PipelineError::Weather(_) => WEATHER_ERROR_PREFIX,
        };
        Self::message(StatusCode::BAD_GATEWAY, format!("{}: {}", prefix, err))
    }

    /// Decode the JSON string carried in `body`.
    pub fn body_text(&self) -> Option<String> {
        match serde_json::from_str::<Value>(&self.body) {
            Ok(Value::String(text)) => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use hikeplan_lib::Error as LibError;

    use super::*;

    #[test]
    fn success_matches_wire_format() {
        let json = serde_json::to_string(&ApiResponse::success()).unwrap();
        assert_eq!(
            json,
            r#"{"statusCode":200,"body":"\"Hike app call successful. Email should arrive shortly\""}"#
        );
    }

    #[test]
    fn parameter_error_is_prefixed() {
        let response = ApiResponse::parameter_error(&ParameterError::MissingBody);
        assert_eq!(response.status_code, 502);
        let text = response.body_text().unwrap();
        assert!(text.starts_with("Error occured in request parameter processing: "));
        assert!(text.ends_with("event has no body"));
    }

    #[test]
    fn pipeline_errors_use_stage_prefix() {
        let trail = PipelineError::Trail(LibError::TrailNotFound {
            trail_id: "42".to_string(),
        });
        let response = ApiResponse::pipeline_error(&trail);
        assert_eq!(response.status_code, 502);
        assert!(response
            .body_text()
            .unwrap()
            .starts_with("Error occured in Trail API request: "));

        let parse_err = serde_json::from_str::<Value>("{").unwrap_err();
        let weather = PipelineError::Weather(LibError::WeatherResponse(parse_err));
        assert!(ApiResponse::pipeline_error(&weather)
            .body_text()
            .unwrap()
            .starts_with("Error occured in Weather API request: "));
    }

    #[test]
    fn prefix_follows_the_aborting_stage_not_the_inner_error() {
        let inner = || LibError::InvalidConfig {
            name: "HIKEPLAN_WEATHER_BASE_URL",
            message: "relative URL without a base".to_string(),
        };

        let weather = ApiResponse::pipeline_error(&PipelineError::Weather(inner()));
        assert!(weather
            .body_text()
            .unwrap()
            .starts_with(WEATHER_ERROR_PREFIX));

        let trail = ApiResponse::pipeline_error(&PipelineError::Trail(inner()));
        assert!(trail.body_text().unwrap().starts_with(TRAIL_ERROR_PREFIX));
    }

    #[test]
    fn quotes_in_messages_stay_encoded() {
        let response = ApiResponse::message(StatusCode::BAD_GATEWAY, "bad \"value\"");
        assert_eq!(response.body, r#""bad \"value\"""#);
        assert_eq!(response.body_text().unwrap(), "bad \"value\"");
    }
}
