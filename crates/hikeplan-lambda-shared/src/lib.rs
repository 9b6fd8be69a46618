//! Shared infrastructure for hike planner AWS Lambda functions.
//!
//! This crate provides common functionality used by the Lambda handlers:
//!
//! - [`init_runtime`]: Cold-start construction of configuration and provider clients
//! - [`init_tracing`]: JSON-formatted tracing for CloudWatch Logs
//! - [`ApiResponse`]: `{statusCode, body}` responses for API Gateway
//! - [`parse_event`]: Request extraction and validation from the proxy event
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides fixture loaders and in-memory providers
//! for handler testing. Enable the `test-utils` feature to access it from
//! dependent crates.

#![deny(warnings)]

mod requests;
mod response;
mod runtime;
mod tracing_init;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use requests::{parse_event, HikePlanRequest, ParameterError, Validate, START_DATE_FORMAT};
pub use response::{
    ApiResponse, PARAMETER_ERROR_PREFIX, SUCCESS_MESSAGE, TRAIL_ERROR_PREFIX, WEATHER_ERROR_PREFIX,
};
pub use runtime::{get_runtime, init_runtime, install_runtime, InitError, LambdaRuntime};
pub use tracing_init::init_tracing;
