//! Hike planner library entry points.
//!
//! This crate exposes the provider clients (trail, weather, user directory,
//! mail), the notification formatter, and the [`Pipeline`] that sequences
//! them. The Lambda and the CLI should only depend on the items exported
//! here instead of reimplementing behavior.

#![deny(warnings)]

pub mod config;
pub mod directory;
pub mod error;
mod http;
pub mod mail;
pub mod model;
pub mod notification;
pub mod pipeline;
pub mod trail;
pub mod weather;

pub use config::Config;
pub use directory::{CognitoDirectory, UserDirectory};
pub use error::{Error, Result, Stage};
pub use mail::{MailSender, SesMailSender};
pub use model::{
    EmailMessage, Forecast, NotificationContext, PlanRequest, TrailInfo, UserInfo, WeatherInfo,
};
pub use pipeline::{Delivery, Pipeline, PipelineError, PipelineOutcome};
pub use trail::{TrailClient, TrailProvider};
pub use weather::{WeatherClient, WeatherProvider};
