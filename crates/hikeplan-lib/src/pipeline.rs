//! Sequencing of the notification stages.
//!
//! Trail lookup, weather lookup, user lookup, formatting, and dispatch run
//! strictly one after another. Only the trail and weather stages can fail the
//! pipeline; user lookup and dispatch problems are recorded in [`Delivery`]
//! and logged, and the pipeline still reports success.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::directory::{CognitoDirectory, UserDirectory};
use crate::error::{Error, Result, Stage};
use crate::mail::{MailSender, SesMailSender};
use crate::model::{NotificationContext, PlanRequest};
use crate::notification;
use crate::trail::{TrailClient, TrailProvider};
use crate::weather::{WeatherClient, WeatherProvider};

/// A stage failure that aborts the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Trail(Error),
    #[error(transparent)]
    Weather(Error),
}

impl PipelineError {
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Trail(_) => Stage::Trail,
            PipelineError::Weather(_) => Stage::Weather,
        }
    }
}

/// What happened to the notification email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Delivery {
    Sent { message_id: String },
    UserLookupFailed { reason: String },
    DispatchFailed { reason: String },
}

impl Delivery {
    pub fn is_sent(&self) -> bool {
        matches!(self, Delivery::Sent { .. })
    }
}

/// Result of a pipeline run that got past the lookup stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineOutcome {
    /// Whether the forecast window contained the start date.
    pub forecast_found: bool,
    pub delivery: Delivery,
}

/// The four external collaborators wired together.
pub struct Pipeline {
    trails: Box<dyn TrailProvider>,
    weather: Box<dyn WeatherProvider>,
    directory: Box<dyn UserDirectory>,
    mailer: Box<dyn MailSender>,
}

impl Pipeline {
    pub fn new(
        trails: Box<dyn TrailProvider>,
        weather: Box<dyn WeatherProvider>,
        directory: Box<dyn UserDirectory>,
        mailer: Box<dyn MailSender>,
    ) -> Self {
        Self {
            trails,
            weather,
            directory,
            mailer,
        }
    }

    /// Build the production pipeline from `config`.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let mailer = SesMailSender::connect(config).await;
        Self::with_mailer(config, Box::new(mailer)).await
    }

    /// Build the production lookups with a caller-supplied mail sender.
    pub async fn with_mailer(config: &Config, mailer: Box<dyn MailSender>) -> Result<Self> {
        let trails = TrailClient::new(
            config.trail_base_url.clone(),
            config.trail_api_key.clone(),
            config.http_timeout,
        )?;
        let weather = WeatherClient::new(
            &config.weather_base_url,
            config.weather_api_key.clone(),
            config.http_timeout,
        )?;
        let directory = CognitoDirectory::connect(config).await;

        Ok(Self::new(
            Box::new(trails),
            Box::new(weather),
            Box::new(directory),
            mailer,
        ))
    }

    /// Run every stage for `request`.
    pub async fn run(
        &self,
        request: &PlanRequest,
    ) -> std::result::Result<PipelineOutcome, PipelineError> {
        let trail = self
            .trails
            .lookup_trail(&request.trail_id)
            .await
            .map_err(PipelineError::Trail)?;

        let forecast = self
            .weather
            .forecast_for(trail.lat, trail.lon, request.start_date)
            .await
            .map_err(PipelineError::Weather)?;

        let context = NotificationContext {
            request: request.clone(),
            trail,
            forecast,
        };
        let delivery = self.deliver(&context).await;

        Ok(PipelineOutcome {
            forecast_found: context.forecast.is_available(),
            delivery,
        })
    }

    async fn deliver(&self, context: &NotificationContext) -> Delivery {
        let username = &context.request.username;
        let user = match self.directory.lookup_user(username).await {
            Ok(user) => user,
            Err(e) => {
                warn!(username = %username, error = %e, "user lookup failed; email not sent");
                return Delivery::UserLookupFailed {
                    reason: e.to_string(),
                };
            }
        };

        let email = notification::compose(context, &user);
        match self.mailer.send_email(&email).await {
            Ok(message_id) => {
                info!(username = %username, message_id = %message_id, "email sent");
                Delivery::Sent { message_id }
            }
            Err(e) => {
                warn!(username = %username, error = %e, "mail dispatch failed");
                Delivery::DispatchFailed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
