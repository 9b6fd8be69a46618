//! Weather provider client.
//!
//! Fetches the daily forecast window for a coordinate and picks out the day
//! matching the requested start date. A window that does not contain the
//! date is reported as [`Forecast::DateNotInWindow`], not as an error.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::{Number, Value};
use tracing::{debug, info, warn};

use crate::config::WEATHER_BASE_URL_ENV;
use crate::error::{Error, Result};
use crate::model::{Forecast, WeatherInfo};

const HOST_HEADER: &str = "x-rapidapi-host";
const KEY_HEADER: &str = "x-rapidapi-key";

/// Source of daily forecasts.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn forecast_for(&self, lat: f64, lon: f64, date: NaiveDate) -> Result<Forecast>;
}

/// HTTP client for the weather provider.
pub struct WeatherClient {
    client: Client,
    base_url: Url,
    host: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(base_url: &str, api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let invalid = |message: String| Error::InvalidConfig {
            name: WEATHER_BASE_URL_ENV,
            message,
        };
        let base_url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        let host = base_url
            .host_str()
            .ok_or_else(|| invalid(format!("{} has no host", base_url)))?
            .to_string();

        Ok(Self {
            client: crate::http::build_client(timeout).map_err(Error::WeatherHttp)?,
            base_url,
            host,
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl WeatherProvider for WeatherClient {
    async fn forecast_for(&self, lat: f64, lon: f64, date: NaiveDate) -> Result<Forecast> {
        debug!(lat, lon, %date, host = %self.host, "requesting daily forecast");

        let response = self
            .client
            .get(self.base_url.clone())
            .query(&[
                ("units", "I".to_string()),
                ("lang", "en".to_string()),
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
            ])
            .header(HOST_HEADER, &self.host)
            .header(KEY_HEADER, &self.api_key)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(Error::WeatherHttp)?;

        let body = response.text().await.map_err(Error::WeatherHttp)?;
        let forecast = select_forecast_day(&body, date)?;

        match &forecast {
            Forecast::Available(info) => {
                info!(%date, description = %info.description, "forecast day found")
            }
            Forecast::DateNotInWindow => {
                warn!(%date, "start date is outside the provider's forecast window")
            }
        }
        Ok(forecast)
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    data: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct ForecastDay {
    high_temp: Number,
    low_temp: Number,
    temp: Number,
    weather: Conditions,
}

#[derive(Debug, Deserialize)]
struct Conditions {
    description: String,
}

/// Decode a forecast body and scan it for `date`.
///
/// Only the matching day is decoded in full; other days in the window may
/// carry incomplete values without failing the lookup.
pub fn select_forecast_day(body: &str, date: NaiveDate) -> Result<Forecast> {
    let response: ForecastResponse = serde_json::from_str(body).map_err(Error::WeatherResponse)?;
    let wanted = date.format("%Y-%m-%d").to_string();

    let Some(record) = response
        .data
        .into_iter()
        .find(|day| day.get("valid_date").and_then(Value::as_str) == Some(wanted.as_str()))
    else {
        return Ok(Forecast::DateNotInWindow);
    };

    let day: ForecastDay = serde_json::from_value(record).map_err(Error::WeatherResponse)?;
    Ok(Forecast::Available(WeatherInfo {
        high_temp: day.high_temp.to_string(),
        low_temp: day.low_temp.to_string(),
        avg_temp: day.temp.to_string(),
        description: day.weather.description,
    }))
}
