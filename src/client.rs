use anyhow::Result;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;

use crate::config::Config;
use crate::constants::{FORECAST_DAYS, FORECAST_PATH, USER_AGENT};
use crate::error::{IconError, WeatherError};
use crate::models::{WeatherIcon, WeatherQuery};

/// HTTP access to weatherapi.com
#[derive(Clone)]
pub struct WeatherApiClient {
    client: Arc<Client>,
    config: Arc<Config>,
}

impl WeatherApiClient {
    /// Creates a client for the configured endpoint
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: Arc::new(builder.build()?),
            config: Arc::new(config),
        })
    }

    /// Fetches today's forecast for the query as raw JSON
    pub async fn fetch_forecast(&self, query: &WeatherQuery) -> Result<Value, WeatherError> {
        let url = format!("{}/{}", self.config.base_url, FORECAST_PATH);
        let location = query.location();
        let days = FORECAST_DAYS.to_string();

        tracing::debug!("Requesting forecast for {}", location);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("q", location.as_str()),
                ("days", days.as_str()),
                ("aqi", "no"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let data = response.json::<Value>().await?;
        Ok(data)
    }

    /// Downloads a condition icon and checks that it is an image
    pub async fn fetch_icon(&self, url: &str) -> Result<WeatherIcon, IconError> {
        tracing::debug!("Requesting icon {}", url);

        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let format = image::guess_format(&bytes)?;

        Ok(WeatherIcon {
            bytes: bytes.to_vec(),
            mime_type: format.to_mime_type().to_string(),
        })
    }
}
