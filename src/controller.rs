//! Orchestration of one weather lookup: validate, fetch, parse, suggest, render.

use crate::advisor::suggest;
use crate::client::WeatherApiClient;
use crate::error::{IconError, WeatherError};
use crate::models::{Forecast, ReportVisibility, WeatherIcon, WeatherQuery, WeatherReport};
use crate::parser::{location_resolved, parse_report};

/// Surface a lookup is rendered onto
pub trait ReportDisplay {
    /// Shows or hides every report field together
    fn set_visibility(&mut self, visibility: ReportVisibility);

    fn show_error(&mut self, message: &str);

    fn clear_error(&mut self);

    fn show_report(&mut self, report: &WeatherReport, advice: &str);

    fn show_icon(&mut self, icon: &WeatherIcon);
}

#[derive(Clone)]
pub struct Controller {
    client: WeatherApiClient,
}

impl Controller {
    pub fn new(client: WeatherApiClient) -> Self {
        Self { client }
    }

    /// Looks up the query and builds the report with its clothing advice
    pub async fn forecast(&self, query: &WeatherQuery) -> Result<Forecast, WeatherError> {
        let payload = self.client.fetch_forecast(query).await?;

        if !location_resolved(&payload) {
            tracing::warn!("No country in response for {}", query.location());
            return Err(WeatherError::Lookup);
        }

        let report = parse_report(&payload)?;
        let advice = suggest(
            &report.temperature_f.to_string(),
            &report.condition_text.to_string(),
            &report.uv_index.to_string(),
        );

        Ok(Forecast { report, advice })
    }

    /// Runs the full user action for raw city and region input
    ///
    /// Returns the error that was shown, if any. An icon error leaves the
    /// report visible.
    pub async fn get_weather<D: ReportDisplay>(
        &self,
        city: &str,
        region: &str,
        display: &mut D,
    ) -> Result<(), WeatherError> {
        let forecast = match self.lookup(city, region).await {
            Ok(forecast) => forecast,
            Err(err) => {
                report_failure(&err);
                display.show_error(&err.to_string());
                display.set_visibility(ReportVisibility::Hidden);
                return Err(err);
            }
        };

        display.clear_error();
        display.show_report(&forecast.report, &forecast.advice);
        display.set_visibility(ReportVisibility::Shown);

        let icon = match forecast.report.icon_url.as_deref() {
            Some(url) => self.client.fetch_icon(url).await.map_err(WeatherError::from),
            None => Err(WeatherError::from(IconError::Missing)),
        };

        match icon {
            Ok(icon) => {
                display.show_icon(&icon);
                Ok(())
            }
            Err(err) => {
                report_failure(&err);
                display.show_error(&err.to_string());
                Err(err)
            }
        }
    }

    async fn lookup(&self, city: &str, region: &str) -> Result<Forecast, WeatherError> {
        let query = WeatherQuery::from_input(city, region)?;
        tracing::info!("Getting weather for {}", query.location());
        self.forecast(&query).await
    }
}

fn report_failure(err: &WeatherError) {
    match std::error::Error::source(err) {
        Some(cause) => tracing::warn!("{} ({})", err, cause),
        None => tracing::warn!("{}", err),
    }
}
