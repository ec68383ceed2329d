//! Error kinds for a weather lookup.
//!
//! The `Display` text of every variant is the message shown to the user;
//! underlying causes stay reachable through `source()` for logging.

use thiserror::Error;

/// Failure of one `get_weather` action
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Empty city or region, caught before any request is made
    #[error("City and state/region cannot be empty.")]
    Validation,

    /// The service answered but could not resolve the location
    #[error("Unable to determine the location.")]
    Lookup,

    /// Network failure, non-2xx status or undecodable body on the forecast call
    #[error("Error with processing the weather data.")]
    Transport(#[source] reqwest::Error),

    /// The payload did not have the shape needed to build a report
    #[error("Error: Unable to update UI with weather data.")]
    Render(#[from] ParseError),

    /// The condition icon could not be fetched or decoded
    #[error("Error: Unable to load weather icon.")]
    Icon(#[from] IconError),
}

impl WeatherError {
    /// Whether the report must be hidden after this error
    ///
    /// Icon failures are isolated and leave the rest of the report visible.
    pub fn hides_report(&self) -> bool {
        !matches!(self, WeatherError::Icon(_))
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Transport(err)
    }
}

/// Structural anomaly in a forecast payload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("forecast payload is not a JSON object")]
    NotAnObject,

    #[error("expected an object at `{path}`")]
    ExpectedObject { path: String },

    #[error("expected an array at `{path}`")]
    ExpectedArray { path: String },
}

/// Failure of the best-effort icon download
#[derive(Error, Debug)]
pub enum IconError {
    #[error("condition carries no icon")]
    Missing,

    #[error("icon request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("icon is not a recognised image: {0}")]
    Decode(#[from] image::ImageError),
}
