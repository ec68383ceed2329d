//! Current weather and clothing suggestions from weatherapi.com.

pub mod advisor;
pub mod client;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod formatters;
pub mod models;
pub mod parser;
pub mod service;

pub use advisor::suggest;
pub use error::WeatherError;
pub use models::{Forecast, WeatherQuery, WeatherReport};
