use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::constants::{NOT_AVAILABLE, UNKNOWN};
use crate::error::WeatherError;

// ============================================================================
// Query
// ============================================================================

/// A validated location to look up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: String,
    pub region: String,
}

impl WeatherQuery {
    /// Trims and title-cases raw user input, rejecting empty fields
    pub fn from_input(city: &str, region: &str) -> Result<Self, WeatherError> {
        let city = title_case(city.trim());
        let region = title_case(region.trim());

        if city.is_empty() || region.is_empty() {
            return Err(WeatherError::Validation);
        }

        Ok(Self { city, region })
    }

    /// Location string for the `q` parameter, e.g. `"Austin, Texas"`
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.region)
    }
}

/// Upper-cases the first letter of every run of letters and lower-cases the rest
fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_word = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if in_word {
                output.extend(c.to_lowercase());
            } else {
                output.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            output.push(c);
            in_word = false;
        }
    }
    output
}

// ============================================================================
// Report
// ============================================================================

/// One display value of a report: what the payload held, or a placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Value(Value),
    /// Rendered as `"Unknown"`
    Unknown,
    /// Rendered as `"N/A"`
    NotAvailable,
}

impl Field {
    pub fn is_present(&self) -> bool {
        matches!(self, Field::Value(_))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Value(Value::String(text)) => f.write_str(text),
            Field::Value(other) => write!(f, "{}", other),
            Field::Unknown => f.write_str(UNKNOWN),
            Field::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// Current conditions and today's forecast for one location
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city_name: Field,
    pub region_name: Field,
    pub country: Field,
    pub local_date_time: Field,
    pub temperature_f: Field,
    pub condition_text: Field,
    pub wind_speed_mph: Field,
    pub wind_direction: Field,
    pub uv_index: Field,
    pub max_temp_f: Field,
    pub min_temp_f: Field,
    pub chance_of_rain_pct: Field,
    /// Fetchable icon URL, when the condition names one
    pub icon_url: Option<String>,
}

/// All-or-nothing visibility of the report on a display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportVisibility {
    #[default]
    Hidden,
    Shown,
}

/// Successful outcome of a lookup
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub report: WeatherReport,
    pub advice: String,
}

/// Downloaded condition icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherIcon {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetWeatherRequest {
    /// City name, e.g. "Austin"
    pub city: String,
    /// State or region, e.g. "Texas"
    pub state: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn input_is_trimmed_and_title_cased() {
        let query = WeatherQuery::from_input("  new york ", "\tnEW yORK\n").unwrap();
        assert_eq!(query.city, "New York");
        assert_eq!(query.region, "New York");
        assert_eq!(query.location(), "New York, New York");
    }

    #[test]
    fn title_case_restarts_after_non_letters() {
        assert_eq!(title_case("o'fallon"), "O'Fallon");
        assert_eq!(title_case("st. louis"), "St. Louis");
        assert_eq!(title_case("winston-salem"), "Winston-Salem");
    }

    #[test]
    fn empty_city_or_region_is_rejected() {
        assert!(matches!(
            WeatherQuery::from_input("", "Texas"),
            Err(WeatherError::Validation)
        ));
        assert!(matches!(
            WeatherQuery::from_input("Austin", "   "),
            Err(WeatherError::Validation)
        ));
    }

    #[test]
    fn fields_render_values_and_placeholders() {
        assert_eq!(Field::Value(json!("Austin")).to_string(), "Austin");
        assert_eq!(Field::Value(json!(65.0)).to_string(), "65.0");
        assert_eq!(Field::Value(json!(5)).to_string(), "5");
        assert_eq!(Field::Unknown.to_string(), "Unknown");
        assert_eq!(Field::NotAvailable.to_string(), "N/A");
    }

    #[test]
    fn visibility_starts_hidden() {
        assert_eq!(ReportVisibility::default(), ReportVisibility::Hidden);
    }
}
