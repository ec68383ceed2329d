//! Extraction of a [`WeatherReport`] from a weatherapi.com forecast payload.

use serde_json::{Map, Value};

use crate::constants::ICON_SCHEME_PREFIX;
use crate::error::ParseError;
use crate::models::{Field, WeatherReport};

/// Builds a report, substituting placeholders for absent fields
///
/// Only structural anomalies fail: a non-object root, a non-object node
/// where nesting is expected, or a `forecastday` that is not a list.
pub fn parse_report(payload: &Value) -> Result<WeatherReport, ParseError> {
    let root = payload.as_object().ok_or(ParseError::NotAnObject)?;

    let location = child_object(root, "location", "location")?;
    let current = child_object(root, "current", "current")?;
    let condition = match current {
        Some(current) => child_object(current, "condition", "current.condition")?,
        None => None,
    };
    let day = today(root)?;

    let icon_url = leaf(condition, "icon")
        .and_then(Value::as_str)
        .filter(|path| !path.is_empty())
        .map(|path| format!("{}{}", ICON_SCHEME_PREFIX, path));

    Ok(WeatherReport {
        city_name: unknown_if_absent(leaf(location, "name")),
        region_name: unknown_if_absent(leaf(location, "region")),
        country: unknown_if_absent(leaf(location, "country")),
        local_date_time: na_if_absent(leaf(location, "localtime")),
        temperature_f: na_if_absent(leaf(current, "temp_f")),
        condition_text: na_if_absent(leaf(condition, "text")),
        wind_speed_mph: na_if_absent(leaf(current, "wind_mph")),
        wind_direction: na_if_absent(leaf(current, "wind_dir")),
        uv_index: na_if_absent(leaf(current, "uv")),
        max_temp_f: na_if_absent(leaf(day, "maxtemp_f")),
        min_temp_f: na_if_absent(leaf(day, "mintemp_f")),
        chance_of_rain_pct: na_if_absent(leaf(day, "daily_chance_of_rain")),
        icon_url,
    })
}

/// Whether the service resolved the queried location to a country
///
/// Tolerates any shape; an unexpected one simply counts as unresolved.
pub fn location_resolved(payload: &Value) -> bool {
    match payload.pointer("/location/country") {
        None | Some(Value::Null) => false,
        Some(Value::String(country)) => !country.trim().is_empty(),
        Some(_) => true,
    }
}

/// `forecast.forecastday[0].day`, or `None` when any step is absent
fn today(root: &Map<String, Value>) -> Result<Option<&Map<String, Value>>, ParseError> {
    let Some(forecast) = child_object(root, "forecast", "forecast")? else {
        return Ok(None);
    };

    let days = match forecast.get("forecastday") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(days)) => days,
        Some(_) => {
            return Err(ParseError::ExpectedArray {
                path: "forecast.forecastday".to_string(),
            })
        }
    };

    let Some(first) = days.first() else {
        return Ok(None);
    };
    let first = match first {
        Value::Null => return Ok(None),
        Value::Object(first) => first,
        _ => {
            return Err(ParseError::ExpectedObject {
                path: "forecast.forecastday[0]".to_string(),
            })
        }
    };

    child_object(first, "day", "forecast.forecastday[0].day")
}

fn child_object<'a>(
    parent: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<&'a Map<String, Value>>, ParseError> {
    match parent.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(child)) => Ok(Some(child)),
        Some(_) => Err(ParseError::ExpectedObject {
            path: path.to_string(),
        }),
    }
}

fn leaf<'a>(parent: Option<&'a Map<String, Value>>, key: &str) -> Option<&'a Value> {
    parent?.get(key).filter(|value| !value.is_null())
}

fn unknown_if_absent(value: Option<&Value>) -> Field {
    value.cloned().map_or(Field::Unknown, Field::Value)
}

fn na_if_absent(value: Option<&Value>) -> Field {
    value.cloned().map_or(Field::NotAvailable, Field::Value)
}
