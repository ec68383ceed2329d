/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weatherwear/0.1.0";

/// weatherapi.com API base URL
pub const WEATHERAPI_BASE: &str = "http://api.weatherapi.com/v1";

/// Forecast endpoint, relative to the base URL
pub const FORECAST_PATH: &str = "forecast.json";

/// Only today's forecast block is read
pub const FORECAST_DAYS: u32 = 1;

/// Condition icons come back protocol-relative (`//cdn.weatherapi.com/...`)
pub const ICON_SCHEME_PREFIX: &str = "http:";

/// Placeholder for absent location names
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for absent display values
pub const NOT_AVAILABLE: &str = "N/A";

pub const ENV_API_KEY: &str = "WEATHERAPI_KEY";
pub const ENV_BASE_URL: &str = "WEATHERAPI_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "WEATHERAPI_TIMEOUT_SECS";
