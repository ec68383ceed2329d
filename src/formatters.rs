use crate::controller::ReportDisplay;
use crate::models::{ReportVisibility, WeatherIcon, WeatherReport};

/// Renders a lookup as labelled text lines
#[derive(Debug, Default)]
pub struct TextDisplay {
    visibility: ReportVisibility,
    error: Option<String>,
    lines: Vec<String>,
    icon: Option<WeatherIcon>,
}

impl TextDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> ReportVisibility {
        self.visibility
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Icon shown with the report; `None` while the report is hidden
    pub fn icon(&self) -> Option<&WeatherIcon> {
        match self.visibility {
            ReportVisibility::Shown => self.icon.as_ref(),
            ReportVisibility::Hidden => None,
        }
    }

    /// Report lines while shown, followed by the error line if any
    pub fn render(&self) -> String {
        let mut output = String::new();
        if self.visibility == ReportVisibility::Shown {
            for line in &self.lines {
                output.push_str(line);
                output.push('\n');
            }
        }
        if let Some(error) = &self.error {
            output.push_str(error);
            output.push('\n');
        }
        output
    }
}

impl ReportDisplay for TextDisplay {
    fn set_visibility(&mut self, visibility: ReportVisibility) {
        self.visibility = visibility;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn clear_error(&mut self) {
        self.error = None;
    }

    fn show_report(&mut self, report: &WeatherReport, advice: &str) {
        self.lines = format_report(report, advice);
        self.icon = None;
    }

    fn show_icon(&mut self, icon: &WeatherIcon) {
        self.icon = Some(icon.clone());
    }
}

/// Formats a report and its advice into display lines
pub fn format_report(report: &WeatherReport, advice: &str) -> Vec<String> {
    vec![
        format!("City: {}", report.city_name),
        format!("State/Region: {}, {}", report.region_name, report.country),
        format!("Date + Time: {}", report.local_date_time),
        format!("Temperature: {}\u{00b0}F", report.temperature_f),
        format!("Condition: {}", report.condition_text),
        format!("Windspeed: {} mph", report.wind_speed_mph),
        format!("Wind Direction: {}", report.wind_direction),
        format!("UV Index: {}", report.uv_index),
        format!("Max Temp: {}\u{00b0}F", report.max_temp_f),
        format!("Min Temp: {}\u{00b0}F", report.min_temp_f),
        format!("Chance of Rain: {}%", report.chance_of_rain_pct),
        format!("What to wear: {}", advice),
    ]
}
