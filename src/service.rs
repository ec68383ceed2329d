use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::client::WeatherApiClient;
use crate::config::Config;
use crate::controller::Controller;
use crate::error::WeatherError;
use crate::formatters::TextDisplay;
use crate::models::GetWeatherRequest;

/// MCP server answering "what should I wear" weather lookups
#[derive(Clone)]
pub struct Weather {
    controller: Controller,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: Config) -> Result<Self> {
        let client = WeatherApiClient::new(config)?;

        Ok(Self {
            controller: Controller::new(client),
            tool_router: Self::tool_router(),
        })
    }
}

/// Converts what the display ended up showing into a tool result
fn into_tool_result(display: &TextDisplay, outcome: Result<(), WeatherError>) -> CallToolResult {
    match outcome {
        Err(err) if err.hides_report() => {
            CallToolResult::error(vec![Content::text(err.to_string())])
        }
        _ => {
            let mut content = vec![Content::text(display.render())];
            if let Some(icon) = display.icon() {
                content.push(Content::image(
                    STANDARD.encode(&icon.bytes),
                    icon.mime_type.clone(),
                ));
            }
            CallToolResult::success(content)
        }
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weatherwear".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Current weather and clothing suggestions powered by weatherapi.com. \
                Provide a city and its state or region."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets current conditions and what to wear for a city
    #[tool(description = "Get current weather, today's high/low and chance of rain, plus a clothing suggestion for a city. Provide the city and its state or region (e.g., city: 'Austin', state: 'Texas').")]
    async fn get_weather(
        &self,
        Parameters(request): Parameters<GetWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Weather requested for: {}, {}", request.city, request.state);

        let mut display = TextDisplay::new();
        let outcome = self
            .controller
            .get_weather(&request.city, &request.state, &mut display)
            .await;

        Ok(into_tool_result(&display, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ReportDisplay;
    use crate::error::IconError;
    use crate::models::{Field, ReportVisibility, WeatherReport};

    fn shown_display() -> TextDisplay {
        let report = WeatherReport {
            city_name: Field::Unknown,
            region_name: Field::Unknown,
            country: Field::Unknown,
            local_date_time: Field::NotAvailable,
            temperature_f: Field::NotAvailable,
            condition_text: Field::NotAvailable,
            wind_speed_mph: Field::NotAvailable,
            wind_direction: Field::NotAvailable,
            uv_index: Field::NotAvailable,
            max_temp_f: Field::NotAvailable,
            min_temp_f: Field::NotAvailable,
            chance_of_rain_pct: Field::NotAvailable,
            icon_url: None,
        };
        let mut display = TextDisplay::new();
        display.show_report(&report, "advice");
        display.set_visibility(ReportVisibility::Shown);
        display
    }

    #[test]
    fn hiding_errors_become_tool_errors() {
        let result = into_tool_result(&TextDisplay::new(), Err(WeatherError::Lookup));
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn icon_errors_still_succeed() {
        let mut display = shown_display();
        display.show_error("Error: Unable to load weather icon.");
        let result = into_tool_result(&display, Err(WeatherError::Icon(IconError::Missing)));
        assert_eq!(result.is_error, Some(false));
    }

    #[test]
    fn success_carries_rendered_text() {
        let result = into_tool_result(&shown_display(), Ok(()));
        assert_eq!(result.is_error, Some(false));
    }
}
