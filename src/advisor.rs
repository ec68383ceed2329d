//! Rule-based clothing suggestions.
//!
//! One temperature band advisory always comes first. Condition keywords are
//! then checked independently in a fixed order (rain, snow, wind, sun), so a
//! condition such as "Heavy rain and wind" collects several advisories.

use std::fmt;

/// Returned alone when the temperature is not a number
pub const INVALID_TEMPERATURE: &str = "Unable to suggest clothing due to invalid temperature.";

/// One clothing-recommendation sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// Below 40°F
    Cold,
    /// 40°F up to 60°F
    Cool,
    /// 60°F up to 80°F
    Mild,
    /// 80°F and above
    Hot,
    Rain,
    Snow,
    Wind,
    /// Sunny with a UV index above 7
    HighUv,
    /// Sunny with a UV index of 7 or less
    ModerateUv,
    /// Sunny, UV index unknown
    Sun,
}

impl Advisory {
    pub fn sentence(self) -> &'static str {
        match self {
            Advisory::Cold => "Wear a heavy coat, insulated gloves, a thick scarf, and a wool hat to stay warm in the cold.",
            Advisory::Cool => "A light jacket, a sweater, and long pants are suitable for the cool weather.",
            Advisory::Mild => "Wear a breathable T-shirt, shorts or lightweight pants, and comfortable shoes for mild weather.",
            Advisory::Hot => "Wear a sleeveless shirt or tank top, shorts, and sandals or sneakers to stay cool in the heat.",
            Advisory::Rain => "Carry an umbrella and wear a waterproof jacket or raincoat to stay dry.",
            Advisory::Snow => "Bundle up with thermal layers, a waterproof coat, snow boots, and a hat to handle the snowy weather.",
            Advisory::Wind => "Consider wearing a windbreaker or a jacket with a hood to protect against strong winds.",
            Advisory::HighUv => "Protect your skin with sunscreen (SPF 30 or higher), wear sunglasses, and a wide-brimmed hat.",
            Advisory::ModerateUv => "You may still want sunglasses and sunscreen for sun protection.",
            Advisory::Sun => "It looks sunny outside! Protect yourself with sunglasses and sunscreen.",
        }
    }

    /// Band advisory for a temperature in °F
    pub fn for_temperature(temperature: f64) -> Self {
        if temperature < 40.0 {
            Advisory::Cold
        } else if temperature < 60.0 {
            Advisory::Cool
        } else if temperature < 80.0 {
            Advisory::Mild
        } else {
            Advisory::Hot
        }
    }

    fn for_uv_index(uv_index: &str) -> Self {
        match parse_number(uv_index) {
            Some(uv) if uv > 7.0 => Advisory::HighUv,
            Some(_) => Advisory::ModerateUv,
            None => Advisory::Sun,
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sentence())
    }
}

/// The temperature could not be read as a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTemperature;

impl fmt::Display for InvalidTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(INVALID_TEMPERATURE)
    }
}

impl std::error::Error for InvalidTemperature {}

/// Ordered advisories for the given readings
pub fn advisories(
    temperature: &str,
    condition: &str,
    uv_index: &str,
) -> Result<Vec<Advisory>, InvalidTemperature> {
    let temperature = parse_number(temperature).ok_or(InvalidTemperature)?;

    let mut list = vec![Advisory::for_temperature(temperature)];

    let condition = condition.to_lowercase();
    if condition.contains("rain") {
        list.push(Advisory::Rain);
    }
    if condition.contains("snow") {
        list.push(Advisory::Snow);
    }
    if condition.contains("wind") {
        list.push(Advisory::Wind);
    }
    if condition.contains("sun") {
        list.push(Advisory::for_uv_index(uv_index));
    }

    Ok(list)
}

/// What to wear, as one space-joined message
pub fn suggest(temperature: &str, condition: &str, uv_index: &str) -> String {
    match advisories(temperature, condition, uv_index) {
        Ok(list) => list
            .iter()
            .map(|advisory| advisory.sentence())
            .collect::<Vec<_>>()
            .join(" "),
        Err(invalid) => invalid.to_string(),
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("-10", Advisory::Cold)]
    #[case("39.99", Advisory::Cold)]
    #[case("40", Advisory::Cool)]
    #[case("59.9", Advisory::Cool)]
    #[case("60", Advisory::Mild)]
    #[case("79.99", Advisory::Mild)]
    #[case("80", Advisory::Hot)]
    #[case("104.5", Advisory::Hot)]
    fn clear_weather_gets_one_band_sentence(#[case] temperature: &str, #[case] band: Advisory) {
        assert_eq!(suggest(temperature, "clear", "0"), band.sentence());
    }

    #[test]
    fn non_numeric_temperature_short_circuits() {
        assert_eq!(suggest("abc", "clear", "0"), INVALID_TEMPERATURE);
        assert_eq!(suggest("N/A", "Sunny", "9"), INVALID_TEMPERATURE);
        assert_eq!(advisories("", "rain", "0"), Err(InvalidTemperature));
    }

    #[test]
    fn rain_and_wind_both_apply_after_the_band() {
        let message = suggest("50", "Heavy Rain and Wind", "0");
        let expected = [
            Advisory::Cool.sentence(),
            Advisory::Rain.sentence(),
            Advisory::Wind.sentence(),
        ]
        .join(" ");
        assert_eq!(message, expected);
    }

    #[test]
    fn multiple_keywords_are_not_exclusive() {
        assert_eq!(
            advisories("28", "rainy and snowy", "1"),
            Ok(vec![Advisory::Cold, Advisory::Rain, Advisory::Snow])
        );
    }

    #[test]
    fn keyword_order_is_fixed_regardless_of_text_order() {
        assert_eq!(
            advisories("85", "sunny, windy, snow then rain", "3"),
            Ok(vec![
                Advisory::Hot,
                Advisory::Rain,
                Advisory::Snow,
                Advisory::Wind,
                Advisory::ModerateUv
            ])
        );
    }

    #[rstest]
    #[case("9", Advisory::HighUv)]
    #[case("7.1", Advisory::HighUv)]
    #[case("7", Advisory::ModerateUv)]
    #[case("3", Advisory::ModerateUv)]
    #[case("bad", Advisory::Sun)]
    #[case("N/A", Advisory::Sun)]
    fn sunny_conditions_consult_uv(#[case] uv_index: &str, #[case] expected: Advisory) {
        let message = suggest("70", "Sunny", uv_index);
        assert_eq!(
            message,
            format!("{} {}", Advisory::Mild.sentence(), expected.sentence())
        );
    }

    #[test]
    fn uv_is_ignored_without_sun() {
        assert_eq!(suggest("70", "Overcast", "11"), Advisory::Mild.sentence());
    }

    #[test]
    fn partly_cloudy_matches_no_keyword() {
        assert_eq!(suggest("65", "Partly cloudy", "2"), Advisory::Mild.sentence());
    }

    #[test]
    fn temperature_tolerates_surrounding_whitespace() {
        assert_eq!(suggest(" 30 ", "clear", "0"), Advisory::Cold.sentence());
    }
}
