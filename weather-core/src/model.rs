use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classify::IconKey;

/// One lookup as issued by the presentation layer.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub city: String,
    pub country: String,
    pub api_key: String,
}

impl LookupRequest {
    pub fn new(
        city: impl Into<String>,
        country: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
            api_key: api_key.into(),
        }
    }

    /// Provider query value, `City,Country`.
    pub fn query(&self) -> String {
        format!("{},{}", self.city.trim(), self.country.trim())
    }
}

/// Provider-issued condition token such as `"10d"`. Only ever used as a classification key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionCode(String);

impl ConditionCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConditionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConditionCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Normalized result of a successful lookup.
///
/// Values come from the provider without range checks. Humidity is rounded and
/// clamped into 0..=100 on conversion; wind speed is not validated at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub humidity_percent: u8,
    /// Passed through from the provider unchanged.
    pub wind_speed_kph: f64,
    pub temperature_celsius: i32,
    pub location_name: String,
    pub condition_code: ConditionCode,
    pub icon_key: IconKey,
    pub joke_text: String,
}

/// Provider temperatures are shown as whole degrees, truncated toward zero.
pub fn whole_celsius(temp: f64) -> i32 {
    // `as` saturates on out-of-range values and maps NaN to 0.
    temp.trunc() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_joins_city_and_country() {
        let req = LookupRequest::new(" Stockholm", "Sweden ", "KEY");
        assert_eq!(req.query(), "Stockholm,Sweden");
    }

    #[test]
    fn whole_celsius_truncates_toward_zero() {
        assert_eq!(whole_celsius(21.9), 21);
        assert_eq!(whole_celsius(15.7), 15);
        assert_eq!(whole_celsius(-0.5), 0);
        assert_eq!(whole_celsius(-3.99), -3);
        assert_eq!(whole_celsius(0.0), 0);
    }

    #[test]
    fn condition_code_serializes_as_plain_string() {
        let code = ConditionCode::from("13n");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"13n\"");
        assert_eq!(code.to_string(), "13n");
    }
}
