use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    LookupConfig,
    classify::{icon_for, joke_for},
    model::{ConditionCode, LookupRequest, WeatherSummary, whole_celsius},
    provider::{LookupError, WeatherProvider, validate},
};

/// Current-weather lookup against OpenWeatherMap.
#[derive(Debug, Clone)]
pub struct WeatherLookupService {
    config: LookupConfig,
    http: Client,
}

impl WeatherLookupService {
    pub fn new(config: LookupConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Use a caller-built client, e.g. one with a timeout configured.
    pub fn with_client(config: LookupConfig, http: Client) -> Self {
        Self { config, http }
    }

    /// Look up `city` in `country` using the configured credential.
    pub async fn lookup_city(
        &self,
        city: &str,
        country: &str,
    ) -> Result<WeatherSummary, LookupError> {
        let request = LookupRequest::new(city, country, self.config.api_key.as_str());
        self.lookup(&request).await
    }

    async fn fetch_current(
        &self,
        request: &LookupRequest,
    ) -> Result<OwCurrentResponse, LookupError> {
        let url = self.config.endpoint();
        let query = request.query();

        debug!(url = %url, q = %query, "Requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("units", "metric"),
                ("appid", request.api_key.trim()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        debug!(status = %status, "Received provider response");

        if !status.is_success() {
            let error: OwErrorBody = serde_json::from_str(&body).map_err(|err| {
                LookupError::TransportFailure(format!(
                    "provider returned status {status} with unreadable body ({err}): {}",
                    truncate_body(&body)
                ))
            })?;
            return Err(LookupError::ProviderError(error.message));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: String,
}

impl TryFrom<OwCurrentResponse> for WeatherSummary {
    type Error = LookupError;

    fn try_from(parsed: OwCurrentResponse) -> Result<Self, Self::Error> {
        let Some(condition) = parsed.weather.into_iter().next() else {
            return Err(LookupError::TransportFailure(
                "malformed response body: no weather conditions present".to_string(),
            ));
        };

        let condition_code = ConditionCode::new(condition.icon);

        Ok(WeatherSummary {
            humidity_percent: whole_percent(parsed.main.humidity),
            wind_speed_kph: parsed.wind.speed,
            temperature_celsius: whole_celsius(parsed.main.temp),
            location_name: parsed.name,
            icon_key: icon_for(&condition_code),
            joke_text: joke_for(&condition_code).to_string(),
            condition_code,
        })
    }
}

#[async_trait]
impl WeatherProvider for WeatherLookupService {
    #[instrument(skip(self, request), fields(city = %request.city, country = %request.country))]
    async fn lookup(&self, request: &LookupRequest) -> Result<WeatherSummary, LookupError> {
        validate(request)?;

        let result = self
            .fetch_current(request)
            .await
            .and_then(WeatherSummary::try_from);

        match &result {
            Ok(summary) => info!(
                location = %summary.location_name,
                temp = summary.temperature_celsius,
                code = %summary.condition_code,
                "Weather lookup succeeded"
            ),
            Err(err) => warn!(error = %err, "Weather lookup failed"),
        }

        result
    }
}

/// Provider humidity is a JSON number; round it into 0..=100.
fn whole_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
