use std::time::Duration;

use anyhow::anyhow;
use serde::Deserialize;

use ocdb_core::gateways::weather::{WeatherGateway, WeatherGatewayError};
use ocdb_entities::{geo::MapPoint, weather::WeatherObservation};

const DEFAULT_API_URL: &str = "https://api.weatherapi.com/v1/current.json";

/// Client for the weatherapi.com current-conditions endpoint.
pub struct WeatherApiGateway {
    api_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl WeatherApiGateway {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        Self::with_api_url(DEFAULT_API_URL, api_key, timeout)
    }

    /// Mainly useful for pointing tests at a local server.
    pub fn with_api_url(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            client,
        })
    }
}

impl std::fmt::Debug for WeatherApiGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        f.debug_struct("WeatherApiGateway")
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: Current,
}

#[derive(Debug, Deserialize)]
struct Current {
    condition: Condition,
    temp_c: f64,
    wind_kph: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct Condition {
    text: String,
    code: i32,
}

impl From<CurrentResponse> for WeatherObservation {
    fn from(from: CurrentResponse) -> Self {
        let CurrentResponse {
            current:
                Current {
                    condition: Condition { text, code },
                    temp_c,
                    wind_kph,
                    humidity,
                },
        } = from;
        Self {
            condition_text: text,
            condition_code: code,
            temp_celsius: temp_c,
            wind_kph,
            humidity,
        }
    }
}

impl WeatherGateway for WeatherApiGateway {
    fn current_weather(&self, pos: MapPoint) -> Result<WeatherObservation, WeatherGatewayError> {
        let res = self
            .client
            .get(&self.api_url)
            .query(&[("key", self.api_key.as_str()), ("q", &pos.to_string())])
            .send()
            .map_err(|err| {
                if err.is_timeout() {
                    WeatherGatewayError::Timeout
                } else {
                    log::error!("Could not fetch weather: {err}");
                    WeatherGatewayError::Other(err.into())
                }
            })?;
        if !res.status().is_success() {
            log::error!("Weather provider response status: {:?}", res.status());
            return Err(WeatherGatewayError::Other(anyhow!(
                "weather provider returned {}",
                res.status()
            )));
        }
        let response: CurrentResponse = res.json().map_err(|err| {
            log::error!("Malformed weather response: {err}");
            WeatherGatewayError::MalformedResponse
        })?;
        Ok(response.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_current_conditions() {
        let json = r#"{
            "location": { "name": "Munich" },
            "current": {
                "temp_c": 17.3,
                "wind_kph": 9.4,
                "humidity": 71,
                "condition": { "text": "Partly cloudy", "code": 1003 }
            }
        }"#;
        let response: CurrentResponse = serde_json::from_str(json).unwrap();
        let observation = WeatherObservation::from(response);
        assert_eq!("Partly cloudy", observation.condition_text);
        assert_eq!(1003, observation.condition_code);
        assert_eq!(17.3, observation.temp_celsius);
        assert_eq!(9.4, observation.wind_kph);
        assert_eq!(71, observation.humidity);
    }
}
