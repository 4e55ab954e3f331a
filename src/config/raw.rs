use std::{path::PathBuf, time::Duration};

use duration_str::deserialize_option_duration;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("opencivicdb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub geolocation: Option<Geolocation>,
    pub weather: Option<Weather>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub file: PathBuf,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geolocation {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Weather {
    pub api_key: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

impl Default for Weather {
    fn default() -> Self {
        Config::default().weather.expect("Weather configuration")
    }
}
