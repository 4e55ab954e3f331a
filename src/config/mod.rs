use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{anyhow, Result};

use ocdb_entities::geo::MapPoint;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "opencivicdb.toml";

const ENV_NAME_DB_FILE: &str = "OPENCIVICDB_DB";

const DEFAULT_WEATHER_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Config {
    pub db: Db,
    pub geolocation: Geolocation,
    pub weather: Weather,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_file) = env::var(ENV_NAME_DB_FILE) {
            cfg.db.file = db_file.into();
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// JSON collection dump that backs the in-memory store.
    pub file: PathBuf,
}

pub struct Geolocation {
    pub position: Option<MapPoint>,
}

pub struct Weather {
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            geolocation,
            weather,
        } = from;
        let db = Db {
            file: db.unwrap_or_default().file,
        };
        let raw::Geolocation { lat, lng } = geolocation.unwrap_or_default();
        let position = match (lat, lng) {
            (Some(lat), Some(lng)) => Some(
                MapPoint::try_from_lat_lng_deg(lat, lng)
                    .map_err(|_| anyhow!("Invalid fallback position"))?,
            ),
            (None, None) => None,
            _ => {
                return Err(anyhow!(
                    "Incomplete fallback position: both lat and lng are required"
                ));
            }
        };
        let raw_weather = weather.unwrap_or_default();
        let weather = Weather {
            api_key: raw_weather.api_key,
            timeout: raw_weather.timeout.unwrap_or(DEFAULT_WEATHER_TIMEOUT),
        };
        Ok(Self {
            db,
            geolocation: Geolocation { position },
            weather,
        })
    }
}
