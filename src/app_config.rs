use crate::domain::GeoLocation;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    source: FixSourceConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn source(&self) -> &FixSourceConfig {
        &self.source
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    #[serde(with = "humantime_serde")]
    poll_interval: Duration,
    geolocation_enabled: bool,
}

impl Core {
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn geolocation_enabled(&self) -> bool {
        self.geolocation_enabled
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FixSourceConfig {
    Simulated(Simulated),
    Http(Http),
    Replay(Replay),
}

#[derive(Debug, Deserialize)]
pub struct Simulated {
    route: Vec<GeoLocation>,
}

impl Simulated {
    pub fn route(&self) -> &[GeoLocation] {
        &self.route
    }
}

#[derive(Debug, Deserialize)]
pub struct Http {
    url: String,
    timeout_ms: u64,
    api_key: Option<String>,
}

impl Http {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout_ms(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub struct Replay {
    file: PathBuf,
}

impl Replay {
    pub fn file(&self) -> &Path {
        &self.file
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    poll_interval: Duration::from_millis(10),
                    geolocation_enabled: true,
                },
                source: FixSourceConfig::Simulated(Simulated {
                    route: vec![GeoLocation {
                        latitude: 34.0522,
                        longitude: -118.2437,
                        altitude: 0.0,
                    }],
                }),
            },
        }
    }

    pub fn route(mut self, route: Vec<GeoLocation>) -> Self {
        self.config.source = FixSourceConfig::Simulated(Simulated { route });
        self
    }

    pub fn http(mut self, url: String, api_key: Option<String>) -> Self {
        self.config.source = FixSourceConfig::Http(Http {
            url,
            timeout_ms: 1_000,
            api_key,
        });
        self
    }

    pub fn replay(mut self, file: PathBuf) -> Self {
        self.config.source = FixSourceConfig::Replay(Replay { file });
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
