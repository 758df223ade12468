mod http;
mod replay;
mod simulated;

use crate::app_config::{AppConfig, FixSourceConfig};
use crate::domain::{GeoFix, GeoLocationError};
use async_trait::async_trait;
use std::fmt::Debug;
use std::path::PathBuf;
use thiserror::Error;

pub use http::HttpFixSource;
pub use replay::ReplayFixSource;
pub use simulated::SimulatedFixSource;

/// Something that can be polled for the current position of the device.
#[async_trait]
pub trait FixSource: Debug + Send {
    fn kind(&self) -> &'static str;

    async fn next_fix(&mut self) -> Result<GeoFix, FixSourceError>;
}

pub async fn new_fix_source(config: &AppConfig) -> Result<Box<dyn FixSource>, FixSourceError> {
    let source: Box<dyn FixSource> = match config.source() {
        FixSourceConfig::Simulated(simulated) => Box::new(SimulatedFixSource::new(simulated.route().to_vec())?),
        FixSourceConfig::Http(http) => Box::new(HttpFixSource::new(http)?),
        FixSourceConfig::Replay(replay) => Box::new(ReplayFixSource::load(replay.file()).await?),
    };
    Ok(source)
}

#[derive(Error, Debug)]
pub enum FixSourceError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("fix source set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
    #[error("could not read {path:?}: {source}")]
    Io { source: std::io::Error, path: PathBuf },
    #[error("malformed fix data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid fix: {0}")]
    InvalidFix(#[from] GeoLocationError),
    #[error("invalid fix timestamp: {0}")]
    InvalidTimestamp(f64),
    #[error("a simulated route needs at least one location")]
    EmptyRoute,
    #[error("no more fixes available")]
    Exhausted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::domain::GeoLocation;
    use test_log::test;

    #[test(tokio::test)]
    async fn builds_the_simulated_source_by_default() {
        let config = AppConfigBuilder::new().build();

        let source = new_fix_source(&config).await.unwrap();
        assert_eq!(source.kind(), "simulated");
    }

    #[test(tokio::test)]
    async fn builds_an_http_source() {
        let config = AppConfigBuilder::new().http("http://localhost:1234/fix".to_string(), None).build();

        let source = new_fix_source(&config).await.unwrap();
        assert_eq!(source.kind(), "http");
    }

    #[test(tokio::test)]
    async fn builds_a_replay_source() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/resources/commute.json");
        let config = AppConfigBuilder::new().replay(path).build();

        let source = new_fix_source(&config).await.unwrap();
        assert_eq!(source.kind(), "replay");
    }

    #[test(tokio::test)]
    async fn fails_for_an_empty_route() {
        let config = AppConfigBuilder::new().route(Vec::<GeoLocation>::new()).build();

        let result = new_fix_source(&config).await;
        assert!(matches!(result, Err(FixSourceError::EmptyRoute)));
    }

    #[test(tokio::test)]
    async fn fails_for_a_missing_replay_file() {
        let config = AppConfigBuilder::new().replay(PathBuf::from("does/not/exist.json")).build();

        let result = new_fix_source(&config).await;
        assert!(matches!(result, Err(FixSourceError::Io { .. })));
    }
}
