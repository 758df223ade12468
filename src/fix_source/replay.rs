use crate::domain::{GeoFix, GeoLocation};
use crate::fix_source::{FixSource, FixSourceError};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::VecDeque;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

/// Replays a recorded track, one fix per poll.
#[derive(Debug)]
pub struct ReplayFixSource {
    fixes: VecDeque<GeoFix>,
}

#[derive(Debug, Deserialize)]
struct RecordedFix {
    latitude: f64,
    longitude: f64,
    timestamp: f64, // Seconds since the Unix epoch
}

impl ReplayFixSource {
    #[instrument]
    pub async fn load(path: &Path) -> Result<Self, FixSourceError> {
        info!("📁 Loading track...");
        let content = fs::read_to_string(path).await.map_err(|e| FixSourceError::Io {
            source: e,
            path: path.to_path_buf(),
        })?;

        let source = Self::from_json(&content)?;
        info!("📁 Loading track... OK, {} fixes", source.remaining());
        Ok(source)
    }

    pub fn from_json(json: &str) -> Result<Self, FixSourceError> {
        let recorded = serde_json::from_str::<Vec<RecordedFix>>(json)?;
        let fixes = recorded
            .into_iter()
            .map(|fix| {
                let location = GeoLocation::new(fix.latitude, fix.longitude)?;
                GeoFix::from_epoch_seconds(location, fix.timestamp).ok_or(FixSourceError::InvalidTimestamp(fix.timestamp))
            })
            .collect::<Result<VecDeque<GeoFix>, FixSourceError>>()?;

        Ok(ReplayFixSource { fixes })
    }

    pub fn remaining(&self) -> usize {
        self.fixes.len()
    }
}

#[async_trait]
impl FixSource for ReplayFixSource {
    fn kind(&self) -> &'static str {
        "replay"
    }

    #[instrument(fields(source = self.kind()), skip(self))]
    async fn next_fix(&mut self) -> Result<GeoFix, FixSourceError> {
        let fix = self.fixes.pop_front().ok_or(FixSourceError::Exhausted)?;
        debug!("🛰️ Replaying fix, {} remaining", self.fixes.len());
        Ok(fix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use test_log::test;

    #[test(tokio::test)]
    async fn loads_a_track_from_disk() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/resources/commute.json");

        let source = ReplayFixSource::load(&path).await.unwrap();
        assert_eq!(source.remaining(), 5);
    }

    #[test(tokio::test)]
    async fn replays_fixes_in_order_until_exhausted() {
        let mut source = ReplayFixSource::from_json(include_str!("../../tests/resources/commute.json")).unwrap();

        let first = source.next_fix().await.unwrap();
        let second = source.next_fix().await.unwrap();
        assert_eq!(first.location, GeoLocation::new(51.8615899, 4.3580323).unwrap());
        assert_eq!(second.elapsed_seconds_since(&first), 1.0);

        for _ in 0..3 {
            source.next_fix().await.unwrap();
        }
        assert!(matches!(source.next_fix().await, Err(FixSourceError::Exhausted)));
    }

    #[test]
    fn rejects_a_fix_out_of_range() {
        let json = r#"[{ "latitude": 0.0, "longitude": 190.0, "timestamp": 0.0 }]"#;

        assert!(matches!(ReplayFixSource::from_json(json), Err(FixSourceError::InvalidFix(_))));
    }

    #[test]
    fn rejects_a_fix_without_timestamp() {
        let json = r#"[{ "latitude": 0.0, "longitude": 0.0 }]"#;

        assert!(matches!(ReplayFixSource::from_json(json), Err(FixSourceError::Json(_))));
    }

    #[test]
    fn an_empty_track_is_immediately_exhausted() {
        let source = ReplayFixSource::from_json("[]").unwrap();

        assert_eq!(source.remaining(), 0);
    }
}
