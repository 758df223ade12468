use crate::app_config::Http;
use crate::domain::{GeoFix, GeoLocation};
use crate::fix_source::{FixSource, FixSourceError};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Polls a JSON endpoint that reports the current position of a device.
#[derive(Debug)]
pub struct HttpFixSource {
    client: Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct FixResponse {
    latitude: f64,
    longitude: f64,
    timestamp: Option<f64>, // Seconds since the Unix epoch
}

impl HttpFixSource {
    pub fn new(config: &Http) -> Result<Self, FixSourceError> {
        Ok(HttpFixSource {
            client: new_client(config)?,
            url: config.url().to_string(),
        })
    }
}

fn new_client(config: &Http) -> Result<Client, FixSourceError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(api_key) = config.api_key() {
        let mut api_key_value = HeaderValue::from_str(api_key)?;
        api_key_value.set_sensitive(true);
        headers.insert("x-api-key", api_key_value);
    }

    let client = Client::builder().timeout(config.timeout_ms()).default_headers(headers).build()?;
    Ok(client)
}

#[async_trait]
impl FixSource for HttpFixSource {
    fn kind(&self) -> &'static str {
        "http"
    }

    #[instrument(fields(source = self.kind(), url = %self.url), skip(self))]
    async fn next_fix(&mut self) -> Result<GeoFix, FixSourceError> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let fix_response = response.json::<FixResponse>().await?;
        debug!("🛰️ Received fix {:?}", fix_response);

        let location = GeoLocation::new(fix_response.latitude, fix_response.longitude)?;
        match fix_response.timestamp {
            Some(seconds) => GeoFix::from_epoch_seconds(location, seconds).ok_or(FixSourceError::InvalidTimestamp(seconds)),
            None => Ok(GeoFix::new(location, Utc::now())),
        }
    }
}
