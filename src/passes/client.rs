use std::env;
use std::time::Duration;

use chrono::DateTime;
use reqwest::blocking::Client;
use serde::Deserialize;

use super::error::PassError;
use super::types::Pass;
use super::{API_KEY_ENV, ISS_NORAD_ID, N2YO_BASE_URL};

/// Blocking client for the N2YO pass-prediction endpoints.
///
/// Each instance owns its API key; there is no process-wide key state.
/// The key is resolved once in [`PassClient::new`] and can be replaced
/// with [`PassClient::set_api_key`].
pub struct PassClient {
    http: Client,
    api_key: Option<String>,
}

/// Wire format of a prediction response. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct PassesResponse {
    #[serde(default)]
    passes: Vec<PassEntry>,
}

#[derive(Debug, Deserialize)]
struct PassEntry {
    #[serde(rename = "startUTC")]
    start_utc: i64,
    #[serde(default)]
    duration: u32,
    mag: Option<f64>,
}

impl PassClient {
    /// Build a client with the given key, falling back to the
    /// `N2YO_API_KEY` environment variable (read here, not at load time).
    ///
    /// A client without a resolvable key can still be constructed; its
    /// requests fail with [`PassError::MissingApiKey`] before any I/O.
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self, PassError> {
        let http = Client::builder().timeout(timeout).build()?;
        let api_key = api_key
            .filter(|k| !k.is_empty())
            .or_else(|| env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()));
        Ok(PassClient { http, api_key })
    }

    /// Replace the active API key; subsequent requests use only the new one.
    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key);
    }

    /// Fetch the next `count` ISS passes for the given coordinates.
    ///
    /// `count` is an upper bound; the upstream service may return fewer.
    /// Passes come back in upstream order (ascending rise time); no
    /// re-sorting or deduplication is applied. Exactly one request is
    /// issued per call, with no retries.
    pub fn get_passes(
        &self,
        lat: f64,
        lon: f64,
        count: u32,
        visible_only: bool,
    ) -> Result<Vec<Pass>, PassError> {
        let api_key = self.api_key.as_deref().ok_or(PassError::MissingApiKey)?;
        let url = request_url(api_key, lat, lon, count, visible_only);

        log::debug!(
            "requesting up to {} {} passes for lat={} lon={}",
            count,
            if visible_only { "visible" } else { "all" },
            lat,
            lon
        );

        let response = self.http.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(PassError::UpstreamStatus(status));
        }

        // Body is read before decoding so transport failures and format
        // failures stay distinguishable.
        let body = response.text()?;
        decode_passes(&body)
    }
}

// Endpoint selection per the N2YO contract: visualpasses carries magnitude
// data, predictions returns every geometric pass. The altitude segment is
// fixed to sea level.
fn request_url(api_key: &str, lat: f64, lon: f64, count: u32, visible_only: bool) -> String {
    let endpoint = if visible_only {
        "visualpasses"
    } else {
        "predictions"
    };
    format!(
        "{}/{}/{}/{}/{}/0/{}/&apiKey={}",
        N2YO_BASE_URL, endpoint, ISS_NORAD_ID, lat, lon, count, api_key
    )
}

fn decode_passes(body: &str) -> Result<Vec<Pass>, PassError> {
    let decoded: PassesResponse = serde_json::from_str(body)?;

    let mut passes = Vec::with_capacity(decoded.passes.len());
    for entry in decoded.passes {
        let rise_time = DateTime::from_timestamp(entry.start_utc, 0)
            .ok_or(PassError::InvalidRiseTime(entry.start_utc))?;
        passes.push(Pass {
            rise_time,
            duration_seconds: entry.duration,
            magnitude: entry.mag,
        });
    }

    log::debug!("decoded {} passes", passes.len());
    Ok(passes)
}
