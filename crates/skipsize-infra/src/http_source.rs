//! Size source backed by the remote skip size API

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;

use skipsize_domain::model::{Location, SizeRecord};
use skipsize_domain::repository::SkipSizeSource;
use skipsize_types::{Error, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://app.wewantwaste.co.uk/api";

/// Fetches sizes with `GET {base}/skips/by-location?postcode=..&area=..`
pub struct HttpSkipSizeSource {
    client: Client,
    base_url: String,
}

impl HttpSkipSizeSource {
    /// Build a source. `timeout` of `None` waits for the response indefinitely.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/skips/by-location", self.base_url.trim_end_matches('/'))
    }
}

impl SkipSizeSource for HttpSkipSizeSource {
    fn fetch_sizes(&self, location: &Location) -> Result<Vec<SizeRecord>> {
        let endpoint = self.endpoint();
        debug!("GET {} postcode={} area={}", endpoint, location.postcode, location.area);

        let response = self
            .client
            .get(&endpoint)
            .query(&[
                ("postcode", location.postcode.as_str()),
                ("area", location.area.as_str()),
            ])
            .send()
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        let body = response.text().map_err(|e| Error::Http(e.to_string()))?;
        parse_sizes_response(status, &body)
    }
}

/// Interpret a size API response. Any non-success status means no data.
pub fn parse_sizes_response(status: StatusCode, body: &str) -> Result<Vec<SizeRecord>> {
    if !status.is_success() {
        return Err(Error::HttpStatus(status.as_u16()));
    }
    let sizes: Vec<SizeRecord> = serde_json::from_str(body)?;
    debug!("Decoded {} size records", sizes.len());
    Ok(sizes)
}
