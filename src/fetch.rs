//! NWIS URL construction and the HTTP fetch seam.
//!
//! Handles URL construction for the USGS Water Services daily-value (dv)
//! and instantaneous-value (iv) endpoints:
//!   https://nwis.waterservices.usgs.gov/nwis/dv
//!   https://nwis.waterservices.usgs.gov/nwis/iv
//!
//! The actual HTTP call goes through the `Fetcher` trait so `Station` can be
//! exercised in tests without a network; `HttpFetcher` is the
//! `reqwest::blocking` implementation used in production.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::Value;

use crate::model::NwisError;

const DV_BASE_URL: &str = "https://nwis.waterservices.usgs.gov/nwis/dv";
const IV_BASE_URL: &str = "https://nwis.waterservices.usgs.gov/nwis/iv";

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds the NWIS request URL for one site and date range.
///
/// The daily flag selects the dv endpoint, otherwise iv. Both take the same
/// query parameters: JSON format, the site number, and an inclusive
/// YYYY-MM-DD date range.
pub fn nwis_url(site: &str, start: NaiveDate, end: NaiveDate, daily: bool) -> String {
    nwis_url_with(site, start, end, daily, &BTreeMap::new())
}

/// Like `nwis_url`, with extra query parameters appended after the four
/// standard ones. NWIS accepts many optional filters (parameterCd,
/// siteStatus, ...); values are percent-encoded, keys are passed through.
pub fn nwis_url_with(
    site: &str,
    start: NaiveDate,
    end: NaiveDate,
    daily: bool,
    extra: &BTreeMap<String, String>,
) -> String {
    let base = if daily { DV_BASE_URL } else { IV_BASE_URL };
    let mut url = format!(
        "{}?format=json&sites={}&startDT={}&endDT={}",
        base,
        site,
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d"),
    );
    for (key, value) in extra {
        url.push('&');
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

// ---------------------------------------------------------------------------
// HTTP fetch seam
// ---------------------------------------------------------------------------

/// The HTTP collaborator contract: GET a URL, decode the body as JSON.
pub trait Fetcher {
    /// # Errors
    /// - `NetworkError`: the endpoint could not be reached.
    /// - `HttpError`: a non-2xx status.
    /// - `ParseError`: the body is not valid JSON.
    fn get_json(&self, url: &str) -> Result<Value, NwisError>;
}

/// Blocking reqwest-backed fetcher. No retries, no timeout beyond the
/// client's default.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        HttpFetcher {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn get_json(&self, url: &str) -> Result<Value, NwisError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| NwisError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NwisError::HttpError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json()
            .map_err(|e| NwisError::ParseError(format!("JSON decode failed: {}", e)))
    }
}
