// src/geocode.rs
//! Reverse-geocoding enrichers
//!
//! The parser never performs network lookups. Enrichers are applied by the
//! batch driver after decoding, to records that carry a coordinate pair.

use crate::error::{AppError, Result};
use serde::Deserialize;
use std::time::Duration;

/// Resolves a decimal-degree position to a human-readable location string.
pub trait ReverseGeocoder: Send + Sync {
    /// Key under which the resolved value is attached to a decoded record.
    fn name(&self) -> &str;

    fn locate(&self, latitude: f64, longitude: f64) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct What3WordsResponse {
    words: String,
}

/// Client for the what3words convert-to-3wa endpoint.
pub struct What3WordsGeocoder {
    api_key: String,
    client: reqwest::blocking::Client,
}

impl What3WordsGeocoder {
    pub fn new(api_key: String) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("nmea-decoder/0.1")
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { api_key, client })
    }
}

impl ReverseGeocoder for What3WordsGeocoder {
    fn name(&self) -> &str {
        "what3words"
    }

    fn locate(&self, latitude: f64, longitude: f64) -> Result<String> {
        let url = format!(
            "https://api.what3words.com/v3/convert-to-3wa?coordinates={},{}&key={}",
            latitude, longitude, self.api_key
        );

        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(AppError::Geocode(format!(
                "what3words request failed: {}",
                response.status()
            )));
        }

        let body: What3WordsResponse = response.json()?;
        Ok(body.words)
    }
}
