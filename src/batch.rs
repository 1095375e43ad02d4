// src/batch.rs
//! Batch decoding driver
//!
//! Feeds isolated sentences through the parser one at a time. A decode
//! failure is recorded alongside the successes and the batch keeps going.

use crate::error::Result;
use crate::geocode::ReverseGeocoder;
use crate::nmea::{parse, SentenceRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// A successfully decoded sentence plus any enrichment values.
#[derive(Debug, Clone, Serialize)]
pub struct DecodedSentence {
    #[serde(flatten)]
    pub record: SentenceRecord,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub enrichments: BTreeMap<String, String>,
}

/// A sentence the parser rejected, with the rendered reason.
#[derive(Debug, Clone, Serialize)]
pub struct DecodeFailure {
    pub sentence: String,
    pub error: String,
}

/// Outcome of decoding one batch of sentences.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub decoded: Vec<DecodedSentence>,
    pub failures: Vec<DecodeFailure>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.decoded.len() + self.failures.len()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Decodes batches of sentences and applies registered enrichers.
pub struct BatchDecoder {
    geocoders: Vec<Box<dyn ReverseGeocoder>>,
}

impl BatchDecoder {
    pub fn new() -> Self {
        Self {
            geocoders: Vec::new(),
        }
    }

    /// Register an enricher applied to every coordinate-bearing record.
    pub fn add_geocoder(&mut self, geocoder: Box<dyn ReverseGeocoder>) {
        self.geocoders.push(geocoder);
    }

    /// Decode an in-memory batch.
    ///
    /// Each sentence is parsed independently; a failure never aborts the
    /// rest of the batch.
    pub fn decode_batch<I, S>(&self, sentences: I) -> BatchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut decoded = Vec::new();
        let mut failures = Vec::new();

        for sentence in sentences {
            let sentence = sentence.as_ref();
            match parse(sentence) {
                Ok(record) => decoded.push(self.enrich(record)),
                Err(e) => failures.push(DecodeFailure {
                    sentence: sentence.to_string(),
                    error: e.to_string(),
                }),
            }
        }

        BatchReport {
            generated_at: Utc::now(),
            decoded,
            failures,
        }
    }

    /// Read newline-separated sentences from an async reader and decode
    /// them as one batch. Blank lines are skipped.
    pub async fn decode_lines<R>(&self, reader: R) -> Result<BatchReport>
    where
        R: AsyncBufRead + Unpin,
    {
        let sentences = read_sentences(reader).await?;
        Ok(self.decode_batch(&sentences))
    }

    fn enrich(&self, record: SentenceRecord) -> DecodedSentence {
        let mut enrichments = BTreeMap::new();

        if let Some((latitude, longitude)) = record.coordinates() {
            for geocoder in &self.geocoders {
                match geocoder.locate(latitude, longitude) {
                    Ok(value) => {
                        enrichments.insert(geocoder.name().to_string(), value);
                    }
                    Err(e) => {
                        eprintln!("{} lookup failed: {}", geocoder.name(), e);
                    }
                }
            }
        }

        DecodedSentence {
            record,
            enrichments,
        }
    }
}

impl Default for BatchDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect non-blank lines from an async reader.
pub async fn read_sentences<R>(reader: R) -> Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut sentences = Vec::new();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if !line.is_empty() {
            sentences.push(line.to_string());
        }
    }

    Ok(sentences)
}

/// Write the report as pretty JSON to the given path.
pub fn save_report(report: &BatchReport, path: &Path) -> Result<()> {
    let json = report.to_json()?;
    std::fs::write(path, json + "\n")?;
    Ok(())
}
