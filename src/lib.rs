// src/lib.rs
//! NMEA Decoder Library
//!
//! Decodes isolated NMEA-0183 GPS sentences (GGA, GLL, GSA, GSV, VTG, RMC)
//! into typed records, with a batch driver and optional reverse-geocoding
//! enrichment around the pure parsing core.

pub mod batch;
pub mod config;
pub mod display;
pub mod error;
pub mod geocode;
pub mod nmea;

// Re-export main types for convenience
pub use batch::{BatchDecoder, BatchReport, DecodedSentence};
pub use error::{AppError, DecodeError, Result};
pub use nmea::{parse, SentenceRecord};
