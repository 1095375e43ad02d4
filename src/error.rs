// src/error.rs
//! Error types for the NMEA decoder

use std::fmt;

pub type Result<T> = std::result::Result<T, AppError>;

/// A single sentence failed to decode.
///
/// These are recoverable data-validation errors: the sentence is reported
/// and skipped, and a batch keeps going.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    UnsupportedType(String),
    TooFewFields {
        sentence: &'static str,
        expected: usize,
        actual: usize,
    },
    InvalidTime(String),
    InvalidLatitude(String),
    InvalidLongitude(String),
    InvalidDate(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnsupportedType(sentence) => {
                write!(f, "Unsupported sentence type: {}", sentence)
            }
            DecodeError::TooFewFields {
                sentence,
                expected,
                actual,
            } => write!(
                f,
                "Invalid {} sentence: expected at least {} fields, got {}",
                sentence, expected, actual
            ),
            DecodeError::InvalidTime(raw) => write!(f, "Invalid time field: {:?}", raw),
            DecodeError::InvalidLatitude(raw) => write!(f, "Invalid latitude field: {:?}", raw),
            DecodeError::InvalidLongitude(raw) => write!(f, "Invalid longitude field: {:?}", raw),
            DecodeError::InvalidDate(raw) => write!(f, "Invalid date field: {:?}", raw),
        }
    }
}

impl std::error::Error for DecodeError {}

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Http(reqwest::Error),
    Json(serde_json::Error),
    Decode(DecodeError),
    Geocode(String),
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "IO error: {}", e),
            AppError::Http(e) => write!(f, "HTTP error: {}", e),
            AppError::Json(e) => write!(f, "JSON error: {}", e),
            AppError::Decode(e) => write!(f, "Decode error: {}", e),
            AppError::Geocode(msg) => write!(f, "Geocoding error: {}", msg),
            AppError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(error)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Http(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<DecodeError> for AppError {
    fn from(error: DecodeError) -> Self {
        AppError::Decode(error)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Other(error.to_string())
    }
}
