// src/nmea/convert.rs
//! Scalar field converters shared by the sentence decoders

use crate::error::DecodeError;

/// Convert a raw HHMMSS[.sss] field into a "HH:MM:SS UTC" display string.
///
/// Fractional seconds are truncated, not rounded. Fields shorter than six
/// characters are invalid.
pub fn decode_time(raw: &str) -> Result<String, DecodeError> {
    match (raw.get(0..2), raw.get(2..4), raw.get(4..6)) {
        (Some(hours), Some(minutes), Some(seconds)) => {
            Ok(format!("{}:{}:{} UTC", hours, minutes, seconds))
        }
        _ => Err(DecodeError::InvalidTime(raw.to_string())),
    }
}

/// Convert a DDMM.MMMM latitude field plus hemisphere letter into signed
/// decimal degrees. 'S' negates; anything else leaves the value positive.
pub fn decode_latitude(raw: &str, hemisphere: &str) -> Result<f64, DecodeError> {
    if raw.is_empty() || hemisphere.is_empty() {
        return Err(DecodeError::InvalidLatitude(raw.to_string()));
    }

    let degrees: f64 = raw
        .get(0..2)
        .and_then(|d| d.parse().ok())
        .ok_or_else(|| DecodeError::InvalidLatitude(raw.to_string()))?;
    let minutes: f64 = raw
        .get(2..)
        .and_then(|m| m.parse().ok())
        .ok_or_else(|| DecodeError::InvalidLatitude(raw.to_string()))?;

    let mut latitude = degrees + minutes / 60.0;
    if hemisphere == "S" {
        latitude = -latitude;
    }
    Ok(latitude)
}

/// Convert a DDDMM.MMMM longitude field plus hemisphere letter into signed
/// decimal degrees. Longitude carries three degree digits where latitude
/// has two; 'W' negates.
pub fn decode_longitude(raw: &str, hemisphere: &str) -> Result<f64, DecodeError> {
    if raw.is_empty() || hemisphere.is_empty() {
        return Err(DecodeError::InvalidLongitude(raw.to_string()));
    }

    let degrees: f64 = raw
        .get(0..3)
        .and_then(|d| d.parse().ok())
        .ok_or_else(|| DecodeError::InvalidLongitude(raw.to_string()))?;
    let minutes: f64 = raw
        .get(3..)
        .and_then(|m| m.parse().ok())
        .ok_or_else(|| DecodeError::InvalidLongitude(raw.to_string()))?;

    let mut longitude = degrees + minutes / 60.0;
    if hemisphere == "W" {
        longitude = -longitude;
    }
    Ok(longitude)
}

/// Convert a DDMMYY field into a "DD/MM/20YY" display string.
///
/// The field must be exactly six characters. The two-digit year is expanded
/// by prefixing "20" unconditionally, so dates outside 2000-2099 come out in
/// the wrong century. Known limitation, kept for output compatibility.
pub fn decode_date(raw: &str) -> Result<String, DecodeError> {
    if raw.len() != 6 {
        return Err(DecodeError::InvalidDate(raw.to_string()));
    }
    match (raw.get(0..2), raw.get(2..4), raw.get(4..6)) {
        (Some(day), Some(month), Some(year)) => Ok(format!("{}/{}/20{}", day, month, year)),
        _ => Err(DecodeError::InvalidDate(raw.to_string())),
    }
}
