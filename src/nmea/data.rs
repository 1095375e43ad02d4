// src/nmea/data.rs
//! Decoded sentence records

use serde::Serialize;

/// One satellite entry from a GSV sentence.
///
/// All four fields are carried as the raw sentence text; receivers leave
/// any of them blank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SatelliteInfo {
    pub satellite_id: String,
    pub elevation: String,
    pub azimuth: String,
    pub snr: String,
}

/// GGA - Global Positioning System Fix Data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GgaData {
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub fix_quality: String,
    pub num_satellites: String,
    pub horizontal_dilution: String,
    pub altitude: String,
    pub geoid_height: String,
}

/// GLL - Geographic Position, Latitude/Longitude
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GllData {
    pub latitude: f64,
    pub longitude: f64,
    pub time: String,
    pub status: String,
}

/// GSA - GPS DOP and Active Satellites
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GsaData {
    pub mode: String,
    pub fix_type: String,
    /// Twelve PRN slots as sent by the receiver; unused slots stay empty.
    pub satellites: Vec<String>,
    pub pdop: String,
    pub hdop: String,
    pub vdop: String,
}

/// GSV - Satellites in View
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GsvData {
    pub num_sentences: String,
    pub sentence_num: String,
    pub num_satellites: String,
    pub satellite_info: Vec<SatelliteInfo>,
}

/// VTG - Track Made Good and Ground Speed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VtgData {
    pub true_track: String,
    pub magnetic_track: String,
    pub ground_speed_knots: String,
    pub ground_speed_kmph: String,
}

/// RMC - Recommended Minimum Navigation Information
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RmcData {
    pub time: String,
    pub status: String,
    pub latitude: f64,
    pub longitude: f64,
    pub speed: String,
    pub track_angle: String,
    pub date: String,
    pub magnetic_variation: String,
}

/// A fully decoded NMEA sentence.
///
/// One record is produced per successful parse; a sentence either decodes
/// completely into its variant or yields no record at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum SentenceRecord {
    #[serde(rename = "GPGGA")]
    Gga(GgaData),
    #[serde(rename = "GPGLL")]
    Gll(GllData),
    #[serde(rename = "GPGSA")]
    Gsa(GsaData),
    #[serde(rename = "GPGSV")]
    Gsv(GsvData),
    #[serde(rename = "GPVTG")]
    Vtg(VtgData),
    #[serde(rename = "GPRMC")]
    Rmc(RmcData),
}

impl SentenceRecord {
    /// Sentence tag without the talker prefix ("GGA", "RMC", ...).
    pub fn sentence_type(&self) -> &'static str {
        match self {
            SentenceRecord::Gga(_) => "GGA",
            SentenceRecord::Gll(_) => "GLL",
            SentenceRecord::Gsa(_) => "GSA",
            SentenceRecord::Gsv(_) => "GSV",
            SentenceRecord::Vtg(_) => "VTG",
            SentenceRecord::Rmc(_) => "RMC",
        }
    }

    /// Decimal-degree position for the record types that carry one.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match self {
            SentenceRecord::Gga(data) => Some((data.latitude, data.longitude)),
            SentenceRecord::Gll(data) => Some((data.latitude, data.longitude)),
            SentenceRecord::Rmc(data) => Some((data.latitude, data.longitude)),
            _ => None,
        }
    }
}
