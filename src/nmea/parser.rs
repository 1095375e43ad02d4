// src/nmea/parser.rs
//! NMEA sentence parsing

use super::convert::{decode_date, decode_latitude, decode_longitude, decode_time};
use super::data::{
    GgaData, GllData, GsaData, GsvData, RmcData, SatelliteInfo, SentenceRecord, VtgData,
};
use crate::error::DecodeError;

/// The six supported sentence types.
///
/// Each kind pairs its dispatch prefix with the minimum number of
/// comma-separated fields its layout requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceKind {
    Gga,
    Gll,
    Gsa,
    Gsv,
    Vtg,
    Rmc,
}

impl SentenceKind {
    pub const ALL: [SentenceKind; 6] = [
        SentenceKind::Gga,
        SentenceKind::Gll,
        SentenceKind::Gsa,
        SentenceKind::Gsv,
        SentenceKind::Vtg,
        SentenceKind::Rmc,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            SentenceKind::Gga => "$GPGGA",
            SentenceKind::Gll => "$GPGLL",
            SentenceKind::Gsa => "$GPGSA",
            SentenceKind::Gsv => "$GPGSV",
            SentenceKind::Vtg => "$GPVTG",
            SentenceKind::Rmc => "$GPRMC",
        }
    }

    /// Tag without the talker prefix, used in error reports.
    pub fn tag(self) -> &'static str {
        match self {
            SentenceKind::Gga => "GGA",
            SentenceKind::Gll => "GLL",
            SentenceKind::Gsa => "GSA",
            SentenceKind::Gsv => "GSV",
            SentenceKind::Vtg => "VTG",
            SentenceKind::Rmc => "RMC",
        }
    }

    pub fn min_fields(self) -> usize {
        match self {
            SentenceKind::Gga => 15,
            SentenceKind::Gll => 7,
            SentenceKind::Gsa => 18,
            SentenceKind::Gsv => 8,
            SentenceKind::Vtg => 9,
            SentenceKind::Rmc => 12,
        }
    }
}

/// Parse a single NMEA sentence into a typed record.
///
/// The input must be one complete, newline-stripped line. A trailing `*hh`
/// checksum is cut off before field splitting and never verified. Fields are
/// split on commas with no trimming; NMEA fields never contain embedded
/// commas.
pub fn parse(sentence: &str) -> Result<SentenceRecord, DecodeError> {
    let kind = SentenceKind::ALL
        .iter()
        .copied()
        .find(|kind| sentence.starts_with(kind.prefix()))
        .ok_or_else(|| DecodeError::UnsupportedType(sentence.to_string()))?;

    let body = match sentence.rfind('*') {
        Some(index) => &sentence[..index],
        None => sentence,
    };

    let fields: Vec<&str> = body.split(',').collect();
    if fields.len() < kind.min_fields() {
        return Err(DecodeError::TooFewFields {
            sentence: kind.tag(),
            expected: kind.min_fields(),
            actual: fields.len(),
        });
    }

    match kind {
        SentenceKind::Gga => parse_gga(&fields),
        SentenceKind::Gll => parse_gll(&fields),
        SentenceKind::Gsa => parse_gsa(&fields),
        SentenceKind::Gsv => parse_gsv(&fields),
        SentenceKind::Vtg => parse_vtg(&fields),
        SentenceKind::Rmc => parse_rmc(&fields),
    }
}

/// Decode a GGA (fix data) sentence.
fn parse_gga(fields: &[&str]) -> Result<SentenceRecord, DecodeError> {
    Ok(SentenceRecord::Gga(GgaData {
        time: decode_time(fields[1])?,
        latitude: decode_latitude(fields[2], fields[3])?,
        longitude: decode_longitude(fields[4], fields[5])?,
        fix_quality: fields[6].to_string(),
        num_satellites: fields[7].to_string(),
        horizontal_dilution: fields[8].to_string(),
        altitude: format!("{} {}", fields[9], fields[10]),
        geoid_height: format!("{} {}", fields[11], fields[12]),
    }))
}

/// Decode a GLL (position) sentence.
fn parse_gll(fields: &[&str]) -> Result<SentenceRecord, DecodeError> {
    Ok(SentenceRecord::Gll(GllData {
        latitude: decode_latitude(fields[1], fields[2])?,
        longitude: decode_longitude(fields[3], fields[4])?,
        time: decode_time(fields[5])?,
        status: fields[6].to_string(),
    }))
}

/// Decode a GSA (DOP and active satellites) sentence.
fn parse_gsa(fields: &[&str]) -> Result<SentenceRecord, DecodeError> {
    Ok(SentenceRecord::Gsa(GsaData {
        mode: fields[1].to_string(),
        fix_type: fields[2].to_string(),
        // Twelve blank-padded PRN slots; blanks are kept verbatim
        satellites: fields[3..15].iter().map(|s| s.to_string()).collect(),
        pdop: fields[15].to_string(),
        hdop: fields[16].to_string(),
        vdop: fields[17].to_string(),
    }))
}

/// Decode a GSV (satellites in view) sentence.
fn parse_gsv(fields: &[&str]) -> Result<SentenceRecord, DecodeError> {
    // Satellites arrive in groups of four starting at field 4; a dangling
    // partial group at the end of the sentence is ignored
    let satellite_info = fields[4..]
        .chunks_exact(4)
        .map(|group| SatelliteInfo {
            satellite_id: group[0].to_string(),
            elevation: group[1].to_string(),
            azimuth: group[2].to_string(),
            snr: group[3].to_string(),
        })
        .collect();

    Ok(SentenceRecord::Gsv(GsvData {
        num_sentences: fields[1].to_string(),
        sentence_num: fields[2].to_string(),
        num_satellites: fields[3].to_string(),
        satellite_info,
    }))
}

/// Decode a VTG (track and ground speed) sentence.
fn parse_vtg(fields: &[&str]) -> Result<SentenceRecord, DecodeError> {
    // Unit letters are fixed by the layout, not re-read from the sentence
    Ok(SentenceRecord::Vtg(VtgData {
        true_track: format!("{} T", fields[1]),
        magnetic_track: format!("{} M", fields[3]),
        ground_speed_knots: format!("{} N", fields[5]),
        ground_speed_kmph: format!("{} K", fields[7]),
    }))
}

/// Decode an RMC (recommended minimum) sentence.
fn parse_rmc(fields: &[&str]) -> Result<SentenceRecord, DecodeError> {
    let magnetic_variation = if !fields[10].is_empty() && !fields[11].is_empty() {
        format!("{} {}", fields[10], fields[11])
    } else {
        "N/A".to_string()
    };

    Ok(SentenceRecord::Rmc(RmcData {
        time: decode_time(fields[1])?,
        status: fields[2].to_string(),
        latitude: decode_latitude(fields[3], fields[4])?,
        longitude: decode_longitude(fields[5], fields[6])?,
        speed: fields[7].to_string(),
        track_angle: fields[8].to_string(),
        date: decode_date(fields[9])?,
        magnetic_variation,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gga_parsing() {
        let record = parse("$GPGGA,123519,4807.038,N,01131.324,E,1,08,0.9,545.4,M,46.9,M,,*42")
            .unwrap();

        let data = match record {
            SentenceRecord::Gga(data) => data,
            other => panic!("expected GGA record, got {:?}", other),
        };
        assert_eq!(data.time, "12:35:19 UTC");
        assert!((data.latitude - 48.1173).abs() < 1e-4);
        assert!((data.longitude - 11.5221).abs() < 1e-3);
        assert_eq!(data.fix_quality, "1");
        assert_eq!(data.num_satellites, "08");
        assert_eq!(data.horizontal_dilution, "0.9");
        assert_eq!(data.altitude, "545.4 M");
        assert_eq!(data.geoid_height, "46.9 M");
    }

    #[test]
    fn test_gll_parsing() {
        let record = parse("$GPGLL,4916.45,N,12311.12,W,225444,A").unwrap();

        let data = match record {
            SentenceRecord::Gll(data) => data,
            other => panic!("expected GLL record, got {:?}", other),
        };
        assert!((data.latitude - 49.274166).abs() < 1e-4);
        assert!((data.longitude + 123.185333).abs() < 1e-4);
        assert_eq!(data.time, "22:54:44 UTC");
        assert_eq!(data.status, "A");
    }

    #[test]
    fn test_gsa_parsing() {
        let record = parse("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39").unwrap();

        let data = match record {
            SentenceRecord::Gsa(data) => data,
            other => panic!("expected GSA record, got {:?}", other),
        };
        assert_eq!(data.mode, "A");
        assert_eq!(data.fix_type, "3");
        assert_eq!(data.satellites.len(), 12);
        assert_eq!(data.satellites[0], "04");
        assert_eq!(data.satellites[2], "");
        assert_eq!(data.satellites[7], "24");
        assert_eq!(data.satellites[11], "");
        assert_eq!(data.pdop, "2.5");
        assert_eq!(data.hdop, "1.3");
        assert_eq!(data.vdop, "2.1");
    }

    #[test]
    fn test_gsv_parsing() {
        let record =
            parse("$GPGSV,2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45*75")
                .unwrap();

        let data = match record {
            SentenceRecord::Gsv(data) => data,
            other => panic!("expected GSV record, got {:?}", other),
        };
        assert_eq!(data.num_sentences, "2");
        assert_eq!(data.sentence_num, "1");
        assert_eq!(data.num_satellites, "08");
        assert_eq!(data.satellite_info.len(), 4);

        let first = &data.satellite_info[0];
        assert_eq!(first.satellite_id, "01");
        assert_eq!(first.elevation, "40");
        assert_eq!(first.azimuth, "083");
        assert_eq!(first.snr, "46");

        assert_eq!(data.satellite_info[3].snr, "45");
    }

    #[test]
    fn test_gsv_partial_group_ignored() {
        let record = parse("$GPGSV,2,2,06,25,12,093,32,29,65,310,*60").unwrap();

        let data = match record {
            SentenceRecord::Gsv(data) => data,
            other => panic!("expected GSV record, got {:?}", other),
        };
        assert_eq!(data.satellite_info.len(), 2);
        assert_eq!(data.satellite_info[1].snr, "");
    }

    #[test]
    fn test_vtg_parsing() {
        let record = parse("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K").unwrap();

        let data = match record {
            SentenceRecord::Vtg(data) => data,
            other => panic!("expected VTG record, got {:?}", other),
        };
        assert_eq!(data.true_track, "054.7 T");
        assert_eq!(data.magnetic_track, "034.4 M");
        assert_eq!(data.ground_speed_knots, "005.5 N");
        assert_eq!(data.ground_speed_kmph, "010.2 K");
    }

    #[test]
    fn test_rmc_parsing() {
        let record =
            parse("$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68").unwrap();

        let data = match record {
            SentenceRecord::Rmc(data) => data,
            other => panic!("expected RMC record, got {:?}", other),
        };
        assert_eq!(data.time, "22:54:46 UTC");
        assert_eq!(data.status, "A");
        assert!((data.latitude - 49.274166).abs() < 1e-4);
        assert!((data.longitude + 123.185333).abs() < 1e-4);
        assert_eq!(data.speed, "000.5");
        assert_eq!(data.track_angle, "054.7");
        // Unconditional "20" century expansion
        assert_eq!(data.date, "19/11/2094");
        assert_eq!(data.magnetic_variation, "020.3 E");
    }

    #[test]
    fn test_rmc_missing_variation() {
        let record = parse("$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,,*68").unwrap();

        let data = match record {
            SentenceRecord::Rmc(data) => data,
            other => panic!("expected RMC record, got {:?}", other),
        };
        assert_eq!(data.magnetic_variation, "N/A");
    }

    #[test]
    fn test_all_supported_prefixes() {
        let sentences = [
            (
                "$GPGGA,123519,4807.038,N,01131.324,E,1,08,0.9,545.4,M,46.9,M,,",
                "GGA",
            ),
            ("$GPGLL,4916.45,N,12311.12,W,225444,A", "GLL"),
            ("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1", "GSA"),
            ("$GPGSV,2,1,08,01,40,083,46", "GSV"),
            ("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K", "VTG"),
            (
                "$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E",
                "RMC",
            ),
        ];

        for (sentence, expected) in sentences {
            let record = parse(sentence).unwrap();
            assert_eq!(record.sentence_type(), expected, "sentence: {}", sentence);
        }
    }

    #[test]
    fn test_unsupported_sentence() {
        let sentence = "$GPZDA,201530.00,04,07,2002,00,00*60";
        match parse(sentence) {
            Err(DecodeError::UnsupportedType(text)) => assert_eq!(text, sentence),
            other => panic!("expected UnsupportedType, got {:?}", other),
        }
    }

    #[test]
    fn test_too_few_fields() {
        match parse("$GPGLL,4916.45,N") {
            Err(DecodeError::TooFewFields {
                sentence,
                expected,
                actual,
            }) => {
                assert_eq!(sentence, "GLL");
                assert_eq!(expected, 7);
                assert_eq!(actual, 3);
            }
            other => panic!("expected TooFewFields, got {:?}", other),
        }
    }

    #[test]
    fn test_too_few_fields_per_kind() {
        let truncated = [
            ("$GPGGA,123519,4807.038,N", "GGA", 15, 4),
            ("$GPGSA,A,3", "GSA", 18, 3),
            ("$GPGSV,2,1", "GSV", 8, 3),
            ("$GPVTG,054.7,T", "VTG", 9, 3),
            ("$GPRMC,225446,A", "RMC", 12, 3),
        ];

        for (sentence, tag, expected_min, actual_count) in truncated {
            match parse(sentence) {
                Err(DecodeError::TooFewFields {
                    sentence: got_tag,
                    expected,
                    actual,
                }) => {
                    assert_eq!(got_tag, tag);
                    assert_eq!(expected, expected_min);
                    assert_eq!(actual, actual_count);
                }
                other => panic!("expected TooFewFields for {}, got {:?}", sentence, other),
            }
        }
    }

    #[test]
    fn test_empty_coordinate_rejected() {
        // GGA with blank position fields produces no partial record
        assert!(matches!(
            parse("$GPGGA,123519,,,,,1,08,0.9,545.4,M,46.9,M,,"),
            Err(DecodeError::InvalidLatitude(_))
        ));
    }
}
