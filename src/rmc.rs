//! Minimum navigation data decoder (`$GPRMC`).
//!
//! Field groups are independent: position (3..=6), UTC time of day (1),
//! speed over ground (7), bearing (8), fix status (2). An empty field
//! skips its group and nothing else. Groups are checked in wire processing
//! order; a sentence too short for the next group stops there, keeping
//! whatever already fired.
use chrono::{DateTime, Local, TimeZone, Utc};

use crate::{
    config::Config,
    event::{Event, Position},
    interpreter::DecodeError,
    sentence::{check_len, parse_field, SentenceKind},
};

/// Knots to miles-per-hour conversion, as used on the wire side.
pub const MPH_PER_KNOT: f64 = 1.150779;

const KIND: SentenceKind = SentenceKind::Rmc;

const TIME_FIELD: usize = 1;
const STATUS_FIELD: usize = 2;
const LAT_FIELD: usize = 3;
const LAT_HEMISPHERE_FIELD: usize = 4;
const LON_FIELD: usize = 5;
const LON_HEMISPHERE_FIELD: usize = 6;
const SPEED_FIELD: usize = 7;
const BEARING_FIELD: usize = 8;

pub(crate) fn decode(
    fields: &[&str],
    cfg: &Config,
    emit: &mut dyn FnMut(Event),
    errors: &mut Vec<DecodeError>,
) {
    if !check_len(
        fields,
        KIND,
        &[
            LAT_FIELD,
            LAT_HEMISPHERE_FIELD,
            LON_FIELD,
            LON_HEMISPHERE_FIELD,
        ],
        errors,
    ) {
        return;
    }
    let position_group = [
        fields[LAT_FIELD],
        fields[LAT_HEMISPHERE_FIELD],
        fields[LON_FIELD],
        fields[LON_HEMISPHERE_FIELD],
    ];
    if position_group.iter().all(|field| !field.is_empty()) {
        if let Some(position) = position(&position_group, errors) {
            emit(Event::Position(position));
        }
    }

    if !fields[TIME_FIELD].is_empty() {
        match fix_time(fields[TIME_FIELD]) {
            Some(time) => emit(Event::TimeChanged(time.with_timezone(&Local))),
            None => errors.push(DecodeError::FieldParse {
                kind: KIND,
                index: TIME_FIELD,
                value: fields[TIME_FIELD].to_string(),
            }),
        }
    }

    if !check_len(fields, KIND, &[SPEED_FIELD], errors) {
        return;
    }
    if !fields[SPEED_FIELD].is_empty() {
        if let Some(knots) = parse_field::<f64>(KIND, SPEED_FIELD, fields[SPEED_FIELD], errors) {
            let mph = knots * MPH_PER_KNOT;
            emit(Event::Speed(mph));
            if let Some(limit) = cfg.speed_limit_mph {
                if mph > limit {
                    emit(Event::SpeedLimitReached(mph));
                }
            }
        }
    }

    if !check_len(fields, KIND, &[BEARING_FIELD], errors) {
        return;
    }
    if !fields[BEARING_FIELD].is_empty() {
        if let Some(degrees) =
            parse_field::<f64>(KIND, BEARING_FIELD, fields[BEARING_FIELD], errors)
        {
            emit(Event::Bearing(degrees));
        }
    }

    match fields[STATUS_FIELD] {
        "A" => emit(Event::FixObtained),
        "V" => emit(Event::FixLost),
        // empty or anything else: no transition to report
        _ => {},
    }
}

/// Splits a `ddmm.mmm` angle token into whole degrees and decimal minutes.
/// Returns None when the token cannot carry the fixed-width degrees prefix
/// or the minutes do not parse below 60.
fn angle(token: &str, degree_digits: usize) -> Option<(u32, f64)> {
    let degrees = token.get(..degree_digits)?.parse::<u32>().ok()?;
    let minutes = token.get(degree_digits..)?.parse::<f64>().ok()?;
    if !(0.0..60.0).contains(&minutes) {
        return None;
    }
    Some((degrees, minutes))
}

/// Decodes the four position fields into formatted strings plus signed
/// decimal degrees. Hemisphere letters are appended to the formatted text
/// as-is; south and west drive the decimal sign negative.
fn position(group: &[&str; 4], errors: &mut Vec<DecodeError>) -> Option<Position> {
    let [lat, lat_hemisphere, lon, lon_hemisphere] = *group;

    let field_error = |index: usize, value: &str| DecodeError::FieldParse {
        kind: KIND,
        index,
        value: value.to_string(),
    };

    let (lat_degrees, lat_minutes) = match angle(lat, 2) {
        Some(split) => split,
        None => {
            errors.push(field_error(LAT_FIELD, lat));
            return None;
        },
    };
    let (lon_degrees, lon_minutes) = match angle(lon, 3) {
        Some(split) => split,
        None => {
            errors.push(field_error(LON_FIELD, lon));
            return None;
        },
    };

    let mut latitude_ddeg = lat_degrees as f64 + lat_minutes / 60.0;
    if lat_hemisphere == "S" {
        latitude_ddeg = -latitude_ddeg;
    }
    if latitude_ddeg.abs() > 90.0 {
        errors.push(field_error(LAT_FIELD, lat));
        return None;
    }

    let mut longitude_ddeg = lon_degrees as f64 + lon_minutes / 60.0;
    if lon_hemisphere == "W" {
        longitude_ddeg = -longitude_ddeg;
    }
    if longitude_ddeg.abs() > 180.0 {
        errors.push(field_error(LON_FIELD, lon));
        return None;
    }

    Some(Position {
        latitude: format!("{}°{}\"{}", &lat[..2], &lat[2..], lat_hemisphere),
        longitude: format!("{}°{}\"{}", &lon[..3], &lon[3..], lon_hemisphere),
        latitude_ddeg,
        longitude_ddeg,
    })
}

/// Decodes a `hhmmss(.sss)` time of day token and merges it with today's
/// UTC calendar date, read from this machine's clock. The sentence carries
/// no date: around local midnight the merged date can be off by one day.
fn fix_time(token: &str) -> Option<DateTime<Utc>> {
    let hours = token.get(0..2)?.parse::<u32>().ok()?;
    let minutes = token.get(2..4)?.parse::<u32>().ok()?;
    let seconds = token.get(4..6)?.parse::<u32>().ok()?;
    let milliseconds = if token.len() > 7 {
        let fraction = token.get(6..)?.parse::<f64>().ok()?;
        if !(0.0..1.0).contains(&fraction) {
            return None;
        }
        (fraction * 1000.0).round() as u32
    } else {
        0
    };
    let today = Utc::now().date_naive();
    let merged = today.and_hms_milli_opt(hours, minutes, seconds, milliseconds)?;
    Some(Utc.from_utc_datetime(&merged))
}

#[cfg(test)]
mod tests {
    use super::{angle, fix_time};
    use chrono::Timelike;

    #[test]
    fn angle_splitting() {
        assert_eq!(angle("4807.038", 2), Some((48, 7.038)));
        assert_eq!(angle("01131.000", 3), Some((11, 31.0)));
        assert_eq!(angle("4", 2), None);
        assert_eq!(angle("48ab.0", 2), None);
        // minutes past the top of the scale
        assert_eq!(angle("4861.000", 2), None);
    }

    #[test]
    fn time_of_day() {
        let time = fix_time("123519").unwrap();
        assert_eq!(
            (time.hour(), time.minute(), time.second(), time.nanosecond()),
            (12, 35, 19, 0),
        );

        let time = fix_time("123519.75").unwrap();
        assert_eq!(time.nanosecond(), 750_000_000);

        assert!(fix_time("993519").is_none());
        assert!(fix_time("1235").is_none());
        assert!(fix_time("12a519").is_none());
    }
}
