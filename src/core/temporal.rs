//! HL7 date-time grammar
//!
//! Wire timestamps are digit strings of graded precision
//! (`YYYY[MM[DD[HH[MM[SS]]]]]`) with an optional `+HHMM`/`-HHMM` zone suffix
//! and an optional `^` precision marker that truncates the value. The parser
//! is lenient about ISO-style punctuation: spaces and `:` are stripped, and
//! `-` is stripped within the first eight characters so `2019-07-02` reads
//! as `20190702`.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeZone, Utc};

use super::error::TimeError;

/// Output precision applied when a timestamp is written back to the wire.
///
/// The precision comes from the field schema, not from the parsed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// `YYYYMMDDHHMMSS`
    #[default]
    YmdHms,
    /// `YYYYMMDDHHMM`
    YmdHm,
    /// `YYYYMMDD`
    Ymd,
    /// `HHMM`
    Hm,
}

/// Format a timestamp for the wire at the schema's precision.
pub fn format_timestamp(ts: &DateTime<FixedOffset>, format: TimeFormat) -> String {
    let pattern = match format {
        TimeFormat::YmdHms => "%Y%m%d%H%M%S",
        TimeFormat::YmdHm => "%Y%m%d%H%M",
        TimeFormat::Ymd => "%Y%m%d",
        TimeFormat::Hm => "%H%M",
    };
    ts.format(pattern).to_string()
}

/// Strip lenient punctuation: spaces and `:` anywhere, `-` within the first
/// eight characters. A `-` past that point is a timezone marker.
fn clean(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, ch) in input.chars().enumerate() {
        match ch {
            ' ' | ':' => {}
            '-' if i < 8 => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Parse an HL7 timestamp.
///
/// Returns `Ok(None)` when the value is empty after cleaning. Values without
/// a zone suffix are interpreted at UTC offset zero, matching the encoder
/// which never writes a zone.
pub fn parse_timestamp(input: &str) -> Result<Option<DateTime<FixedOffset>>, TimeError> {
    let cleaned = clean(input);

    // Scan for the zone marker and the precision truncation point.
    let mut zone_index = 0usize;
    let mut end = cleaned.len();
    for (i, ch) in cleaned.char_indices() {
        match ch {
            '0'..='9' | '.' => {}
            '-' | '+' => zone_index = i,
            '^' => {
                end = i;
                break;
            }
            _ => {
                return Err(TimeError::InvalidCharacters { value: cleaned });
            }
        }
    }
    let dt = &cleaned[..end];
    if dt.is_empty() {
        return Ok(None);
    }

    let (digits, zone) = if zone_index > 0 && zone_index < dt.len() {
        (&dt[..zone_index], Some(&dt[zone_index..]))
    } else {
        (dt, None)
    };

    // Fractional seconds are accepted and discarded.
    let digits = match digits.find('.') {
        Some(dot) => &digits[..dot],
        None => digits,
    };

    // Precision buckets: year, month, day, minute, second. Sixteen-digit
    // values carry hundredths of a second and are truncated to seconds;
    // other over-long values are truncated to minute precision.
    let digits = match digits.len() {
        0 => return Ok(None),
        4 | 6 | 8 | 12 => digits,
        14 | 16 => &digits[..14],
        n if n >= 12 => &digits[..12],
        _ => {
            return Err(TimeError::UnknownSize {
                value: digits.to_string(),
            });
        }
    };

    let shown = match zone {
        Some(z) => format!("{digits}{z}"),
        None => digits.to_string(),
    };

    let offset = match zone {
        Some(z) => parse_zone(z).ok_or_else(|| TimeError::InvalidZone {
            value: shown.clone(),
        })?,
        None => Utc.fix(),
    };

    let number = |range: std::ops::Range<usize>, default: u32| -> u32 {
        digits
            .get(range)
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(default)
    };

    let year = digits
        .get(0..4)
        .and_then(|s| s.parse::<i32>().ok())
        .ok_or_else(|| TimeError::UnknownSize {
            value: digits.to_string(),
        })?;
    let month = number(4..6, 1);
    let day = number(6..8, 1);
    let hour = number(8..10, 0);
    let minute = number(10..12, 0);
    let second = number(12..14, 0);

    let out_of_range = |unit: &'static str| TimeError::OutOfRange {
        value: shown.clone(),
        unit,
    };

    if !(1..=12).contains(&month) {
        return Err(out_of_range("month"));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(out_of_range("day"));
    }
    if hour > 23 {
        return Err(out_of_range("hour"));
    }
    if minute > 59 {
        return Err(out_of_range("minute"));
    }
    if second > 59 {
        return Err(out_of_range("second"));
    }

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| out_of_range("day"))?;
    let naive = date
        .and_hms_opt(hour, minute, second)
        .ok_or_else(|| out_of_range("hour"))?;
    offset
        .from_local_datetime(&naive)
        .single()
        .map(Some)
        .ok_or_else(|| out_of_range("hour"))
}

/// Parse a `+HHMM`/`-HHMM` zone suffix into a fixed offset.
fn parse_zone(zone: &str) -> Option<FixedOffset> {
    let bytes = zone.as_bytes();
    if bytes.len() != 5 {
        return None;
    }
    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let hours: i32 = zone.get(1..3)?.parse().ok()?;
    let minutes: i32 = zone.get(3..5)?.parse().ok()?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(input: &str) -> DateTime<FixedOffset> {
        parse_timestamp(input)
            .expect("parse should succeed")
            .expect("value should be non-empty")
    }

    #[test]
    fn canonical_sizes() {
        assert_eq!(parse_ok("2001").to_rfc3339(), "2001-01-01T00:00:00+00:00");
        assert_eq!(parse_ok("200110").to_rfc3339(), "2001-10-01T00:00:00+00:00");
        assert_eq!(
            parse_ok("20011003").to_rfc3339(),
            "2001-10-03T00:00:00+00:00"
        );
        assert_eq!(
            parse_ok("199912271408").to_rfc3339(),
            "1999-12-27T14:08:00+00:00"
        );
        assert_eq!(
            parse_ok("20010330060500").to_rfc3339(),
            "2001-03-30T06:05:00+00:00"
        );
    }

    #[test]
    fn hundredths_truncate_to_seconds() {
        assert_eq!(
            parse_ok("2001033006050012").to_rfc3339(),
            "2001-03-30T06:05:00+00:00"
        );
    }

    #[test]
    fn lenient_iso_punctuation() {
        assert_eq!(
            parse_ok("2019-07-02 12:23:24+0300").to_rfc3339(),
            "2019-07-02T12:23:24+03:00"
        );
        assert_eq!(
            parse_ok("2019-07-02 12:23:24-0300").to_rfc3339(),
            "2019-07-02T12:23:24-03:00"
        );
    }

    #[test]
    fn precision_marker_truncates() {
        assert_eq!(
            parse_ok("20190306^^^default^default").to_rfc3339(),
            "2019-03-06T00:00:00+00:00"
        );
    }

    #[test]
    fn ambiguous_size_rejected() {
        let err = parse_timestamp("2019-1").expect_err("five digits are ambiguous");
        assert_eq!(err.to_string(), "unknown date time string size \"20191\"");
    }

    #[test]
    fn day_out_of_range() {
        let err = parse_timestamp("19561192000000").expect_err("day 92 is invalid");
        assert_eq!(
            err.to_string(),
            "parsing time \"19561192000000\": day out of range"
        );
    }

    #[test]
    fn month_out_of_range() {
        let err = parse_timestamp("20191392").expect_err("month 13 is invalid");
        assert_eq!(
            err.to_string(),
            "parsing time \"20191392\": month out of range"
        );
    }

    #[test]
    fn leap_day() {
        assert!(parse_timestamp("20200229").is_ok());
        assert!(parse_timestamp("21000229").is_err());
    }

    #[test]
    fn empty_after_cleaning() {
        assert!(matches!(parse_timestamp(""), Ok(None)));
        assert!(matches!(parse_timestamp(" :"), Ok(None)));
    }

    #[test]
    fn formatting_precision() {
        let ts = parse_ok("20010330060500");
        assert_eq!(format_timestamp(&ts, TimeFormat::YmdHms), "20010330060500");
        assert_eq!(format_timestamp(&ts, TimeFormat::YmdHm), "200103300605");
        assert_eq!(format_timestamp(&ts, TimeFormat::Ymd), "20010330");
        assert_eq!(format_timestamp(&ts, TimeFormat::Hm), "0605");
    }

    #[test]
    fn zone_survives_formatting() {
        let ts = parse_ok("20200522143859-0700");
        assert_eq!(format_timestamp(&ts, TimeFormat::YmdHms), "20200522143859");
    }
}
