//! date.rs
//!
//! PDF date strings, `D:YYYYMMDDHHmmSSOHH'mm'` (Info dictionary
//! CreationDate / ModDate).

use time::{Date, Month, OffsetDateTime, Time, UtcOffset};

/// Parses a PDF date string. The `D:` prefix, seconds and the timezone
/// part are each optional in the wild; everything through the day is
/// required.
pub fn parse_pdf_date(s: &str) -> Result<OffsetDateTime, String> {
    let s = s.strip_prefix("D:").unwrap_or(s);
    if s.len() < 8 {
        return Err("date string too short".to_string());
    }

    let digits = |range: std::ops::Range<usize>| -> Result<i32, String> {
        s.get(range.clone())
            .and_then(|part| part.parse::<i32>().ok())
            .ok_or_else(|| format!("bad date field at {}..{}", range.start, range.end))
    };

    let year = digits(0..4)?;
    let month = digits(4..6)?;
    let day = digits(6..8)?;
    let hour = if s.len() >= 10 { digits(8..10)? } else { 0 };
    let minute = if s.len() >= 12 { digits(10..12)? } else { 0 };
    let second = if s.len() >= 14 { digits(12..14)? } else { 0 };

    let month = Month::try_from(month as u8).map_err(|e| e.to_string())?;
    let date = Date::from_calendar_date(year, month, day as u8).map_err(|e| e.to_string())?;
    let time = Time::from_hms(hour as u8, minute as u8, second as u8).map_err(|e| e.to_string())?;

    // OHH'mm' — O is +, - or Z
    let offset = match s.as_bytes().get(14).copied() {
        Some(b'Z') | Some(b'z') | None => UtcOffset::UTC,
        Some(sign @ (b'+' | b'-')) => {
            let hours = if s.len() >= 17 { digits(15..17)? } else { 0 };
            // minutes come wrapped in apostrophes: +02'30'
            let minutes = if s.len() >= 20 { digits(18..20)? } else { 0 };
            let factor = if sign == b'-' { -1 } else { 1 };
            UtcOffset::from_hms((factor * hours) as i8, (factor * minutes) as i8, 0)
                .map_err(|e| e.to_string())?
        }
        Some(other) => return Err(format!("bad timezone marker {}", other as char)),
    };

    Ok(OffsetDateTime::new_in_offset(date, time, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_utc_date() {
        let dt = parse_pdf_date("D:20210212014204Z00'00'").unwrap();
        assert_eq!((dt.year(), dt.month() as u8, dt.day()), (2021, 2, 12));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (1, 42, 4));
        assert_eq!(dt.offset(), UtcOffset::UTC);
    }

    #[test]
    fn parses_positive_and_negative_offsets() {
        let dt = parse_pdf_date("D:20170505150224+02'00'").unwrap();
        assert_eq!(dt.offset().whole_seconds(), 2 * 3600);
        let dt = parse_pdf_date("D:20170505150224-01'30'").unwrap();
        assert_eq!(dt.offset().whole_seconds(), -(3600 + 1800));
    }

    #[test]
    fn tolerates_short_forms() {
        let dt = parse_pdf_date("D:20210212").unwrap();
        assert_eq!((dt.year(), dt.hour()), (2021, 0));
        let dt = parse_pdf_date("202102120142").unwrap();
        assert_eq!(dt.minute(), 42);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_pdf_date("blablabla").is_err());
        assert!(parse_pdf_date("D:2021").is_err());
        assert!(parse_pdf_date("D:20210212014204?01'00'").is_err());
    }
}
