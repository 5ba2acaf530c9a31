//! Time and timestamp helpers.
//!
//! Reading timestamps are stored as text in the document model; these helpers
//! are only used where a real instant is needed (new readings, time-range
//! queries, document ids).

use chrono::{DateTime, SecondsFormat, Utc};

/// UTC timestamp used for query bounds and generated values.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse an RFC 3339 / ISO-8601 timestamp with an explicit offset,
/// normalising it to UTC. Returns `None` for anything unparseable.
#[must_use]
pub fn parse(text: &str) -> Option<Timestamp> {
    DateTime::parse_from_rfc3339(text.trim())
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Format a timestamp as `YYYY-MM-DDTHH:MM:SS.sssZ`.
#[must_use]
pub fn format(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_parse_zulu_timestamp() {
        let ts = parse("2024-01-01T00:00:00Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn should_normalise_offset_to_utc() {
        let ts = parse("2024-01-01T03:00:00+03:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn should_return_none_for_garbage() {
        assert!(parse("yesterday").is_none());
        assert!(parse("").is_none());
    }

    #[test]
    fn should_format_with_millis_and_z_suffix() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 17, 8, 30, 0).unwrap();
        assert_eq!(format(ts), "2024-05-17T08:30:00.000Z");
    }
}
