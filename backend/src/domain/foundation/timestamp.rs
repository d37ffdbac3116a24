//! Timestamp value object for immutable points in time.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Wall-clock layouts accepted for a concatenated `date` + `T` + `time` input.
const LOCAL_LAYOUTS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Immutable point in time, always UTC.
///
/// Serializes as RFC 3339 text, which sorts lexically in time order and
/// carries an explicit offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Parses an RFC 3339 string such as `2024-05-15T00:00:00Z`.
    pub fn parse_rfc3339(value: &str) -> Result<Self, ValidationError> {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| ValidationError::invalid_format("timestamp", e.to_string()))
    }

    /// Combines a separately supplied date (`YYYY-MM-DD`) and time (`HH:MM`)
    /// into one instant.
    ///
    /// Inputs without an offset are read as UTC. A time that already carries
    /// an offset (`14:30:00+02:00`) is honoured.
    pub fn from_date_and_time(date: &str, time: &str) -> Result<Self, ValidationError> {
        let combined = format!("{}T{}", date.trim(), time.trim());

        if let Ok(dt) = DateTime::parse_from_rfc3339(&combined) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }

        LOCAL_LAYOUTS
            .iter()
            .find_map(|layout| NaiveDateTime::parse_from_str(&combined, layout).ok())
            .map(|naive| Self(naive.and_utc()))
            .ok_or_else(|| ValidationError::invalid_format("start_time", "invalid date/time"))
    }

    /// Returns the RFC 3339 form used in persisted documents.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn combines_date_and_minute_time() {
        let ts = Timestamp::from_date_and_time("2024-07-01", "14:30").unwrap();
        let dt = ts.as_datetime();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 7, 1));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (14, 30, 0));
    }

    #[test]
    fn accepts_seconds_in_time() {
        let ts = Timestamp::from_date_and_time("2024-07-01", "14:30:15").unwrap();
        assert_eq!(ts.as_datetime().second(), 15);
    }

    #[test]
    fn honours_explicit_offset() {
        let ts = Timestamp::from_date_and_time("2024-07-01", "14:30:00+02:00").unwrap();
        assert_eq!(ts.as_datetime().hour(), 12);
    }

    #[test]
    fn rejects_impossible_calendar_date() {
        let err = Timestamp::from_date_and_time("2024-02-30", "10:00").unwrap_err();
        assert!(err.to_string().contains("invalid date/time"));
    }

    #[test]
    fn rejects_garbage_time() {
        assert!(Timestamp::from_date_and_time("2024-07-01", "half past two").is_err());
        assert!(Timestamp::from_date_and_time("2024-07-01", "25:00").is_err());
    }

    #[test]
    fn parse_rfc3339_normalizes_to_utc() {
        let ts = Timestamp::parse_rfc3339("2024-05-15T02:00:00+02:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-05-15T00:00:00Z");
    }

    #[test]
    fn serializes_to_json() {
        let ts = Timestamp::from_date_and_time("2024-01-15", "10:30").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2024-01-15T10:30:00Z\"");
    }

    #[test]
    fn deserializes_javascript_iso_strings() {
        let ts: Timestamp = serde_json::from_str("\"2024-07-01T14:30:00.000Z\"").unwrap();
        assert_eq!(ts, Timestamp::from_date_and_time("2024-07-01", "14:30").unwrap());
    }

    #[test]
    fn ordering_follows_time() {
        let earlier = Timestamp::from_date_and_time("2024-05-01", "10:00").unwrap();
        let later = Timestamp::from_date_and_time("2024-06-01", "10:00").unwrap();
        assert!(earlier < later);
        assert_eq!(earlier.max(later), later);
    }
}
