//! Attendance record models.
//!
//! This module defines the validated [`DayRecord`] consumed by the grid
//! calculator and the loose [`RawDayRecord`] shape the attendance source
//! actually returns.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The attendance status reported for a single day.
///
/// Only the exact strings `Present` and `P` count as present. Anything else
/// (`Late`, `HalfDay`, `Absent`, ...) is kept verbatim in [`AttendanceStatus::Other`].
///
/// # Example
///
/// ```
/// use attendance_grid_engine::models::AttendanceStatus;
///
/// assert_eq!(AttendanceStatus::from("P"), AttendanceStatus::Present);
/// assert_eq!(
///     AttendanceStatus::from("HalfDay"),
///     AttendanceStatus::Other("HalfDay".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttendanceStatus {
    /// The employee was marked present (`Present` or `P`).
    Present,
    /// Any other status string, kept as received.
    Other(String),
}

impl From<&str> for AttendanceStatus {
    fn from(value: &str) -> Self {
        match value {
            "Present" | "P" => AttendanceStatus::Present,
            other => AttendanceStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for AttendanceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Present" | "P" => AttendanceStatus::Present,
            _ => AttendanceStatus::Other(value),
        }
    }
}

impl From<AttendanceStatus> for String {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Present => "Present".to_string(),
            AttendanceStatus::Other(other) => other,
        }
    }
}

/// A validated attendance record for one employee on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The reported status.
    pub status: AttendanceStatus,
    /// Punch-in time, informational only.
    #[serde(default)]
    pub punch_in_time: Option<NaiveTime>,
    /// Punch-out time, informational only.
    #[serde(default)]
    pub punch_out_time: Option<NaiveTime>,
}

impl DayRecord {
    /// Creates a record without punch times.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_grid_engine::models::DayRecord;
    /// use chrono::NaiveDate;
    ///
    /// let record = DayRecord::new(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(), "Present");
    /// assert!(record.is_present());
    /// ```
    pub fn new(date: NaiveDate, status: impl Into<AttendanceStatus>) -> Self {
        Self {
            date,
            status: status.into(),
            punch_in_time: None,
            punch_out_time: None,
        }
    }

    /// Returns true if the record counts as present for payable purposes.
    pub fn is_present(&self) -> bool {
        self.status == AttendanceStatus::Present
    }
}

/// An attendance record as delivered by the attendance source.
///
/// Every field is optional text; [`DayRecord::try_from`] decides whether
/// the record is usable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDayRecord {
    /// Date as `YYYY-MM-DD` or an ISO-8601 timestamp.
    #[serde(default)]
    pub date: Option<String>,
    /// Status string (`Present`, `P`, `Late`, ...).
    #[serde(default)]
    pub status: Option<String>,
    /// Punch-in time of day.
    #[serde(default, alias = "punchInTime")]
    pub punch_in_time: Option<String>,
    /// Punch-out time of day.
    #[serde(default, alias = "punchOutTime")]
    pub punch_out_time: Option<String>,
}

impl TryFrom<RawDayRecord> for DayRecord {
    type Error = EngineError;

    fn try_from(raw: RawDayRecord) -> Result<Self, Self::Error> {
        let date = required_date("date", raw.date.as_deref())?;
        let status = raw
            .status
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| EngineError::InvalidRecord {
                field: "status".to_string(),
                message: "missing".to_string(),
            })?;

        Ok(DayRecord {
            date,
            status: AttendanceStatus::from(status),
            punch_in_time: raw.punch_in_time.as_deref().and_then(parse_punch_time),
            punch_out_time: raw.punch_out_time.as_deref().and_then(parse_punch_time),
        })
    }
}

/// Parses a record date, ignoring any time-of-day component.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the date as written, no
/// timezone conversion) and naive `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps.
pub(crate) fn parse_record_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|datetime| datetime.date())
}

/// Validates a required date field.
pub(crate) fn required_date(field: &str, value: Option<&str>) -> Result<NaiveDate, EngineError> {
    let value = value.ok_or_else(|| EngineError::InvalidRecord {
        field: field.to_string(),
        message: "missing".to_string(),
    })?;

    parse_record_date(value).ok_or_else(|| EngineError::InvalidRecord {
        field: field.to_string(),
        message: format!("unparseable date '{}'", value),
    })
}

fn parse_punch_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|datetime| datetime.time())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn raw(date: Option<&str>, status: Option<&str>) -> RawDayRecord {
        RawDayRecord {
            date: date.map(str::to_string),
            status: status.map(str::to_string),
            punch_in_time: None,
            punch_out_time: None,
        }
    }

    #[test]
    fn test_present_and_short_code_are_present() {
        assert_eq!(AttendanceStatus::from("Present"), AttendanceStatus::Present);
        assert_eq!(AttendanceStatus::from("P"), AttendanceStatus::Present);
    }

    #[test]
    fn test_other_statuses_are_not_present() {
        for status in ["Late", "HalfDay", "Absent", "present", "p", ""] {
            let record = DayRecord::new(make_date("2025-06-02"), status);
            assert!(!record.is_present(), "{status} should not count as present");
        }
    }

    #[test]
    fn test_status_serializes_as_plain_string() {
        let json = serde_json::to_string(&AttendanceStatus::Present).unwrap();
        assert_eq!(json, "\"Present\"");

        let status: AttendanceStatus = serde_json::from_str("\"Late\"").unwrap();
        assert_eq!(status, AttendanceStatus::Other("Late".to_string()));
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_record_date("2025-06-02"), Some(make_date("2025-06-02")));
    }

    #[test]
    fn test_parse_rfc3339_keeps_written_date() {
        assert_eq!(
            parse_record_date("2025-06-02T23:30:00.000Z"),
            Some(make_date("2025-06-02"))
        );
        assert_eq!(
            parse_record_date("2025-06-02T01:00:00+05:30"),
            Some(make_date("2025-06-02"))
        );
    }

    #[test]
    fn test_parse_naive_timestamp() {
        assert_eq!(
            parse_record_date("2025-06-02T09:15:00"),
            Some(make_date("2025-06-02"))
        );
    }

    #[test]
    fn test_parse_garbage_date_is_none() {
        assert_eq!(parse_record_date("not-a-date"), None);
        assert_eq!(parse_record_date("2025-02-30"), None);
        assert_eq!(parse_record_date(""), None);
    }

    #[test]
    fn test_raw_record_converts() {
        let mut raw_record = raw(Some("2025-06-02"), Some("P"));
        raw_record.punch_in_time = Some("09:02".to_string());
        raw_record.punch_out_time = Some("garbage".to_string());

        let record = DayRecord::try_from(raw_record).unwrap();
        assert_eq!(record.date, make_date("2025-06-02"));
        assert!(record.is_present());
        assert_eq!(record.punch_in_time, NaiveTime::from_hms_opt(9, 2, 0));
        assert_eq!(record.punch_out_time, None);
    }

    #[test]
    fn test_raw_record_missing_date_is_rejected() {
        let result = DayRecord::try_from(raw(None, Some("Present")));
        match result {
            Err(EngineError::InvalidRecord { field, .. }) => assert_eq!(field, "date"),
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_raw_record_missing_status_is_rejected() {
        let result = DayRecord::try_from(raw(Some("2025-06-02"), Some("  ")));
        match result {
            Err(EngineError::InvalidRecord { field, .. }) => assert_eq!(field, "status"),
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_raw_record_accepts_camel_case_punch_fields() {
        let json = r#"{"date": "2025-06-02", "status": "Present", "punchInTime": "09:00:00"}"#;
        let raw_record: RawDayRecord = serde_json::from_str(json).unwrap();
        assert_eq!(raw_record.punch_in_time.as_deref(), Some("09:00:00"));
    }

    #[test]
    fn test_padded_status_is_not_present_on_either_path() {
        let from_raw = DayRecord::try_from(raw(Some("2025-06-02"), Some(" Present "))).unwrap();
        let json = r#"{"date": "2025-06-02", "status": " Present "}"#;
        let from_json: DayRecord = serde_json::from_str(json).unwrap();

        let expected = AttendanceStatus::Other(" Present ".to_string());
        assert_eq!(from_raw.status, expected);
        assert_eq!(from_json.status, expected);
        assert!(!from_raw.is_present());
        assert!(!from_json.is_present());
    }
}
