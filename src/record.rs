//! Host-Facing Log Record Model
//!
//! This module models the slice of a structured-logging framework's log record
//! that the validation plugin consumes: the metadata mapping attached by the
//! producer and the ISO-8601 timestamp the host stamps when timestamps are
//! enabled. Hosts adapt their own record type to `LogRecord` when invoking a
//! registered listener; tests and demos construct records directly.
//!
//! Everything else a real record carries (levels, formatting state, emitter
//! configuration) belongs to the host framework and is deliberately absent.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-log key/value bag attached by the producer and inspected by listeners.
///
/// Keys are category names (e.g. `accessEvent`); values are untyped payloads
/// that the shape checks narrow into the typed metadata structs.
pub type MetaMap = BTreeMap<String, Value>;

/// The timestamp block the host stamps onto a record when timestamp generation
/// is enabled in its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    /// The ISO-8601 rendering of the emission time.
    pub iso8601: String,
}

impl Timestamp {
    /// Wrap an already-rendered ISO-8601 string.
    pub fn new(iso8601: impl Into<String>) -> Self {
        Self {
            iso8601: iso8601.into(),
        }
    }

    /// Stamp the current UTC time, rendered the way hosts typically do.
    pub fn now() -> Self {
        Self {
            iso8601: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Whether the stamp is a non-empty, parseable ISO-8601 (RFC 3339) string.
    pub fn is_valid(&self) -> bool {
        !self.iso8601.is_empty() && DateTime::parse_from_rfc3339(&self.iso8601).is_ok()
    }
}

/// A log record as delivered to listener callbacks.
///
/// Only the fields the validator consumes are modeled; `meta` and `timestamp`
/// match the host framework's record layout so records can be deserialized
/// straight off its wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LogRecord {
    /// The producer-supplied log message.
    #[serde(default)]
    pub message: String,

    /// Metadata mapping, category name to category payload.
    #[serde(default)]
    pub meta: MetaMap,

    /// Present only when the host has timestamps enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

impl LogRecord {
    /// Create a record with the given message, no metadata, and no timestamp.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            meta: MetaMap::new(),
            timestamp: None,
        }
    }

    /// Attach a metadata entry, mirroring the host's `meta(key, value)` builder.
    ///
    /// # Example
    ///
    /// ```
    /// use logward::record::LogRecord;
    /// use serde_json::json;
    ///
    /// let record = LogRecord::new("HIPAA data was accessed.")
    ///     .meta("accessEvent", json!({ "userId": "abc123" }));
    /// assert!(record.meta.contains_key("accessEvent"));
    /// ```
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Attach an explicit timestamp block.
    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Stamp the record with the current UTC time.
    pub fn timestamped(self) -> Self {
        let stamp = Timestamp::now();
        self.with_timestamp(stamp)
    }

    /// The ISO-8601 timestamp string, when one is present.
    pub fn iso8601(&self) -> Option<&str> {
        self.timestamp.as_ref().map(|t| t.iso8601.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_meta_builder_attaches_payloads() {
        let record = LogRecord::new("hello")
            .meta("accessEvent", json!({ "userId": 7 }))
            .meta("requestId", json!("r-42"));

        assert_eq!(record.meta.len(), 2);
        assert_eq!(record.meta["accessEvent"]["userId"], json!(7));
    }

    #[test]
    fn test_timestamp_now_is_valid() {
        let stamp = Timestamp::now();
        assert!(stamp.is_valid());
    }

    #[test]
    fn test_timestamp_rejects_empty_and_garbage() {
        assert!(!Timestamp::new("").is_valid());
        assert!(!Timestamp::new("last tuesday").is_valid());
        assert!(Timestamp::new("2026-08-27T10:15:00.000Z").is_valid());
    }

    #[test]
    fn test_record_roundtrips_through_json() {
        let record = LogRecord::new("audit")
            .meta("authenticationEvent", json!({ "userId": "abc123" }))
            .with_timestamp(Timestamp::new("2026-08-27T10:15:00Z"));

        let encoded = serde_json::to_string(&record).unwrap();
        let decoded: LogRecord = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_record_deserializes_without_timestamp_block() {
        let decoded: LogRecord = serde_json::from_str(r#"{"message":"m","meta":{}}"#).unwrap();
        assert!(decoded.timestamp.is_none());
        assert!(decoded.iso8601().is_none());
    }
}
