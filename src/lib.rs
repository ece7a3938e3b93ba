/*!
 * Logward Security-Event Validation Plugin
 *
 * Logward validates compliance-relevant log records as they pass through a
 * structured-logging framework's listener pipeline. Records tagged with
 * `accessEvent` or `authenticationEvent` metadata are checked for a complete,
 * correctly-typed set of required fields and a usable ISO-8601 timestamp
 * before being reported as valid; records failing validation are diverted to
 * a fail callback.
 *
 * The building blocks are:
 *
 * - A validator factory producing listener-compatible callbacks
 * - Structural shape checks narrowing untyped payloads into typed metadata
 * - A classifier detecting security events by metadata key
 *
 * All validation is synchronous, stateless, and structural; the host framework
 * owns transport, formatting, and timestamp generation.
 *
 * # Example
 *
 * ```
 * use logward::prelude::*;
 * use serde_json::json;
 *
 * let mut listener = security_validator(
 *     |record, _| println!("ok: {}", record.message),
 *     |record, _| eprintln!("invalid security event: {}", record.message),
 * );
 *
 * let record = LogRecord::new("HIPAA data was accessed.")
 *     .meta(
 *         "accessEvent",
 *         json!({
 *             "userId": "abc123",
 *             "subject": "my-app",
 *             "description": "abc123 accessed medical-portal-db",
 *             "hostname": "123.456.789.100",
 *         }),
 *     )
 *     .timestamped();
 *
 * listener(&record, None);
 * ```
 */

/// Common error types and per-field validation findings
pub mod error;

/// Typed metadata payloads and structural shape checks
pub mod meta;

/// The host-facing log record model
pub mod record;

/// The listener wrapper, category validators, and security-event classifier
pub mod validator;

// Re-export main types for convenience
pub use error::{FieldIssue, IssueKind, ValidationError, ValidationResult};
pub use meta::{
    check_access_event_meta, check_authentication_event_meta, is_access_event_meta,
    is_authentication_event_meta, AccessEventMeta, AuthenticationEventMeta, UserId,
    ACCESS_EVENT_KEY, AUTHENTICATION_EVENT_KEY,
};
pub use record::{LogRecord, MetaMap, Timestamp};
pub use validator::{
    access_event_valid, authentication_event_valid, is_security_event, security_validator,
    validate_access_event, validate_authentication_event, CategoryOutcome, ListenerCallback,
    SecurityCategory, SecurityValidator, LOG_TARGET,
};

/// Provides the most commonly used items in one import.
pub mod prelude {
    pub use crate::error::{FieldIssue, ValidationError, ValidationResult};
    pub use crate::meta::is_access_event_meta;
    pub use crate::meta::is_authentication_event_meta;
    pub use crate::meta::AccessEventMeta;
    pub use crate::meta::AuthenticationEventMeta;
    pub use crate::meta::UserId;
    pub use crate::record::LogRecord;
    pub use crate::record::MetaMap;
    pub use crate::record::Timestamp;
    pub use crate::validator::access_event_valid;
    pub use crate::validator::authentication_event_valid;
    pub use crate::validator::is_security_event;
    pub use crate::validator::security_validator;
    pub use crate::validator::CategoryOutcome;
    pub use crate::validator::SecurityValidator;
}
