use std::fmt;

use serde_json::Value;

use crate::error::{summarize_issues, FieldIssue};
use crate::meta::{
    check_access_event_meta, check_authentication_event_meta, AccessEventMeta,
    AuthenticationEventMeta, ACCESS_EVENT_KEY, AUTHENTICATION_EVENT_KEY,
};
use crate::record::{LogRecord, MetaMap};

/// Log target for the plugin's own diagnostics, keeping them distinguishable
/// from application logs flowing through the same pipeline.
pub const LOG_TARGET: &str = "logward";

/// A callback suitable for registration on a host framework's listener channel.
///
/// Callbacks receive the record and, when the host has already formatted it,
/// the rendered output.
pub type ListenerCallback = Box<dyn FnMut(&LogRecord, Option<&str>)>;

/// The compliance-relevant log categories this plugin validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityCategory {
    /// Records tagged with `accessEvent` metadata.
    Access,
    /// Records tagged with `authenticationEvent` metadata.
    Authentication,
}

impl SecurityCategory {
    /// Every category, in the order the wrapper checks them.
    pub const ALL: [SecurityCategory; 2] = [Self::Access, Self::Authentication];

    /// The metadata key producers use for this category.
    pub fn key(self) -> &'static str {
        match self {
            Self::Access => ACCESS_EVENT_KEY,
            Self::Authentication => AUTHENTICATION_EVENT_KEY,
        }
    }
}

impl fmt::Display for SecurityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Access => f.write_str("access event"),
            Self::Authentication => f.write_str("authentication event"),
        }
    }
}

/// Outcome of validating one security category on a record.
///
/// Distinguishes a payload that failed the shape check from one whose shape was
/// fine but whose record carried no usable timestamp, so callers are not left
/// reconstructing the difference from diagnostic text.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryOutcome<T> {
    /// The payload validated; carries the narrowed, typed metadata.
    Valid(T),
    /// The payload failed the shape check, with one finding per offending field.
    InvalidShape(Vec<FieldIssue>),
    /// The payload shape was correct but the record carries no non-empty,
    /// parseable ISO-8601 timestamp.
    MissingTimestamp,
}

impl<T> CategoryOutcome<T> {
    /// Whether the category validated.
    pub fn is_valid(&self) -> bool {
        matches!(self, CategoryOutcome::Valid(_))
    }
}

/// Validates that the provided log metadata mapping has security event meta
/// data attached. Existence only; the payload shape is not checked here.
///
/// # Example
///
/// ```
/// use logward::record::LogRecord;
/// use logward::validator::is_security_event;
/// use serde_json::json;
///
/// let record = LogRecord::new("audit").meta("accessEvent", json!({ "thisIs": "wrong" }));
/// assert!(is_security_event(&record.meta));
/// ```
pub fn is_security_event(meta: &MetaMap) -> bool {
    meta.contains_key(ACCESS_EVENT_KEY) || meta.contains_key(AUTHENTICATION_EVENT_KEY)
}

/// Check the record's timestamp block, emitting a diagnostic when it is
/// unusable. Missing and unparseable stamps get distinct messages.
fn check_timestamp(record: &LogRecord) -> bool {
    match &record.timestamp {
        Some(stamp) if stamp.is_valid() => true,
        Some(stamp) if !stamp.iso8601.is_empty() => {
            log::error!(
                target: LOG_TARGET,
                "The iso8601 timestamp value {:?} is not a valid ISO-8601 timestamp.",
                stamp.iso8601
            );
            false
        }
        _ => {
            log::error!(
                target: LOG_TARGET,
                "The iso8601 timestamp value was not set. Please make sure that you have \
                 timestamps enabled in your logger configuration."
            );
            false
        }
    }
}

/// Validates the record's `accessEvent` payload.
///
/// The payload must satisfy the access-event shape and the record must carry a
/// non-empty ISO-8601 timestamp. A correct shape with an unusable timestamp
/// emits the timestamp diagnostic and reports `MissingTimestamp`.
pub fn validate_access_event(record: &LogRecord) -> CategoryOutcome<AccessEventMeta> {
    let payload = record.meta.get(ACCESS_EVENT_KEY).unwrap_or(&Value::Null);
    match check_access_event_meta(payload) {
        Ok(meta) => {
            if check_timestamp(record) {
                CategoryOutcome::Valid(meta)
            } else {
                CategoryOutcome::MissingTimestamp
            }
        }
        Err(issues) => CategoryOutcome::InvalidShape(issues),
    }
}

/// Validates the record's `authenticationEvent` payload.
pub fn validate_authentication_event(
    record: &LogRecord,
) -> CategoryOutcome<AuthenticationEventMeta> {
    let payload = record
        .meta
        .get(AUTHENTICATION_EVENT_KEY)
        .unwrap_or(&Value::Null);
    match check_authentication_event_meta(payload) {
        Ok(meta) => {
            if check_timestamp(record) {
                CategoryOutcome::Valid(meta)
            } else {
                CategoryOutcome::MissingTimestamp
            }
        }
        Err(issues) => CategoryOutcome::InvalidShape(issues),
    }
}

/// Validates that the record contains an `accessEvent` payload with all of the
/// required properties and a usable timestamp.
pub fn access_event_valid(record: &LogRecord) -> bool {
    validate_access_event(record).is_valid()
}

/// Validates that the record contains an `authenticationEvent` payload with all
/// of the required properties and a usable timestamp.
pub fn authentication_event_valid(record: &LogRecord) -> bool {
    validate_authentication_event(record).is_valid()
}

/// Log a framework-level diagnostic for a failed category and report whether
/// the outcome was valid.
fn report<T>(category: SecurityCategory, outcome: &CategoryOutcome<T>) -> bool {
    match outcome {
        CategoryOutcome::Valid(_) => true,
        CategoryOutcome::InvalidShape(issues) => {
            log::error!(
                target: LOG_TARGET,
                "A log failed {} validation ({})! Please verify its meta data is set properly.",
                category,
                summarize_issues(issues)
            );
            false
        }
        CategoryOutcome::MissingTimestamp => {
            // The timestamp diagnostic has already been emitted.
            log::error!(
                target: LOG_TARGET,
                "A log failed {} validation! Please verify its meta data is set properly.",
                category
            );
            false
        }
    }
}

/// Listener wrapper that guards security-event records.
///
/// Non-security records flow straight to the pass callback. Security records
/// are validated category by category; the first failing category emits a
/// diagnostic and diverts the record to the fail callback. With
/// `forward_failures` set, failing records additionally reach the pass
/// callback, so hosts that must report every record can still do so.
///
/// Each invocation is independent and touches no shared state, so the produced
/// callback is safe to register on any number of listener channels.
pub struct SecurityValidator {
    pass: ListenerCallback,
    fail: ListenerCallback,
    forward_failures: bool,
}

impl SecurityValidator {
    /// A validator whose callbacks are both no-ops.
    pub fn new() -> Self {
        Self {
            pass: Box::new(|_, _| {}),
            fail: Box::new(|_, _| {}),
            forward_failures: false,
        }
    }

    /// Set the callback invoked for records that pass validation (and for all
    /// non-security records).
    pub fn on_pass(mut self, cb: impl FnMut(&LogRecord, Option<&str>) + 'static) -> Self {
        self.pass = Box::new(cb);
        self
    }

    /// Set the callback invoked for records that fail validation.
    pub fn on_fail(mut self, cb: impl FnMut(&LogRecord, Option<&str>) + 'static) -> Self {
        self.fail = Box::new(cb);
        self
    }

    /// When set, failing records reach the pass callback in addition to the
    /// fail callback instead of being diverted away from it.
    pub fn forward_failures(mut self, forward: bool) -> Self {
        self.forward_failures = forward;
        self
    }

    /// Inspect one record, routing it to the configured callbacks.
    pub fn inspect(&mut self, record: &LogRecord, render: Option<&str>) {
        if is_security_event(&record.meta) {
            for category in SecurityCategory::ALL {
                if !record.meta.contains_key(category.key()) {
                    continue;
                }
                let ok = match category {
                    SecurityCategory::Access => {
                        report(category, &validate_access_event(record))
                    }
                    SecurityCategory::Authentication => {
                        report(category, &validate_authentication_event(record))
                    }
                };
                if !ok {
                    (self.fail)(record, render);
                    if self.forward_failures {
                        (self.pass)(record, render);
                    }
                    return;
                }
            }
        }
        // Execute the user's listener callback.
        (self.pass)(record, render);
    }

    /// Consume the validator, producing a callback suitable for registration
    /// on the host framework's universal listener channel.
    pub fn into_listener(self) -> ListenerCallback {
        let mut validator = self;
        Box::new(move |record, render| validator.inspect(record, render))
    }
}

impl Default for SecurityValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap a pass callback and a fail callback into a listener callback that
/// validates security events before reporting them.
///
/// This is the two-callback convenience form of [`SecurityValidator`]. Logs
/// carrying `accessEvent` or `authenticationEvent` metadata are validated; all
/// other logs flow straight through to the pass callback.
///
/// # Example
///
/// ```
/// use logward::validator::security_validator;
///
/// let mut listener = security_validator(
///     |record, _| println!("passed validation: {}", record.message),
///     |record, _| eprintln!("FAILED validation: {}", record.message),
/// );
///
/// let record = logward::record::LogRecord::new("nothing special here");
/// listener(&record, None);
/// ```
pub fn security_validator(
    pass: impl FnMut(&LogRecord, Option<&str>) + 'static,
    fail: impl FnMut(&LogRecord, Option<&str>) + 'static,
) -> ListenerCallback {
    SecurityValidator::new()
        .on_pass(pass)
        .on_fail(fail)
        .into_listener()
}
