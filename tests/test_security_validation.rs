//! Integration tests for the security validator listener
//!
//! These tests drive the validator the way a host logging framework would:
//! records are built with the meta builder, stamped (or not) according to the
//! host's timestamp configuration, and delivered through a registered
//! listener callback.

use logward::prelude::*;
use serde_json::json;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_validator_fires_error_callback_when_meta_data_is_incorrect() {
    let passed = Rc::new(Cell::new(0));
    let failed = Rc::new(Cell::new(0));
    let pass_count = Rc::clone(&passed);
    let fail_count = Rc::clone(&failed);

    let mut listener = security_validator(
        move |_, _| pass_count.set(pass_count.get() + 1),
        move |_, _| fail_count.set(fail_count.get() + 1),
    );

    let record = LogRecord::new("I'm a failure! :(")
        .meta("accessEvent", json!({ "thisIs": "wrong" }))
        .timestamped();
    listener(&record, None);

    // Generate a non-security log to make sure that other logs do not throw failures
    listener(&LogRecord::new("This should not trigger the error!"), None);

    assert_eq!(passed.get(), 1);
    assert_eq!(failed.get(), 1);
}

#[test]
fn test_validator_passes_access_event_log() {
    let checked = Rc::new(Cell::new(false));
    let sink = Rc::clone(&checked);

    let mut listener = security_validator(
        move |record, _| {
            assert!(is_security_event(&record.meta));
            let access = AccessEventMeta::try_from(&record.meta["accessEvent"])
                .expect("the access event meta was not detected");
            assert_eq!(access.user_id, UserId::Text("abc123".to_owned()));
            assert_eq!(access.subject, "my-app");
            assert_eq!(access.description, "access medical-portal-db");
            assert_eq!(access.hostname, "123.456.789.100");
            sink.set(true);
        },
        |_, _| panic!("a well-formed access event must pass validation"),
    );

    let record = LogRecord::new("Accessing HIPAA protected data.")
        .meta(
            "accessEvent",
            AccessEventMeta::new(
                "abc123",
                "my-app",
                "access medical-portal-db",
                "123.456.789.100",
            ),
        )
        .timestamped();
    listener(&record, None);

    assert!(checked.get(), "the pass callback never ran");
}

#[test]
fn test_validator_passes_authentication_event_log() {
    let checked = Rc::new(Cell::new(false));
    let sink = Rc::clone(&checked);

    let mut listener = security_validator(
        move |record, _| {
            assert!(is_security_event(&record.meta));
            let auth = AuthenticationEventMeta::try_from(&record.meta["authenticationEvent"])
                .expect("the authentication event meta was not detected");
            assert_eq!(auth.user_id, UserId::Text("abc123".to_owned()));
            assert_eq!(auth.mechanism, "cognito");
            assert_eq!(auth.subject, "my-app");
            assert_eq!(auth.description, "authenticate to medical portal");
            assert_eq!(auth.hostname, "123.456.789.100");
            sink.set(true);
        },
        |_, _| panic!("a well-formed authentication event must pass validation"),
    );

    let record = LogRecord::new("Accessing HIPAA protected data.")
        .meta(
            "authenticationEvent",
            AuthenticationEventMeta::new(
                "abc123",
                "cognito",
                "my-app",
                "authenticate to medical portal",
                "123.456.789.100",
            ),
        )
        .timestamped();
    listener(&record, None);

    assert!(checked.get(), "the pass callback never ran");
}

#[test]
fn test_validator_fails_when_host_timestamps_are_disabled() {
    let failed = Rc::new(Cell::new(0));
    let fail_count = Rc::clone(&failed);

    let mut listener = security_validator(
        |_, _| panic!("records without timestamps must not pass validation"),
        move |_, _| fail_count.set(fail_count.get() + 1),
    );

    // Shape is correct, but the host never stamped the record.
    let record = LogRecord::new("Accessing HIPAA protected data.").meta(
        "accessEvent",
        AccessEventMeta::new(
            "abc123",
            "my-app",
            "access medical-portal-db",
            "123.456.789.100",
        ),
    );
    listener(&record, None);

    assert_eq!(failed.get(), 1);
}

#[test]
fn test_validator_forwards_render_output_untouched() {
    let rendered = Rc::new(Cell::new(false));
    let sink = Rc::clone(&rendered);

    let mut listener = security_validator(
        move |_, render| {
            assert_eq!(render, Some("[INFO] hello"));
            sink.set(true);
        },
        |_, _| {},
    );

    listener(&LogRecord::new("hello"), Some("[INFO] hello"));
    assert!(rendered.get());
}

#[test]
fn test_records_deserialized_from_host_wire_format_validate() {
    let raw = r#"{
        "message": "HIPAA data was accessed.",
        "meta": {
            "accessEvent": {
                "userId": 7,
                "subject": "my-app",
                "description": "read patient chart",
                "hostname": "10.0.0.1"
            }
        },
        "timestamp": { "iso8601": "2026-08-27T10:15:00.000Z" }
    }"#;

    let record: LogRecord = serde_json::from_str(raw).unwrap();
    assert!(access_event_valid(&record));
}
