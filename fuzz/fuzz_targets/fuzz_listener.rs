#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use logward::record::{LogRecord, Timestamp};
use logward::validator::{is_security_event, SecurityValidator};

#[derive(Arbitrary, Debug)]
struct ListenerFuzzInput {
    message: String,
    meta_json: Vec<u8>,
    iso8601: Option<String>,
    render: Option<String>,
    forward_failures: bool,
}

fuzz_target!(|input: ListenerFuzzInput| {
    let mut record = LogRecord::new(input.message);
    if let Ok(meta) = serde_json::from_slice(&input.meta_json) {
        record.meta = meta;
    }
    if let Some(iso8601) = input.iso8601 {
        record = record.with_timestamp(Timestamp::new(iso8601));
    }

    // The listener must never panic, whatever the record carries.
    let mut listener = SecurityValidator::new()
        .on_pass(|_, _| {})
        .on_fail(move |record, _| {
            // Only security events can ever be diverted to the fail callback.
            assert!(is_security_event(&record.meta));
        })
        .forward_failures(input.forward_failures)
        .into_listener();
    listener(&record, input.render.as_deref());
});
