//! Demo of the security validator guarding a listener channel.
//!
//! Run with `cargo run --example security_listener`. One malformed record is
//! diverted to the fail callback; the two well-formed records pass. Framework
//! diagnostics are emitted through the `log` facade under the `logward`
//! target, so wire up your favourite logger implementation to see them.

use logward::prelude::*;
use serde_json::json;

fn main() {
    let mut listener = security_validator(
        |record, _| println!("Passed Validation => {:?}", record.meta),
        |record, _| println!("Failed Validation => {:?}", record.meta),
    );

    let malformed = LogRecord::new("I should fail validation!")
        .meta("accessEvent", json!({ "foo": "bar" }))
        .timestamped();
    listener(&malformed, None);

    let access = LogRecord::new("HIPAA data was accessed.")
        .meta(
            "accessEvent",
            AccessEventMeta::new(
                "abc123",
                "my-app",
                "abc123 accessed HIPAA data.",
                "243.123.678.456",
            ),
        )
        .timestamped();
    listener(&access, None);

    let authentication = LogRecord::new("SecureApp was accessed.")
        .meta(
            "authenticationEvent",
            AuthenticationEventMeta::new(
                "abc123",
                "cognito",
                "cognitoUser",
                "abc123 authenticated with SecureApp.",
                "243.123.678.456",
            ),
        )
        .timestamped();
    listener(&authentication, None);
}
