#![no_main]

use libfuzzer_sys::fuzz_target;
use logward::meta;

fuzz_target!(|data: &[u8]| {
    // Shape checks must never panic, whatever JSON the producer attached.
    if let Ok(payload) = serde_json::from_slice::<serde_json::Value>(data) {
        let access = meta::check_access_event_meta(&payload);
        let authentication = meta::check_authentication_event_meta(&payload);

        // The boolean predicates must agree with the tagged results.
        assert_eq!(meta::is_access_event_meta(&payload), access.is_ok());
        assert_eq!(
            meta::is_authentication_event_meta(&payload),
            authentication.is_ok()
        );
    }
});
