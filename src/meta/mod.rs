/*!
 * Typed metadata for compliance-relevant log categories
 *
 * This module defines the typed payloads producers attach under the
 * `accessEvent` and `authenticationEvent` metadata keys, along with the
 * structural shape checks that narrow an untyped payload into one of them.
 */

mod meta;

pub use meta::*;
