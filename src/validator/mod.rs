/*!
 * Security-event validation for listener pipelines
 *
 * This module implements the listener wrapper that guards compliance-relevant
 * log records, the per-category validators, and the security-event classifier.
 */

mod validator;

pub use validator::*;
