/*!
 * Error Handling for the Logward Validation Plugin
 *
 * Provides the error types returned by the fallible narrowing APIs, along with
 * the per-field findings produced by the structural shape checks.
 */

use std::fmt;
use thiserror::Error;

/// A single finding produced while shape-checking a metadata payload.
///
/// The structural checks report every offending field rather than stopping at
/// the first one, so callers can surface a complete picture of what a producer
/// got wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Canonical wire name of the offending field (e.g. `userId`).
    pub field: &'static str,
    /// What was wrong with the field.
    pub kind: IssueKind,
}

/// The kind of problem found with a required metadata field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// The field is not present on the payload.
    Missing,
    /// The field is present but its runtime type is not in the permitted set.
    WrongType {
        expected: &'static str,
        actual: &'static str,
    },
}

impl FieldIssue {
    /// A finding for a field that is absent from the payload.
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            kind: IssueKind::Missing,
        }
    }

    /// A finding for a field carrying a value of the wrong type.
    pub fn wrong_type(field: &'static str, expected: &'static str, actual: &'static str) -> Self {
        Self {
            field,
            kind: IssueKind::WrongType { expected, actual },
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::Missing => write!(f, "{} is missing", self.field),
            IssueKind::WrongType { expected, actual } => {
                write!(f, "{} must be {}, got {}", self.field, expected, actual)
            }
        }
    }
}

/// Render a list of findings as a single comma-separated summary.
pub(crate) fn summarize_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error type for the fallible validation and narrowing operations.
///
/// The listener-facing validation path never returns these for ordinary invalid
/// input; it degrades to `false` plus a diagnostic instead. These errors are
/// produced by the explicit conversion APIs such as the `TryFrom` impls on the
/// typed metadata structs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{category} metadata failed shape validation: {}", summarize_issues(.issues))]
    InvalidShape {
        category: &'static str,
        issues: Vec<FieldIssue>,
    },

    #[error("{category} log carries no usable ISO-8601 timestamp")]
    MissingTimestamp { category: &'static str },

    #[error("log carries no {category} metadata")]
    MissingCategory { category: &'static str },
}

impl ValidationError {
    /// Construct an `InvalidShape` error from the findings of a shape check.
    pub fn invalid_shape(category: &'static str, issues: Vec<FieldIssue>) -> Self {
        ValidationError::InvalidShape { category, issues }
    }

    /// Construct a `MissingTimestamp` error for the given category.
    pub fn missing_timestamp(category: &'static str) -> Self {
        ValidationError::MissingTimestamp { category }
    }

    /// Construct a `MissingCategory` error for the given category.
    pub fn missing_category(category: &'static str) -> Self {
        ValidationError::MissingCategory { category }
    }

    /// The per-field findings, when this error carries any.
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            ValidationError::InvalidShape { issues, .. } => issues,
            _ => &[],
        }
    }
}

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
