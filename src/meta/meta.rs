use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::{FieldIssue, ValidationError, ValidationResult};

/// Metadata key under which producers attach access-event payloads.
pub const ACCESS_EVENT_KEY: &str = "accessEvent";

/// Metadata key under which producers attach authentication-event payloads.
pub const AUTHENTICATION_EVENT_KEY: &str = "authenticationEvent";

/// A user identifier, which producers may supply as either a string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    /// String identifier, e.g. `"abc123"`.
    Text(String),
    /// Numeric identifier, e.g. `42`.
    Number(serde_json::Number),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Text(s) => f.write_str(s),
            UserId::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId::Text(value.to_owned())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        UserId::Text(value)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        UserId::Number(value.into())
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        UserId::Number(value.into())
    }
}

impl From<UserId> for Value {
    fn from(user_id: UserId) -> Value {
        match user_id {
            UserId::Text(s) => Value::String(s),
            UserId::Number(n) => Value::Number(n),
        }
    }
}

/// Required metadata for access-event logs.
///
/// + `user_id`: Unique identifier of the user accessing the object
/// + `subject`: Service identifier or principal name that uniquely identifies
///   the subject accessing the object
/// + `description`: Unique object identifier or complete description of the
///   object and the action requested
/// + `hostname`: The hostname of the entity accessing the object
/// + `context`: Optional authorization context details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessEventMeta {
    #[serde(alias = "user_id")]
    pub user_id: UserId,
    pub subject: String,
    pub description: String,
    pub hostname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl AccessEventMeta {
    /// Create access-event metadata with the four required fields.
    pub fn new(
        user_id: impl Into<UserId>,
        subject: impl Into<String>,
        description: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            subject: subject.into(),
            description: description.into(),
            hostname: hostname.into(),
            context: None,
        }
    }

    /// Attach optional authorization context details.
    pub fn with_context(mut self, context: impl Into<Value>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl From<AccessEventMeta> for Value {
    fn from(meta: AccessEventMeta) -> Value {
        let mut map = Map::new();
        map.insert("userId".to_owned(), meta.user_id.into());
        map.insert("subject".to_owned(), Value::String(meta.subject));
        map.insert("description".to_owned(), Value::String(meta.description));
        map.insert("hostname".to_owned(), Value::String(meta.hostname));
        if let Some(context) = meta.context {
            map.insert("context".to_owned(), context);
        }
        Value::Object(map)
    }
}

impl TryFrom<&Value> for AccessEventMeta {
    type Error = ValidationError;

    fn try_from(value: &Value) -> ValidationResult<Self> {
        check_access_event_meta(value)
            .map_err(|issues| ValidationError::invalid_shape(ACCESS_EVENT_KEY, issues))
    }
}

/// Required metadata for authentication-event logs.
///
/// + `user_id`: Unique identifier of the authenticating user
/// + `mechanism`: The authentication mechanism used
/// + `subject`: Service identifier or principal name that uniquely identifies
///   the subject authenticating
/// + `description`: Complete description of the authentication attempted
/// + `hostname`: The hostname of the authenticating entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationEventMeta {
    #[serde(alias = "user_id")]
    pub user_id: UserId,
    pub mechanism: String,
    pub subject: String,
    pub description: String,
    pub hostname: String,
}

impl AuthenticationEventMeta {
    /// Create authentication-event metadata with the five required fields.
    pub fn new(
        user_id: impl Into<UserId>,
        mechanism: impl Into<String>,
        subject: impl Into<String>,
        description: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            mechanism: mechanism.into(),
            subject: subject.into(),
            description: description.into(),
            hostname: hostname.into(),
        }
    }
}

impl From<AuthenticationEventMeta> for Value {
    fn from(meta: AuthenticationEventMeta) -> Value {
        let mut map = Map::new();
        map.insert("userId".to_owned(), meta.user_id.into());
        map.insert("mechanism".to_owned(), Value::String(meta.mechanism));
        map.insert("subject".to_owned(), Value::String(meta.subject));
        map.insert("description".to_owned(), Value::String(meta.description));
        map.insert("hostname".to_owned(), Value::String(meta.hostname));
        Value::Object(map)
    }
}

impl TryFrom<&Value> for AuthenticationEventMeta {
    type Error = ValidationError;

    fn try_from(value: &Value) -> ValidationResult<Self> {
        check_authentication_event_meta(value)
            .map_err(|issues| ValidationError::invalid_shape(AUTHENTICATION_EVENT_KEY, issues))
    }
}

/// Runtime type name of a JSON value, as reported in `WrongType` findings.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Look a field up on the payload, accepting both the camelCase wire spelling
/// and its snake_case variant.
fn find_field<'a>(obj: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| obj.get(*name))
}

/// Extract a required string field, recording a finding when it is absent or
/// carries a non-string value. No coercion is performed.
fn required_string(
    obj: &Map<String, Value>,
    names: &[&str],
    canonical: &'static str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match find_field(obj, names) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(FieldIssue::wrong_type(canonical, "string", json_kind(other)));
            None
        }
        None => {
            issues.push(FieldIssue::missing(canonical));
            None
        }
    }
}

/// Extract the required user identifier, which may be a string or a number.
fn required_user_id(obj: &Map<String, Value>, issues: &mut Vec<FieldIssue>) -> Option<UserId> {
    match find_field(obj, &["userId", "user_id"]) {
        Some(Value::String(s)) => Some(UserId::Text(s.clone())),
        Some(Value::Number(n)) => Some(UserId::Number(n.clone())),
        Some(other) => {
            issues.push(FieldIssue::wrong_type(
                "userId",
                "string or number",
                json_kind(other),
            ));
            None
        }
        None => {
            issues.push(FieldIssue::missing("userId"));
            None
        }
    }
}

const ACCESS_EVENT_FIELDS: [&str; 4] = ["userId", "subject", "description", "hostname"];
const AUTHENTICATION_EVENT_FIELDS: [&str; 5] =
    ["userId", "mechanism", "subject", "description", "hostname"];

/// Report every required field as missing. Used when the payload is not an
/// object at all and therefore owns no fields.
fn all_missing(fields: &[&'static str]) -> Vec<FieldIssue> {
    fields.iter().copied().map(FieldIssue::missing).collect()
}

/// Shape-check an untyped payload against the access-event field set,
/// narrowing it into [`AccessEventMeta`] on success.
///
/// Every required field is checked independently; the returned findings list
/// one entry per missing or wrong-typed field. Unknown extra fields are
/// ignored. A non-object payload reports every required field as missing.
pub fn check_access_event_meta(value: &Value) -> Result<AccessEventMeta, Vec<FieldIssue>> {
    let Some(obj) = value.as_object() else {
        return Err(all_missing(&ACCESS_EVENT_FIELDS));
    };

    let mut issues = Vec::new();
    let user_id = required_user_id(obj, &mut issues);
    let subject = required_string(obj, &["subject"], "subject", &mut issues);
    let description = required_string(obj, &["description"], "description", &mut issues);
    let hostname = required_string(obj, &["hostname"], "hostname", &mut issues);

    match (user_id, subject, description, hostname) {
        (Some(user_id), Some(subject), Some(description), Some(hostname)) => Ok(AccessEventMeta {
            user_id,
            subject,
            description,
            hostname,
            context: find_field(obj, &["context"]).cloned(),
        }),
        _ => Err(issues),
    }
}

/// Shape-check an untyped payload against the authentication-event field set,
/// narrowing it into [`AuthenticationEventMeta`] on success.
pub fn check_authentication_event_meta(
    value: &Value,
) -> Result<AuthenticationEventMeta, Vec<FieldIssue>> {
    let Some(obj) = value.as_object() else {
        return Err(all_missing(&AUTHENTICATION_EVENT_FIELDS));
    };

    let mut issues = Vec::new();
    let user_id = required_user_id(obj, &mut issues);
    let mechanism = required_string(obj, &["mechanism"], "mechanism", &mut issues);
    let subject = required_string(obj, &["subject"], "subject", &mut issues);
    let description = required_string(obj, &["description"], "description", &mut issues);
    let hostname = required_string(obj, &["hostname"], "hostname", &mut issues);

    match (user_id, mechanism, subject, description, hostname) {
        (Some(user_id), Some(mechanism), Some(subject), Some(description), Some(hostname)) => {
            Ok(AuthenticationEventMeta {
                user_id,
                mechanism,
                subject,
                description,
                hostname,
            })
        }
        _ => Err(issues),
    }
}

/// Whether the payload satisfies the access-event shape.
///
/// # Example
///
/// ```
/// use logward::meta::is_access_event_meta;
/// use serde_json::json;
///
/// assert!(is_access_event_meta(&json!({
///     "userId": "abc123",
///     "subject": "my-app",
///     "description": "access medical-portal-db",
///     "hostname": "123.456.789.100",
/// })));
/// assert!(!is_access_event_meta(&json!({ "thisIs": "wrong" })));
/// ```
pub fn is_access_event_meta(value: &Value) -> bool {
    check_access_event_meta(value).is_ok()
}

/// Whether the payload satisfies the authentication-event shape.
pub fn is_authentication_event_meta(value: &Value) -> bool {
    check_authentication_event_meta(value).is_ok()
}
