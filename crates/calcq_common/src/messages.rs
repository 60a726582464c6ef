use std::fmt::{self, Display};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Opaque identifier of an expression record.
///
/// Services hand these out either as strings (UUIDs) or as integers, so both
/// JSON forms are accepted and kept as text. The client never interprets the
/// value beyond displaying it.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(id) => Ok(RecordId(id)),
            Value::Number(id) => Ok(RecordId(id.to_string())),
            other => Err(D::Error::custom(format!(
                "expected a string or numeric id, got {other}"
            ))),
        }
    }
}

/// One submitted calculation as reported by the expression service.
///
/// Records are owned by the service. The client only ever holds the snapshot
/// returned by the latest list request and never modifies it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExpressionRecord {
    pub id: RecordId,
    /// The submitted text. Some service versions omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    /// Free-form lifecycle label such as `pending` or `done`.
    pub status: String,
    /// Computed value, absent until the service finishes processing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl ExpressionRecord {
    /// The expression text, or `None` when it is missing or empty.
    pub fn expression_text(&self) -> Option<&str> {
        self.expression.as_deref().filter(|text| !text.is_empty())
    }

    /// The result formatted for display, or `None` when there is no result yet.
    ///
    /// The service reports unfinished records with a zero result, so `0`,
    /// `""`, `false` and `null` all count as no result. Strings are shown
    /// as-is, every other JSON value in its JSON form.
    pub fn result_text(&self) -> Option<String> {
        match self.result.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(text) if text.is_empty() => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Body of `POST {base}/calculate`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CalculateRequest {
    pub expression: String,
}

impl CalculateRequest {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }
}

/// Body of a successful `GET {base}/expressions`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ExpressionsResponse {
    /// Records in service order. A `null` collection decodes as empty.
    #[serde(deserialize_with = "null_as_empty")]
    pub expressions: Vec<ExpressionRecord>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
