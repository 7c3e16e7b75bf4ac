use std::collections::HashMap;
use std::fmt;

use chrono::{
    DateTime,
    Utc,
};
use serde::de::Error;
use serde::{
    Deserialize,
    Deserializer,
};

/// A document event as the store pushes it to the function endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct DocumentEvent {
    pub context: EventContext,
    pub data: DocumentChange,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventContext {
    pub event_id: String,
    pub event_type: String,
    pub timestamp: Option<DateTime<Utc>>,
}

/// The state of the document after (`value`) and before (`old_value`) the
/// change. A creation has no previous state.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentChange {
    #[serde(default, deserialize_with = "empty_object_as_none")]
    pub value: Option<Document>,
    #[serde(default, deserialize_with = "empty_object_as_none")]
    pub old_value: Option<Document>,
}

/// The store sends `{}` rather than `null` for a missing document.
fn empty_object_as_none<'de, D>(deserializer: D) -> Result<Option<Document>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(serde_json::Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Full resource name:
    /// `projects/{project}/databases/{database}/documents/{path}`.
    pub name: String,
    #[serde(default)]
    pub fields: HashMap<String, FieldValue>,
    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl Document {
    const DOCUMENTS_MARKER: &'static str = "/documents/";

    /// The path of the document relative to the database root,
    /// e.g. `admins/u1`.
    pub fn relative_path(&self) -> &str {
        match self.name.find(Self::DOCUMENTS_MARKER) {
            Some(index) => &self.name[index + Self::DOCUMENTS_MARKER.len()..],
            None => self.name.trim_start_matches('/'),
        }
    }

    /// The last segment of the path: the key the store assigned.
    pub fn id(&self) -> &str {
        self.relative_path().rsplit('/').next().unwrap_or_default()
    }

    pub fn field_text(&self, field: &str) -> Option<String> {
        self.fields.get(field).and_then(FieldValue::as_text)
    }
}

/// A typed value in the store's JSON encoding, e.g. `{"stringValue": "Alice"}`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum FieldValue {
    NullValue(()),
    BooleanValue(bool),
    /// 64-bit integers travel as decimal strings.
    IntegerValue(String),
    /// A JSON number, or `"NaN"`, `"Infinity"`, `"-Infinity"`.
    DoubleValue(#[serde(deserialize_with = "double_from_number_or_literal")] f64),
    TimestampValue(String),
    StringValue(String),
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(serde_json::Value),
    ArrayValue(serde_json::Value),
    MapValue(serde_json::Value),
}

fn double_from_number_or_literal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Encoded {
        Number(f64),
        Literal(String),
    }

    match Encoded::deserialize(deserializer)? {
        Encoded::Number(value) => Ok(value),
        Encoded::Literal(literal) => match literal.as_str() {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            other => Err(D::Error::custom(format!(
                "invalid doubleValue `{}`, expected a number, `NaN`, `Infinity` or `-Infinity`",
                other
            ))),
        },
    }
}

impl FieldValue {
    /// Text rendering of scalar values. Compound values have none.
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::GeoPointValue(_) | FieldValue::ArrayValue(_) | FieldValue::MapValue(_) => {
                None
            }
            scalar => Some(scalar.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::NullValue(()) => write!(f, "null"),
            FieldValue::BooleanValue(value) => write!(f, "{}", value),
            FieldValue::DoubleValue(value) => write!(f, "{}", value),
            FieldValue::IntegerValue(value)
            | FieldValue::TimestampValue(value)
            | FieldValue::StringValue(value)
            | FieldValue::BytesValue(value)
            | FieldValue::ReferenceValue(value) => write!(f, "{}", value),
            FieldValue::GeoPointValue(value)
            | FieldValue::ArrayValue(value)
            | FieldValue::MapValue(value) => write!(f, "{}", value),
        }
    }
}
