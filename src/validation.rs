use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// A submitted JSON object, field name to value.
pub type Record = Map<String, Value>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No {0} specified.")]
    MissingField(String),
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
    #[error("Invalid id: {0}")]
    MalformedId(String),
}

/// Request bodies declare which of their fields must be present and
/// non-blank before they are deserialized.
pub trait RequiredFields {
    const REQUIRED: &'static [&'static str];
}

/// Check that every field in `required` is present in `record` and, for
/// strings, not blank once trimmed. Stops at the first missing field.
///
/// `null` counts as present. Fields outside `required` are not looked at.
pub fn input_check(record: &Record, required: &[&str]) -> Result<(), ValidationError> {
    for field in required {
        let missing = match record.get(*field) {
            None => true,
            Some(Value::String(value)) => value.trim().is_empty(),
            Some(_) => false,
        };

        if missing {
            return Err(ValidationError::MissingField((*field).to_string()));
        }
    }

    Ok(())
}

/// Validate a JSON body against `T::REQUIRED` and turn it into `T`.
pub fn parse_record<T>(body: Result<Json<Record>, JsonRejection>) -> Result<T, ValidationError>
where
    T: RequiredFields + DeserializeOwned,
{
    let Json(record) = body.map_err(|e| ValidationError::MalformedBody(e.body_text()))?;

    input_check(&record, T::REQUIRED)?;

    serde_json::from_value(Value::Object(record))
        .map_err(|e| ValidationError::MalformedBody(e.to_string()))
}

pub fn path_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ValidationError> {
    path.map(|Path(id)| id)
        .map_err(|e| ValidationError::MalformedId(e.body_text()))
}

/// Accept `true`/`false`, `0`/`1`, or those spelled as strings.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(flag) => Ok(flag),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(D::Error::custom(format!("expected 0 or 1, got {n}"))),
        },
        Value::String(s) => match s.trim() {
            "0" | "false" => Ok(false),
            "1" | "true" => Ok(true),
            other => Err(D::Error::custom(format!("expected a boolean flag, got {other:?}"))),
        },
        other => Err(D::Error::custom(format!("expected a boolean flag, got {other}"))),
    }
}
