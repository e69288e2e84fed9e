//! Validated document type.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, InvalidInputError, StoreError};
use crate::types::RecordId;

use super::timestamp;

/// A stored document.
///
/// This type guarantees that:
/// - The value is a JSON object
/// - The object carries a string `id` that is a valid [`RecordId`]
/// - The object carries an RFC 3339 `created` timestamp
///
/// Beyond that a record is schema-agnostic; filters and sorts address its
/// top-level fields by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    created: DateTime<Utc>,
    value: Value,
}

impl Record {
    /// Create a record from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an object or lacks a valid `id` or
    /// `created` field.
    pub fn new(value: Value) -> Result<Self, Error> {
        let obj = value.as_object().ok_or_else(|| invalid("record must be a JSON object"))?;

        let id = obj
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid("record must contain a string id field"))?;
        let id = RecordId::new(id)?;

        let created = obj
            .get("created")
            .and_then(Value::as_str)
            .and_then(timestamp::parse)
            .ok_or_else(|| invalid("record must contain an RFC 3339 created field"))?;

        Ok(Self { id, created, value })
    }

    /// Serialize a typed model into a record.
    pub fn from_model<T: Serialize>(model: &T) -> Result<Self, Error> {
        let value = serde_json::to_value(model).map_err(|e| StoreError::Serialization {
            message: e.to_string(),
        })?;
        Self::new(value)
    }

    /// Decode this record into a typed model.
    pub fn to_model<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_value(self.value.clone()).map_err(|e| {
            StoreError::Corrupt {
                id: self.id.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn created(&self) -> &DateTime<Utc> {
        &self.created
    }

    /// Get a top-level field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.value.get(field)
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

fn invalid(reason: &str) -> Error {
    Error::InvalidInput(InvalidInputError::Record {
        reason: reason.to_string(),
    })
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Record::new(value).map_err(serde::de::Error::custom)
    }
}
