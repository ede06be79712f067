//! Turning success payloads into typed objects.
//!
//! Every typed response declares a presence field. A payload whose presence
//! field is missing or falsy is a logical "no result" (`Ok(None)`), not an
//! error. Once the presence check passes, the payload must match the typed
//! shape exactly or the call fails with a decode error.

use crate::core::errors::TeamCowboyError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A typed object produced from a response payload
pub trait Resource: DeserializeOwned {
    /// Field whose presence and truthiness confirm a well-formed payload
    const PRESENCE_FIELD: &'static str;
}

/// JSON truthiness: null, false, 0, "", [] and {} are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn is_present<T: Resource>(payload: &Value) -> bool {
    payload.get(T::PRESENCE_FIELD).is_some_and(is_truthy)
}

/// Hydrate a single object, or `None` if the payload does not carry one
pub fn hydrate<T: Resource>(payload: Value) -> Result<Option<T>, TeamCowboyError> {
    if !is_present::<T>(&payload) {
        return Ok(None);
    }

    serde_json::from_value(payload).map(Some).map_err(|e| {
        TeamCowboyError::DecodeError(format!(
            "Failed to hydrate {}: {}",
            std::any::type_name::<T>(),
            e
        ))
    })
}

/// Hydrate a sequence of objects
///
/// A null payload is `None`. Elements lacking the presence field are dropped.
pub fn hydrate_list<T: Resource>(payload: Value) -> Result<Option<Vec<T>>, TeamCowboyError> {
    match payload {
        Value::Null => Ok(None),
        Value::Array(items) => items
            .into_iter()
            .filter(is_present::<T>)
            .map(|item| {
                serde_json::from_value(item).map_err(|e| {
                    TeamCowboyError::DecodeError(format!(
                        "Failed to hydrate {}: {}",
                        std::any::type_name::<T>(),
                        e
                    ))
                })
            })
            .collect::<Result<Vec<T>, _>>()
            .map(Some),
        other => Err(TeamCowboyError::DecodeError(format!(
            "Expected a list payload, got {}",
            kind_of(&other)
        ))),
    }
}

/// Hydrate a boolean acknowledgement such as a delete result
pub fn hydrate_flag(payload: &Value) -> Result<bool, TeamCowboyError> {
    match payload {
        Value::Bool(b) => Ok(*b),
        Value::Null => Ok(false),
        other => Err(TeamCowboyError::DecodeError(format!(
            "Expected a boolean payload, got {}",
            kind_of(other)
        ))),
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Serde helper for optional nested objects.
///
/// - missing field: `None` (needs `#[serde(default)]` on the field)
/// - `null`: `None`
/// - `{}`: `None`. The service sends an empty object instead of `null` for
///   fragments it has no data for, such as an event's `location`,
///   `shirtColors` or `result`, or a roster member's `invite`.
/// - any other value must decode as `T`; a non-empty object missing required
///   fields is an error, not `None`.
pub mod absent {
    use serde::de::{DeserializeOwned, Error};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) if map.is_empty() => Ok(None),
            Some(value) => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
        }
    }
}
