use chrono::NaiveDateTime;
use rand::Rng;
use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::core::errors::TeamCowboyError;

/// Reserved parameter names shared by every remote call
pub const METHOD_KEY: &str = "method";
pub const TIMESTAMP_KEY: &str = "timestamp";
pub const NONCE_KEY: &str = "nonce";
pub const SIGNATURE_KEY: &str = "sig";
pub const API_KEY: &str = "api_key";
pub const USER_TOKEN_KEY: &str = "userToken";
pub const RESPONSE_TYPE_KEY: &str = "response_type";

/// Wire format for date/time arguments
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single request parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    Bool(bool),
}

impl ParamValue {
    /// Text as it enters the signature: strings lower-cased, numbers and
    /// booleans in their canonical form
    pub fn canonical(&self) -> String {
        match self {
            Self::Text(s) => s.to_lowercase(),
            Self::Int(i) => i.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NaiveDateTime> for ParamValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Text(value.format(DATE_TIME_FORMAT).to_string())
    }
}

/// Parameters for one remote call, keyed by case-sensitive name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    inner: BTreeMap<String, ParamValue>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, returning the previous value under that name
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.inner.insert(name.into(), value.into())
    }

    /// Insert a parameter only when a value is present
    pub fn insert_opt<V: Into<ParamValue>>(&mut self, name: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.inner.insert(name.into(), value.into());
        }
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.inner.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.inner.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.inner.iter()
    }

    /// Name/value pairs as transmitted in a query string or form body
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.inner
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }

    /// Look up a required parameter, failing with an invalid-argument error
    pub fn require(&self, name: &str) -> Result<&ParamValue, TeamCowboyError> {
        self.inner.get(name).ok_or_else(|| {
            TeamCowboyError::InvalidArgument(format!("missing required parameter '{}'", name))
        })
    }
}

impl<K, V> FromIterator<(K, V)> for RequestParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn since_epoch(now: SystemTime) -> Result<Duration, TeamCowboyError> {
    now.duration_since(UNIX_EPOCH)
        .map_err(|e| TeamCowboyError::ClockError(format!("Failed to get timestamp: {}", e)))
}

/// Current Unix time in whole seconds
pub fn unix_timestamp() -> Result<i64, TeamCowboyError> {
    since_epoch(SystemTime::now()).map(|d| d.as_secs() as i64)
}

/// Per-request nonce: microsecond clock reading followed by a random suffix
pub fn generate_nonce() -> Result<String, TeamCowboyError> {
    let micros = since_epoch(SystemTime::now())?.as_micros();
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000);
    Ok(format!("{}{:06}", micros, suffix))
}
