use crate::core::errors::TeamCowboyError;
use crate::core::kernel::params::{
    ParamValue, RequestParams, METHOD_KEY, NONCE_KEY, SIGNATURE_KEY, TIMESTAMP_KEY,
};
use secrecy::{ExposeSecret, Secret};
use sha1::{Digest, Sha1};
use std::fmt;

/// HTTP verb a call is issued with; part of the signed input, never transmitted as a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Get,
    Post,
}

impl RequestKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signer trait for request authentication
///
/// Implementations compute a signature over the outbound parameters and add it
/// to the mapping under [`SIGNATURE_KEY`]. Signing is pure: the same inputs
/// always produce the same signature.
pub trait Signer: Send + Sync {
    /// Sign a request in place
    ///
    /// # Arguments
    /// * `kind` - GET or POST
    /// * `method` - Remote procedure name, e.g. `Event_Get`
    /// * `params` - Outbound parameters, already carrying `timestamp` and `nonce`
    fn sign_request(
        &self,
        kind: RequestKind,
        method: &str,
        params: &mut RequestParams,
    ) -> Result<(), TeamCowboyError>;
}

/// Names carried in the canonical prefix (or never signed) rather than the sorted section
fn is_prefix_or_reserved(name: &str) -> bool {
    matches!(name, METHOD_KEY | TIMESTAMP_KEY | NONCE_KEY | SIGNATURE_KEY)
}

/// Build the exact string that is hashed for a request:
/// `secret|KIND|method|timestamp|nonce|` followed by the remaining parameters
/// as lower-cased `name=value` pairs, sorted by name and joined with `&`.
pub fn canonical_string(
    secret: &str,
    kind: RequestKind,
    method: &str,
    params: &RequestParams,
) -> Result<String, TeamCowboyError> {
    let timestamp = params.require(TIMESTAMP_KEY)?;
    let nonce = params.require(NONCE_KEY)?;
    if method.is_empty() {
        return Err(TeamCowboyError::InvalidArgument(
            "remote method name must not be empty".to_string(),
        ));
    }

    let mut remaining: Vec<(String, &ParamValue)> = params
        .iter()
        .filter(|(name, _)| !is_prefix_or_reserved(name))
        .map(|(name, value)| (name.to_lowercase(), value))
        .collect();
    remaining.sort_by(|a, b| a.0.cmp(&b.0));

    let pairs = remaining
        .iter()
        .map(|(name, value)| format!("{}={}", name, value.canonical()))
        .collect::<Vec<_>>()
        .join("&");

    Ok(format!(
        "{}|{}|{}|{}|{}|{}",
        secret,
        kind.as_str(),
        method,
        timestamp,
        nonce,
        pairs
    ))
}

/// SHA-1 hex digest of the canonical string
pub fn compute_signature(
    secret: &str,
    kind: RequestKind,
    method: &str,
    params: &RequestParams,
) -> Result<String, TeamCowboyError> {
    let input = canonical_string(secret, kind, method, params)?;
    let mut hasher = Sha1::new();
    hasher.update(input.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Signer keyed by the account's private API key
pub struct Sha1Signer {
    private_key: Secret<String>,
}

impl Sha1Signer {
    pub fn new(private_key: String) -> Self {
        Self {
            private_key: Secret::new(private_key),
        }
    }
}

impl fmt::Debug for Sha1Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha1Signer").finish_non_exhaustive()
    }
}

impl Signer for Sha1Signer {
    fn sign_request(
        &self,
        kind: RequestKind,
        method: &str,
        params: &mut RequestParams,
    ) -> Result<(), TeamCowboyError> {
        params.remove(SIGNATURE_KEY);
        let signature =
            compute_signature(self.private_key.expose_secret(), kind, method, params)?;
        params.insert(SIGNATURE_KEY, signature);
        Ok(())
    }
}
