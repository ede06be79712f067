//! Typed facade over the remote procedures.
//!
//! Every operation builds a fresh parameter mapping, stamps the common
//! parameters, signs it, issues one HTTP call and hydrates the result. A
//! client error from the service comes back as `Ok(None)` (or `Ok(false)` for
//! acknowledgements); only fatal conditions are `Err`.

use crate::core::errors::TeamCowboyError;
use crate::core::hydrate::{hydrate, hydrate_flag, hydrate_list, Resource};
use crate::core::kernel::{
    generate_nonce, unix_timestamp, CallOutcome, ReqwestRest, RequestKind, RequestParams,
    RestClient, Signer, API_KEY, METHOD_KEY, NONCE_KEY, RESPONSE_TYPE_KEY, TIMESTAMP_KEY,
    USER_TOKEN_KEY,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

pub mod auth;
pub mod builder;
pub mod connectivity;
pub mod events;
pub mod messages;
pub mod queries;
pub mod teams;
pub mod users;

pub use builder::TeamCowboyBuilder;
pub use queries::{
    EventQuery, MessageQuery, MessageSaveOptions, NextEventQuery, RosterQuery, RsvpStatus,
    SaveRsvpOptions, SortDirection, TeamEventsQuery, TeamMessagesQuery, UserEventsQuery,
    UserMessagesQuery, UserTeamsQuery,
};

/// Whether a procedure runs on behalf of a logged-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    /// Public key only
    Public,
    /// Also carries `userToken`
    User,
}

/// Team Cowboy API client
///
/// Holds no mutable state between calls apart from the user token obtained at
/// login, so a shared reference can issue concurrent requests.
pub struct TeamCowboy<R: RestClient = ReqwestRest> {
    rest: R,
    signer: Arc<dyn Signer>,
    public_key: String,
    user_token: Option<String>,
}

impl<R: RestClient> fmt::Debug for TeamCowboy<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TeamCowboy")
            .field("public_key", &self.public_key)
            .field("user_token", &self.user_token.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl TeamCowboy<ReqwestRest> {
    /// Build a client from configuration, logging in when user credentials
    /// are configured
    pub async fn connect(
        config: crate::core::config::ClientConfig,
    ) -> Result<Self, TeamCowboyError> {
        TeamCowboyBuilder::new().with_config(config).connect().await
    }
}

impl<R: RestClient> TeamCowboy<R> {
    /// Assemble a client from an existing transport and signer
    pub fn new(rest: R, signer: Arc<dyn Signer>, public_key: impl Into<String>) -> Self {
        Self {
            rest,
            signer,
            public_key: public_key.into(),
            user_token: None,
        }
    }

    /// Use a previously obtained user token instead of logging in
    #[must_use]
    pub fn with_user_token(mut self, token: impl Into<String>) -> Self {
        self.user_token = Some(token.into());
        self
    }

    pub fn user_token(&self) -> Option<&str> {
        self.user_token.as_deref()
    }

    pub fn has_user_token(&self) -> bool {
        self.user_token.is_some()
    }

    pub fn rest(&self) -> &R {
        &self.rest
    }

    /// Stamp, sign and send one call
    #[instrument(skip(self, kind, params), fields(kind = %kind))]
    async fn call(
        &self,
        kind: RequestKind,
        method: &str,
        mut params: RequestParams,
        access: Access,
    ) -> Result<CallOutcome, TeamCowboyError> {
        params.insert(API_KEY, self.public_key.as_str());
        params.insert(METHOD_KEY, method);
        params.insert(TIMESTAMP_KEY, unix_timestamp()?);
        params.insert(NONCE_KEY, generate_nonce()?);
        params.insert(RESPONSE_TYPE_KEY, "json");

        if access == Access::User {
            let token = self.user_token.as_deref().ok_or_else(|| {
                TeamCowboyError::AuthError(format!(
                    "{} needs a user token; configure username and password",
                    method
                ))
            })?;
            params.insert(USER_TOKEN_KEY, token);
        }

        self.signer.sign_request(kind, method, &mut params)?;
        debug!(param_count = params.len(), "calling remote method");

        match kind {
            RequestKind::Get => self.rest.get("", &params).await,
            RequestKind::Post => self.rest.post("", &params).await,
        }
    }

    async fn fetch_one<T: Resource>(
        &self,
        kind: RequestKind,
        method: &str,
        params: RequestParams,
        access: Access,
    ) -> Result<Option<T>, TeamCowboyError> {
        self.call(kind, method, params, access)
            .await?
            .into_payload()
            .map_or(Ok(None), hydrate)
    }

    async fn fetch_list<T: Resource>(
        &self,
        kind: RequestKind,
        method: &str,
        params: RequestParams,
        access: Access,
    ) -> Result<Option<Vec<T>>, TeamCowboyError> {
        self.call(kind, method, params, access)
            .await?
            .into_payload()
            .map_or(Ok(None), hydrate_list)
    }

    async fn fetch_flag(
        &self,
        kind: RequestKind,
        method: &str,
        params: RequestParams,
        access: Access,
    ) -> Result<bool, TeamCowboyError> {
        self.call(kind, method, params, access)
            .await?
            .into_payload()
            .map_or(Ok(false), |payload| hydrate_flag(&payload))
    }
}
