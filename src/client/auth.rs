use super::{Access, TeamCowboy};
use crate::core::errors::TeamCowboyError;
use crate::core::hydrate::hydrate;
use crate::core::kernel::{CallOutcome, RequestKind, RequestParams, RestClient};
use crate::types::AuthUser;
use tracing::{info, instrument, warn};

const AUTH_GET_USER_TOKEN: &str = "Auth_GetUserToken";

impl<R: RestClient> TeamCowboy<R> {
    /// Exchange a username and password for a user token
    ///
    /// The token is returned but not kept; see [`TeamCowboy::authenticate`].
    #[instrument(skip(self, password))]
    pub async fn auth_get_user_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AuthUser>, TeamCowboyError> {
        self.fetch_one(
            RequestKind::Post,
            AUTH_GET_USER_TOKEN,
            credentials(username, password),
            Access::Public,
        )
        .await
    }

    /// Log in and keep the resulting token for every later user-scoped call
    ///
    /// Unlike the plain operation, a rejected login is an error here.
    #[instrument(skip(self, password))]
    pub async fn authenticate(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<AuthUser, TeamCowboyError> {
        let outcome = self
            .call(
                RequestKind::Post,
                AUTH_GET_USER_TOKEN,
                credentials(username, password),
                Access::Public,
            )
            .await?;

        let user = match outcome {
            CallOutcome::Success(payload) => hydrate::<AuthUser>(payload)?.ok_or_else(|| {
                TeamCowboyError::AuthError("login response carried no user token".to_string())
            })?,
            CallOutcome::ClientError(err) => {
                warn!(error_code = %err.error_code, "login rejected");
                return Err(TeamCowboyError::AuthError(format!("login rejected: {}", err)));
            }
        };

        info!(user_id = user.user_id, "obtained user token");
        self.user_token = Some(user.token.clone());
        Ok(user)
    }
}

fn credentials(username: &str, password: &str) -> RequestParams {
    RequestParams::new()
        .with("username", username)
        .with("password", password)
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use crate::core::kernel::USER_TOKEN_KEY;
    use serde_json::json;

    #[tokio::test]
    async fn test_auth_get_user_token_posts_credentials() {
        let client = anonymous_client(vec![CallOutcome::Success(
            json!({"userId": 11, "token": "abc123"}),
        )]);
        let user = client
            .auth_get_user_token("pat", "Secret!")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.token, "abc123");

        let call = client.rest().last_call();
        assert_eq!(call.kind, RequestKind::Post);
        assert_eq!(call.param("username").as_deref(), Some("pat"));
        assert_eq!(call.param("password").as_deref(), Some("Secret!"));
        assert!(!call.params.contains(USER_TOKEN_KEY));
        assert!(!client.has_user_token());
    }

    #[tokio::test]
    async fn test_authenticate_keeps_token() {
        let mut client = anonymous_client(vec![CallOutcome::Success(
            json!({"userId": 11, "token": "abc123"}),
        )]);
        client.authenticate("pat", "pw").await.unwrap();
        assert_eq!(client.user_token(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_rejected_login_is_auth_error() {
        let mut client = anonymous_client(vec![not_found()]);
        let err = client.authenticate("pat", "wrong").await.unwrap_err();
        assert!(matches!(err, TeamCowboyError::AuthError(_)));
        assert!(client.user_token().is_none());

        let client = anonymous_client(vec![not_found()]);
        assert!(client.auth_get_user_token("pat", "wrong").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_without_token_is_auth_error() {
        let mut client = anonymous_client(vec![CallOutcome::Success(json!({}))]);
        let err = client.authenticate("pat", "pw").await.unwrap_err();
        assert!(matches!(err, TeamCowboyError::AuthError(_)));
    }
}
