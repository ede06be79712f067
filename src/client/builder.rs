use crate::client::TeamCowboy;
use crate::core::config::ClientConfig;
use crate::core::errors::TeamCowboyError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig, Sha1Signer};
use secrecy::{ExposeSecret, Secret};
use std::sync::Arc;
use tracing::debug;

/// Builder for creating Team Cowboy clients
///
/// `build` only assembles the transport and signer. `connect` also logs in
/// when user credentials are configured and no token was supplied.
#[derive(Debug)]
pub struct TeamCowboyBuilder {
    config: ClientConfig,
    user_token: Option<String>,
}

impl Default for TeamCowboyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamCowboyBuilder {
    /// Create a builder with empty keys and default settings
    pub fn new() -> Self {
        Self {
            config: ClientConfig::new(String::new(), String::new()),
            user_token: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the API key pair
    pub fn with_keys(mut self, private_key: String, public_key: String) -> Self {
        self.config.private_key = Secret::new(private_key);
        self.config.public_key = public_key;
        self
    }

    /// Set the credentials exchanged for a user token by `connect`
    pub fn with_credentials(self, username: &str, password: &str) -> Self {
        Self {
            config: self.config.credentials(username, password),
            ..self
        }
    }

    /// Reuse a token from an earlier session; `connect` then skips the login
    pub fn with_user_token(mut self, token: impl Into<String>) -> Self {
        self.user_token = Some(token.into());
        self
    }

    pub fn with_hostname(self, hostname: &str) -> Self {
        Self {
            config: self.config.hostname(hostname),
            ..self
        }
    }

    pub fn with_api_version(self, api_version: &str) -> Self {
        Self {
            config: self.config.api_version(api_version),
            ..self
        }
    }

    /// Set a full root URL, scheme included
    pub fn with_base_url(self, base_url: &str) -> Self {
        Self {
            config: self.config.base_url(base_url),
            ..self
        }
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_user_agent(self, user_agent: &str) -> Self {
        Self {
            config: self.config.user_agent(user_agent),
            ..self
        }
    }

    /// Build a client without contacting the service
    pub fn build(self) -> Result<TeamCowboy<ReqwestRest>, TeamCowboyError> {
        self.config.validate()?;

        let rest_config = RestClientConfig::from_client_config(&self.config);
        debug!(base_url = %rest_config.base_url, "building client");
        let rest = RestClientBuilder::new(rest_config).build()?;
        let signer = Arc::new(Sha1Signer::new(self.config.private_key().to_string()));

        let client = TeamCowboy::new(rest, signer, self.config.public_key.clone());
        Ok(match self.user_token {
            Some(token) => client.with_user_token(token),
            None => client,
        })
    }

    /// Build a client and log in when credentials are configured
    ///
    /// A rejected login fails construction with an authentication error.
    pub async fn connect(self) -> Result<TeamCowboy<ReqwestRest>, TeamCowboyError> {
        let login = if self.user_token.is_none() && self.config.has_user_credentials() {
            self.config
                .username
                .clone()
                .zip(self.config.password().map(|p| Secret::new(p.to_string())))
        } else {
            None
        };

        let mut client = self.build()?;
        if let Some((username, password)) = login {
            client
                .authenticate(&username, password.expose_secret())
                .await?;
        }
        Ok(client)
    }
}
