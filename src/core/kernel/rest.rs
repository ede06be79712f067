use crate::core::config::ClientConfig;
use crate::core::errors::TeamCowboyError;
use crate::core::kernel::envelope::{classify_response, CallOutcome};
use crate::core::kernel::params::RequestParams;
use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use std::time::Duration;
use tracing::{debug, error, instrument, trace, warn};

/// Transport adapter: one HTTP call in, one classified outcome out
///
/// Fatal conditions (transport failure, undecodable body, 5xx or unclassified
/// status) are returned as `Err`. A 4xx condition is `Ok(CallOutcome::ClientError)`.
/// Implementations never retry.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Make a GET request
    ///
    /// # Arguments
    /// * `endpoint` - Path below the API root; empty means the root itself
    /// * `query_params` - Signed parameters, sent in the query string
    async fn get(
        &self,
        endpoint: &str,
        query_params: &RequestParams,
    ) -> Result<CallOutcome, TeamCowboyError>;

    /// Make a POST request
    ///
    /// # Arguments
    /// * `endpoint` - Path below the API root; empty means the root itself
    /// * `body` - Signed parameters, sent form-encoded in the request body
    async fn post(
        &self,
        endpoint: &str,
        body: &RequestParams,
    ) -> Result<CallOutcome, TeamCowboyError>;
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Root URL every endpoint is resolved against, ending in `/`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    /// Create a new configuration
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            timeout_seconds: crate::core::config::DEFAULT_TIMEOUT_SECONDS,
            user_agent: crate::core::config::DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Derive the transport settings from a client configuration
    pub fn from_client_config(config: &ClientConfig) -> Self {
        Self::new(config.root_url())
            .with_timeout(config.timeout_seconds)
            .with_user_agent(config.user_agent.clone())
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self { config }
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest, TeamCowboyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| {
                TeamCowboyError::ConfigError(crate::core::config::ConfigError::InvalidConfiguration(
                    format!("Failed to build HTTP client: {}", e),
                ))
            })?;

        Ok(ReqwestRest {
            client,
            config: self.config,
        })
    }
}

/// Implementation of `RestClient` using reqwest
#[derive(Clone, Debug)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
}

impl ReqwestRest {
    /// Create a client with default timeout and user agent
    pub fn new(base_url: String) -> Result<Self, TeamCowboyError> {
        RestClientBuilder::new(RestClientConfig::new(base_url)).build()
    }

    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    /// Build the full URL for an endpoint
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint.trim_start_matches('/'))
    }

    /// Read the response and classify it, logging the completion
    async fn handle_response(
        &self,
        response: Response,
        url: &str,
    ) -> Result<CallOutcome, TeamCowboyError> {
        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            error!(url = %url, status = status.as_u16(), error = %e, "failed to read response body");
            TeamCowboyError::NetworkError(format!("Failed to read response body: {}", e))
        })?;

        trace!("Response body: {}", response_text);

        match classify_response(status, &response_text) {
            Ok(CallOutcome::Success(payload)) => {
                debug!(
                    outcome = "success",
                    status = status.as_u16(),
                    message = status.canonical_reason().unwrap_or_default(),
                    url = %url,
                    "call completed"
                );
                Ok(CallOutcome::Success(payload))
            }
            Ok(CallOutcome::ClientError(api_error)) => {
                warn!(
                    outcome = %api_error.error_code,
                    status = api_error.http_response,
                    message = %api_error.message,
                    url = %url,
                    "call rejected"
                );
                Ok(CallOutcome::ClientError(api_error))
            }
            Err(err) => {
                error!(
                    outcome = "fatal",
                    status = status.as_u16(),
                    message = %err,
                    url = %url,
                    "call failed"
                );
                Err(err)
            }
        }
    }

    #[instrument(skip(self, params), fields(method = %method, url = %self.build_url(endpoint), param_count = params.len()))]
    async fn make_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &RequestParams,
    ) -> Result<CallOutcome, TeamCowboyError> {
        let url = self.build_url(endpoint);
        debug!(url = %url, "issuing request");

        let pairs = params.to_pairs();
        let request = if method == Method::POST {
            self.client.post(&url).form(&pairs)
        } else {
            self.client.request(method, &url).query(&pairs)
        };

        let response = request.send().await.map_err(|e| {
            error!(url = %url, error = %e, "request failed");
            TeamCowboyError::NetworkError(format!("Request failed: {}", e))
        })?;

        self.handle_response(response, &url).await
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    async fn get(
        &self,
        endpoint: &str,
        query_params: &RequestParams,
    ) -> Result<CallOutcome, TeamCowboyError> {
        self.make_request(Method::GET, endpoint, query_params).await
    }

    async fn post(
        &self,
        endpoint: &str,
        body: &RequestParams,
    ) -> Result<CallOutcome, TeamCowboyError> {
        self.make_request(Method::POST, endpoint, body).await
    }
}
