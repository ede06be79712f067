use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;
use std::fmt;

pub const DEFAULT_HOSTNAME: &str = "api.teamcowboy.com";
pub const DEFAULT_API_VERSION: &str = "v1";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "teamcowboy-rs/0.1";

/// Client configuration, consumed once when a client is constructed.
pub struct ClientConfig {
    pub hostname: String,
    pub api_version: String,
    pub private_key: Secret<String>,
    pub public_key: String,
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
    /// Full root URL (scheme included) that replaces `https://{hostname}/{api_version}/`.
    pub base_url: Option<String>,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("hostname", &self.hostname)
            .field("api_version", &self.api_version)
            .field("private_key", &"[REDACTED]")
            .field("public_key", &self.public_key)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for ClientConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ClientConfig", 9)?;
        state.serialize_field("hostname", &self.hostname)?;
        state.serialize_field("api_version", &self.api_version)?;
        state.serialize_field("private_key", "[REDACTED]")?;
        state.serialize_field("public_key", &self.public_key)?;
        state.serialize_field("username", &self.username)?;
        state.serialize_field("password", &self.password.as_ref().map(|_| "[REDACTED]"))?;
        state.serialize_field("base_url", &self.base_url)?;
        state.serialize_field("timeout_seconds", &self.timeout_seconds)?;
        state.serialize_field("user_agent", &self.user_agent)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ClientConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ClientConfigHelper {
            #[serde(default = "default_hostname")]
            hostname: String,
            #[serde(default = "default_api_version")]
            api_version: String,
            private_key: String,
            public_key: String,
            #[serde(default)]
            username: Option<String>,
            #[serde(default)]
            password: Option<String>,
            #[serde(default)]
            base_url: Option<String>,
            #[serde(default = "default_timeout_seconds")]
            timeout_seconds: u64,
            #[serde(default = "default_user_agent")]
            user_agent: String,
        }

        let helper = ClientConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            hostname: helper.hostname,
            api_version: helper.api_version,
            private_key: Secret::new(helper.private_key),
            public_key: helper.public_key,
            username: helper.username,
            password: helper.password.map(Secret::new),
            base_url: helper.base_url,
            timeout_seconds: helper.timeout_seconds,
            user_agent: helper.user_agent,
        })
    }
}

fn default_hostname() -> String {
    DEFAULT_HOSTNAME.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

const fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl ClientConfig {
    /// Create a configuration from the API key pair, with default host and version
    #[must_use]
    pub fn new(private_key: String, public_key: String) -> Self {
        Self {
            hostname: default_hostname(),
            api_version: default_api_version(),
            private_key: Secret::new(private_key),
            public_key,
            username: None,
            password: None,
            base_url: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: default_user_agent(),
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_PRIVATE_KEY`
    /// - `{PREFIX}_PUBLIC_KEY`
    /// - `{PREFIX}_USERNAME` and `{PREFIX}_PASSWORD` (optional, enable user login)
    /// - `{PREFIX}_HOSTNAME` (optional, defaults to `api.teamcowboy.com`)
    /// - `{PREFIX}_API_VERSION` (optional, defaults to `v1`)
    /// - `{PREFIX}_BASE_URL` (optional)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let prefix = prefix.to_uppercase();
        let private_key_var = format!("{}_PRIVATE_KEY", prefix);
        let public_key_var = format!("{}_PUBLIC_KEY", prefix);

        let private_key = env::var(&private_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(private_key_var))?;
        let public_key = env::var(&public_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(public_key_var))?;

        let mut config = Self::new(private_key, public_key);

        if let Ok(hostname) = env::var(format!("{}_HOSTNAME", prefix)) {
            config.hostname = hostname;
        }
        if let Ok(api_version) = env::var(format!("{}_API_VERSION", prefix)) {
            config.api_version = api_version;
        }
        config.base_url = env::var(format!("{}_BASE_URL", prefix)).ok();

        let username = env::var(format!("{}_USERNAME", prefix)).ok();
        let password = env::var(format!("{}_PASSWORD", prefix)).ok();
        match (username, password) {
            (Some(username), Some(password)) => {
                config = config.credentials(username, password);
            }
            (None, None) => {}
            _ => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "{0}_USERNAME and {0}_PASSWORD must be set together",
                    prefix
                )));
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a `.env` file in the current directory, falling
    /// back to the process environment when the file does not exist
    #[cfg(feature = "env-file")]
    pub fn from_env_file(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(prefix, ".env")
    }

    /// Load configuration from a specific `.env` file path
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(prefix: &str, env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // No file, use whatever the process environment provides
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(prefix)
    }

    /// Set the API host name
    #[must_use]
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    /// Set the API version path segment
    #[must_use]
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set the user credentials exchanged for a user token at construction
    #[must_use]
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(Secret::new(password.into()));
        self
    }

    /// Set custom base URL
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Root URL every call is issued against, always ending in `/`
    pub fn root_url(&self) -> String {
        let root = self.base_url.clone().unwrap_or_else(|| {
            format!(
                "https://{}/{}",
                self.hostname.trim_matches('/'),
                self.api_version.trim_matches('/')
            )
        });

        if root.ends_with('/') {
            root
        } else {
            format!("{}/", root)
        }
    }

    /// Check if this configuration carries user credentials
    #[must_use]
    pub fn has_user_credentials(&self) -> bool {
        self.username.as_deref().is_some_and(|u| !u.is_empty())
            && self
                .password
                .as_ref()
                .is_some_and(|p| !p.expose_secret().is_empty())
    }

    /// Reject configurations that can never sign a request
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.private_key.expose_secret().is_empty() {
            return Err(ConfigError::InvalidConfiguration(
                "private key must not be empty".to_string(),
            ));
        }
        if self.public_key.is_empty() {
            return Err(ConfigError::InvalidConfiguration(
                "public key must not be empty".to_string(),
            ));
        }
        if self.base_url.is_none() && self.hostname.trim_matches('/').is_empty() {
            return Err(ConfigError::InvalidConfiguration(
                "hostname must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Get private key (use carefully - exposes secret)
    pub fn private_key(&self) -> &str {
        self.private_key.expose_secret()
    }

    /// Get password (use carefully - exposes secret)
    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().map(|p| p.expose_secret().as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
