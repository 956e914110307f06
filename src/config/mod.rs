//! Configuration types for the Quaderno API client.
//!
//! # Overview
//!
//! - [`ClientOptions`]: validated, immutable client configuration
//! - [`ClientOptionsBuilder`]: builds and validates [`ClientOptions`]; it can
//!   also be deserialized from a JSON map using the service's option names
//! - [`Credentials`]: the authentication mode chosen at build time
//! - [`AccountName`], [`PrivateApiKey`], [`AccessToken`], [`ApiHost`]:
//!   validated newtypes
//!
//! # Example
//!
//! ```rust
//! use quaderno_api::{ClientOptions, Credentials};
//!
//! let options = ClientOptions::builder()
//!     .account_name("ninive-4990")
//!     .private_api_key("sk_test_WbnSHMkci7Czxj9f1Jc8")
//!     .build()
//!     .unwrap();
//!
//! assert!(matches!(options.credentials(), Credentials::Account { .. }));
//! ```
//!
//! Options can also come from a configuration file:
//!
//! ```rust
//! use quaderno_api::ClientOptionsBuilder;
//!
//! let builder: ClientOptionsBuilder =
//!     serde_json::from_str(r#"{"token": "abc", "sandbox": true}"#).unwrap();
//! let options = builder.build().unwrap();
//! assert!(options.sandbox());
//! ```

mod newtypes;

pub use newtypes::{AccessToken, AccountName, ApiHost, PrivateApiKey, Protocol};

use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::error::ConfigError;

/// How the client authenticates against the API.
///
/// Exactly one mode is active per client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// OAuth bearer token.
    Token(AccessToken),
    /// Account subdomain plus private API key, sent as basic auth.
    Account {
        /// The account subdomain.
        account_name: AccountName,
        /// The account's private API key.
        private_api_key: PrivateApiKey,
    },
}

/// Validated configuration for a [`Client`](crate::Client).
///
/// # Thread Safety
///
/// `ClientOptions` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ClientOptions {
    credentials: Credentials,
    sandbox: bool,
    api_host: Option<ApiHost>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ClientOptions {
    /// Creates a new builder for constructing `ClientOptions`.
    #[must_use]
    pub fn builder() -> ClientOptionsBuilder {
        ClientOptionsBuilder::new()
    }

    /// Returns the authentication mode.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the explicit sandbox flag.
    ///
    /// Only token mode honors this flag. In account mode the sandbox is
    /// inferred from the private key.
    #[must_use]
    pub const fn sandbox(&self) -> bool {
        self.sandbox
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&ApiHost> {
        self.api_host.as_ref()
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ClientOptions is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientOptions>();
};

/// Builder for [`ClientOptions`].
///
/// Set either a `token` or an `account_name`/`private_api_key` pair.
/// Nothing is validated until [`build`](Self::build).
///
/// The builder deserializes from the option names the service documents
/// (`accountName`, `privateApiKey`, `token`, `sandbox`, `apiHost`,
/// `userAgentPrefix`, `timeoutSecs`).
///
/// # Defaults
///
/// - `sandbox`: `false`
/// - `api_host`: `None`
/// - `timeout`: `None` (transport default)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientOptionsBuilder {
    account_name: Option<String>,
    private_api_key: Option<String>,
    token: Option<String>,
    sandbox: bool,
    api_host: Option<String>,
    #[serde(rename = "timeoutSecs", deserialize_with = "deserialize_timeout_secs")]
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ClientOptionsBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account name (account mode).
    #[must_use]
    pub fn account_name(mut self, name: impl Into<String>) -> Self {
        self.account_name = Some(name.into());
        self
    }

    /// Sets the private API key (account mode).
    #[must_use]
    pub fn private_api_key(mut self, key: impl Into<String>) -> Self {
        self.private_api_key = Some(key.into());
        self
    }

    /// Sets the OAuth access token (token mode).
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Routes token-mode requests to the sandbox.
    #[must_use]
    pub const fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Sends all requests to this host instead of the Quaderno host.
    #[must_use]
    pub fn api_host(mut self, url: impl Into<String>) -> Self {
        self.api_host = Some(url.into());
        self
    }

    /// Sets a per-request timeout on the underlying transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Validates the options and builds [`ClientOptions`].
    ///
    /// A token, when present, wins the mode selection and must be non-empty.
    /// Without a token, both the account name and private key are required.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidToken`] if the token is empty
    /// - [`ConfigError::ConflictingCredentials`] if a token and an account
    ///   credential are both set
    /// - [`ConfigError::MissingAccountName`] / [`ConfigError::MissingPrivateApiKey`]
    ///   if account mode is incomplete
    /// - [`ConfigError::InvalidApiHost`] if the host override is malformed
    /// - [`ConfigError::InvalidTimeout`] if the timeout is zero
    pub fn build(self) -> Result<ClientOptions, ConfigError> {
        let credentials = match self.token {
            Some(token) => {
                let token = AccessToken::new(token)?;
                if is_present(self.account_name.as_deref())
                    || is_present(self.private_api_key.as_deref())
                {
                    return Err(ConfigError::ConflictingCredentials);
                }
                Credentials::Token(token)
            }
            None => {
                let account_name =
                    AccountName::new(self.account_name.ok_or(ConfigError::MissingAccountName)?)?;
                let private_api_key = PrivateApiKey::new(
                    self.private_api_key
                        .ok_or(ConfigError::MissingPrivateApiKey)?,
                )?;
                Credentials::Account {
                    account_name,
                    private_api_key,
                }
            }
        };

        let api_host = self.api_host.map(ApiHost::new).transpose()?;

        if self.timeout.map_or(false, |timeout| timeout.is_zero()) {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(ClientOptions {
            credentials,
            sandbox: self.sandbox,
            api_host,
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.map_or(false, |v| !v.trim().is_empty())
}

fn deserialize_timeout_secs<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_account_name() {
        let result = ClientOptions::builder().private_api_key("12345678").build();
        assert!(matches!(result, Err(ConfigError::MissingAccountName)));
    }

    #[test]
    fn test_builder_requires_private_api_key() {
        let result = ClientOptions::builder().account_name("nonce").build();
        assert!(matches!(result, Err(ConfigError::MissingPrivateApiKey)));
    }

    #[test]
    fn test_builder_rejects_empty_account_fields() {
        let result = ClientOptions::builder()
            .account_name("")
            .private_api_key("key")
            .build();
        assert!(matches!(result, Err(ConfigError::MissingAccountName)));

        let result = ClientOptions::builder()
            .account_name("acme")
            .private_api_key("")
            .build();
        assert!(matches!(result, Err(ConfigError::MissingPrivateApiKey)));
    }

    #[test]
    fn test_builder_with_nothing_reports_missing_account_name() {
        let result = ClientOptions::builder().build();
        assert!(matches!(result, Err(ConfigError::MissingAccountName)));
    }

    #[test]
    fn test_builder_rejects_empty_token() {
        let result = ClientOptions::builder().token("").build();
        assert!(matches!(result, Err(ConfigError::InvalidToken)));
    }

    #[test]
    fn test_builder_rejects_token_with_account_credentials() {
        let result = ClientOptions::builder()
            .token("abc")
            .account_name("acme")
            .build();
        assert!(matches!(result, Err(ConfigError::ConflictingCredentials)));
    }

    #[test]
    fn test_builder_ignores_blank_account_fields_in_token_mode() {
        let options = ClientOptions::builder()
            .token("abc")
            .account_name("")
            .build()
            .unwrap();
        assert!(matches!(options.credentials(), Credentials::Token(_)));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let options = ClientOptions::builder().token("abc").build().unwrap();

        assert!(!options.sandbox());
        assert!(options.api_host().is_none());
        assert!(options.timeout().is_none());
        assert!(options.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let options = ClientOptions::builder()
            .account_name("acme")
            .private_api_key("sk_live_1")
            .sandbox(true)
            .api_host("http://127.0.0.1:9000")
            .timeout(Duration::from_secs(30))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert!(options.sandbox());
        assert_eq!(options.api_host().unwrap().authority(), "127.0.0.1:9000");
        assert_eq!(options.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(options.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_builder_keeps_sub_second_timeout() {
        let options = ClientOptions::builder()
            .token("abc")
            .timeout(Duration::from_millis(500))
            .build()
            .unwrap();
        assert_eq!(options.timeout(), Some(Duration::from_millis(500)));

        let options = ClientOptions::builder()
            .token("abc")
            .timeout(Duration::from_millis(1900))
            .build()
            .unwrap();
        assert_eq!(options.timeout(), Some(Duration::from_millis(1900)));
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = ClientOptions::builder()
            .token("abc")
            .timeout(Duration::ZERO)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidTimeout)));
    }

    #[test]
    fn test_builder_rejects_invalid_account_name() {
        let result = ClientOptions::builder()
            .account_name("acme/evil?x=")
            .private_api_key("sk_live_1")
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidAccountName { .. })));
    }

    #[test]
    fn test_builder_rejects_token_unusable_as_header() {
        let result = ClientOptions::builder().token("abc\ndef").build();
        assert!(matches!(result, Err(ConfigError::InvalidToken)));
    }

    #[test]
    fn test_builder_rejects_invalid_api_host() {
        let result = ClientOptions::builder()
            .token("abc")
            .api_host("not a url")
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidApiHost { .. })));
    }

    #[test]
    fn test_builder_deserializes_from_service_option_names() {
        let builder: ClientOptionsBuilder = serde_json::from_value(serde_json::json!({
            "accountName": "ninive-4990",
            "privateApiKey": "sk_test_WbnSHMkci7Czxj9f1Jc8",
            "timeoutSecs": 5
        }))
        .unwrap();
        let options = builder.build().unwrap();

        match options.credentials() {
            Credentials::Account {
                account_name,
                private_api_key,
            } => {
                assert_eq!(account_name.as_ref(), "ninive-4990");
                assert!(private_api_key.is_test_key());
            }
            Credentials::Token(_) => panic!("expected account credentials"),
        }
        assert_eq!(options.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_options_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientOptions>();
    }
}
