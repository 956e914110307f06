//! Validated newtype wrappers for client options.
//!
//! Each wrapper checks its value on construction so an invalid credential is
//! rejected before a client exists. Secret values are masked in `Debug` output.

use crate::error::ConfigError;
use reqwest::header::HeaderValue;
use std::fmt;

/// Key prefix Quaderno uses for sandbox (test mode) private keys.
const TEST_KEY_PREFIX: &str = "sk_test";

/// Longest label allowed in a host name.
const MAX_LABEL_LEN: usize = 63;

/// URL scheme used to reach the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Plain HTTP, used by the sandbox environment.
    Http,
    /// HTTPS, used by production.
    Https,
}

impl Protocol {
    /// Returns the scheme string without the `://` separator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated Quaderno account name.
///
/// The account name is the subdomain of the account's API host, e.g.
/// `ninive-4990` in `ninive-4990.quadernoapp.com`.
///
/// # Example
///
/// ```rust
/// use quaderno_api::AccountName;
///
/// let account = AccountName::new("ninive-4990").unwrap();
/// assert_eq!(account.as_ref(), "ninive-4990");
/// assert!(AccountName::new("  ").is_err());
/// assert!(AccountName::new("acme/evil?x=").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountName(String);

impl AccountName {
    /// Creates a new validated account name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAccountName`] if the name is empty, or
    /// [`ConfigError::InvalidAccountName`] if it is not a valid DNS label.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::MissingAccountName);
        }
        if !Self::is_valid_label(name) {
            return Err(ConfigError::InvalidAccountName {
                name: name.to_string(),
            });
        }
        Ok(Self(name.to_string()))
    }

    fn is_valid_label(name: &str) -> bool {
        // A single host label: no dots, no leading or trailing hyphen
        if name.len() > MAX_LABEL_LEN || name.starts_with('-') || name.ends_with('-') {
            return false;
        }

        name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    }
}

impl AsRef<str> for AccountName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Quaderno private API key.
///
/// # Security
///
/// The `Debug` implementation masks the key, displaying only
/// `PrivateApiKey(*****)`.
///
/// # Example
///
/// ```rust
/// use quaderno_api::PrivateApiKey;
///
/// let key = PrivateApiKey::new("sk_test_WbnSHMkci7Czxj9f1Jc8").unwrap();
/// assert!(key.is_test_key());
/// assert_eq!(format!("{:?}", key), "PrivateApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateApiKey(String);

impl PrivateApiKey {
    /// Creates a new validated private API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingPrivateApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::MissingPrivateApiKey);
        }
        Ok(Self(key))
    }

    /// Returns `true` if this is a sandbox (test mode) key.
    ///
    /// Test keys start with `sk_test`; every other key targets production.
    #[must_use]
    pub fn is_test_key(&self) -> bool {
        self.0.starts_with(TEST_KEY_PREFIX)
    }
}

impl AsRef<str> for PrivateApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PrivateApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateApiKey(*****)")
    }
}

/// A validated OAuth access token.
///
/// The `Debug` implementation masks the token.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidToken`] if the token is empty or
    /// contains characters that cannot appear in an HTTP header.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::InvalidToken);
        }
        HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| ConfigError::InvalidToken)?;
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated API host override, such as a proxy or a local mock server.
///
/// Only the scheme and authority (`host[:port]`) are kept; any path, query or
/// fragment in the input is ignored.
///
/// # Example
///
/// ```rust
/// use quaderno_api::{ApiHost, Protocol};
///
/// let host = ApiHost::new("http://127.0.0.1:8080/ignored").unwrap();
/// assert_eq!(host.protocol(), Protocol::Http);
/// assert_eq!(host.authority(), "127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiHost {
    protocol: Protocol,
    authority: String,
}

impl ApiHost {
    /// Creates a new validated host override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiHost`] if the URL has no `http` or
    /// `https` scheme, or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim();
        let invalid = || ConfigError::InvalidApiHost {
            url: url.to_string(),
        };

        let (scheme, remainder) = url.split_once("://").ok_or_else(invalid)?;
        let protocol = match scheme.to_ascii_lowercase().as_str() {
            "http" => Protocol::Http,
            "https" => Protocol::Https,
            _ => return Err(invalid()),
        };

        let authority_end = remainder.find(['/', '?', '#']).unwrap_or(remainder.len());
        let authority = &remainder[..authority_end];
        if authority.is_empty() || authority.starts_with(':') {
            return Err(invalid());
        }

        Ok(Self {
            protocol,
            authority: authority.to_string(),
        })
    }

    /// Returns the scheme of the override.
    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Returns `host[:port]`.
    #[must_use]
    pub fn authority(&self) -> &str {
        &self.authority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_name_rejects_empty_string() {
        assert!(matches!(
            AccountName::new(""),
            Err(ConfigError::MissingAccountName)
        ));
        assert!(matches!(
            AccountName::new("   "),
            Err(ConfigError::MissingAccountName)
        ));
    }

    #[test]
    fn test_account_name_is_trimmed() {
        let account = AccountName::new(" acme ").unwrap();
        assert_eq!(account.as_ref(), "acme");
    }

    #[test]
    fn test_account_name_must_be_a_dns_label() {
        assert!(AccountName::new("ninive-4990").is_ok());
        assert!(AccountName::new("Acme2").is_ok());

        for name in ["acme/evil?x=", "acme.other", "-acme", "acme-", "ac me", "acmé"] {
            assert!(
                matches!(
                    AccountName::new(name),
                    Err(ConfigError::InvalidAccountName { .. })
                ),
                "{name} should be rejected"
            );
        }
        assert!(AccountName::new("a".repeat(64)).is_err());
        assert!(AccountName::new("a".repeat(63)).is_ok());
    }

    #[test]
    fn test_private_api_key_rejects_empty_string() {
        assert!(matches!(
            PrivateApiKey::new(""),
            Err(ConfigError::MissingPrivateApiKey)
        ));
    }

    #[test]
    fn test_private_api_key_detects_test_prefix() {
        assert!(PrivateApiKey::new("sk_test_abc").unwrap().is_test_key());
        assert!(!PrivateApiKey::new("sk_live_abc").unwrap().is_test_key());
        assert!(!PrivateApiKey::new("12345678").unwrap().is_test_key());
        assert!(!PrivateApiKey::new("live_sk_test").unwrap().is_test_key());
    }

    #[test]
    fn test_secrets_are_masked_in_debug() {
        let key = PrivateApiKey::new("sk_live_secret").unwrap();
        let token = AccessToken::new("oauth-secret").unwrap();

        assert!(!format!("{key:?}").contains("sk_live_secret"));
        assert_eq!(format!("{token:?}"), "AccessToken(*****)");
    }

    #[test]
    fn test_access_token_rejects_blank() {
        assert!(matches!(AccessToken::new(""), Err(ConfigError::InvalidToken)));
        assert!(matches!(AccessToken::new(" \t"), Err(ConfigError::InvalidToken)));
    }

    #[test]
    fn test_access_token_rejects_header_breaking_characters() {
        assert!(matches!(
            AccessToken::new("abc\ndef"),
            Err(ConfigError::InvalidToken)
        ));
        assert!(matches!(
            AccessToken::new("abc\r\nX-Injected: 1"),
            Err(ConfigError::InvalidToken)
        ));
        assert!(AccessToken::new("eyJhbGciOi.J9-_abc").is_ok());
    }

    #[test]
    fn test_api_host_parses_scheme_and_authority() {
        let host = ApiHost::new("https://proxy.example.com/api?x=1").unwrap();
        assert_eq!(host.protocol(), Protocol::Https);
        assert_eq!(host.authority(), "proxy.example.com");

        let host = ApiHost::new("HTTP://localhost:3000").unwrap();
        assert_eq!(host.protocol(), Protocol::Http);
        assert_eq!(host.authority(), "localhost:3000");
    }

    #[test]
    fn test_api_host_rejects_invalid() {
        assert!(ApiHost::new("proxy.example.com").is_err());
        assert!(ApiHost::new("ftp://proxy.example.com").is_err());
        assert!(ApiHost::new("https://").is_err());
        assert!(ApiHost::new("https://:8080").is_err());
    }

    #[test]
    fn test_protocol_display() {
        assert_eq!(Protocol::Http.to_string(), "http");
        assert_eq!(Protocol::Https.to_string(), "https");
    }
}
