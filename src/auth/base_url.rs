//! Base URL and auth header resolution.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::config::{ClientOptions, Credentials, Protocol};

/// Production API host, including the API path prefix.
pub const SERVICE_HOST: &str = "quadernoapp.com/api";

const SANDBOX_PREFIX: &str = "sandbox-";

/// Immutable base URL descriptor derived from [`ClientOptions`].
///
/// The auth value travels only in the `Authorization` header and is never
/// part of a composed URL. Its `Debug` output is masked.
#[derive(Clone, PartialEq, Eq)]
pub struct BaseUrl {
    auth_header_value: String,
    protocol: Protocol,
    hostname: String,
}

impl BaseUrl {
    /// Resolves the auth header and target host for the given options.
    ///
    /// This is a pure function of the options and performs no I/O.
    #[must_use]
    pub fn resolve(options: &ClientOptions) -> Self {
        let (auth_header_value, sandbox, account): (String, bool, Option<&str>) =
            match options.credentials() {
                Credentials::Token(token) => (
                    format!("Bearer {}", token.as_ref()),
                    options.sandbox(),
                    None,
                ),
                Credentials::Account {
                    account_name,
                    private_api_key,
                } => (
                    basic_auth(private_api_key.as_ref()),
                    private_api_key.is_test_key(),
                    Some(account_name.as_ref()),
                ),
            };

        let (protocol, hostname) = if let Some(host) = options.api_host() {
            (host.protocol(), format!("{}/api", host.authority()))
        } else {
            let protocol = if sandbox {
                Protocol::Http
            } else {
                Protocol::Https
            };
            let sandbox_prefix = if sandbox { SANDBOX_PREFIX } else { "" };
            let hostname = account.map_or_else(
                || format!("{sandbox_prefix}{SERVICE_HOST}"),
                |account| format!("{account}.{sandbox_prefix}{SERVICE_HOST}"),
            );
            (protocol, hostname)
        };

        Self {
            auth_header_value,
            protocol,
            hostname,
        }
    }

    /// Returns the full `Authorization` header value.
    #[must_use]
    pub fn auth_header_value(&self) -> &str {
        &self.auth_header_value
    }

    /// Returns the scheme requests are sent with.
    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Returns the host, including the `/api` path prefix.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Returns `true` if requests go to a sandbox host.
    #[must_use]
    pub fn is_sandbox(&self) -> bool {
        self.hostname.starts_with(SANDBOX_PREFIX)
            || self.hostname.contains(&format!(".{SANDBOX_PREFIX}{SERVICE_HOST}"))
    }
}

impl fmt::Debug for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseUrl")
            .field("auth_header_value", &"*****")
            .field("protocol", &self.protocol)
            .field("hostname", &self.hostname)
            .finish()
    }
}

fn basic_auth(private_api_key: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{private_api_key}:x")))
}
