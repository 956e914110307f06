//! Error types for the Quaderno API client.
//!
//! [`ConfigError`] covers everything that can go wrong while building
//! [`ClientOptions`](crate::ClientOptions). It is returned before any network
//! activity happens. [`Error`] unifies configuration and HTTP failures for
//! callers that build a client and call it in the same function.
//!
//! # Example
//!
//! ```rust
//! use quaderno_api::{ClientOptions, ConfigError};
//!
//! let result = ClientOptions::builder().private_api_key("sk_live_123").build();
//! assert!(matches!(result, Err(ConfigError::MissingAccountName)));
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Errors that can occur while configuring the client.
///
/// Each missing or malformed credential has its own variant so callers can
/// tell which option needs fixing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No token was given and the account name is missing or empty.
    #[error("No accountName is provided")]
    MissingAccountName,

    /// No token was given and the private API key is missing or empty.
    #[error("No privateApiKey is provided")]
    MissingPrivateApiKey,

    /// The account name is not a valid DNS label.
    #[error("Invalid accountName '{name}'. Expected letters, digits and inner hyphens only.")]
    InvalidAccountName {
        /// The invalid account name that was provided.
        name: String,
    },

    /// A token was given but it is empty or cannot be sent in a header.
    #[error("Token must be a non-empty string value")]
    InvalidToken,

    /// The request timeout is zero.
    #[error("Timeout must be greater than zero")]
    InvalidTimeout,

    /// Both a token and an account credential pair were given.
    #[error("Provide either a token or an accountName/privateApiKey pair, not both")]
    ConflictingCredentials,

    /// The API host override is not a valid `http` or `https` URL.
    #[error("Invalid API host '{url}'. Expected a URL such as 'https://proxy.example.com'.")]
    InvalidApiHost {
        /// The invalid URL that was provided.
        url: String,
    },
}

/// Any error the client can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid construction options.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A request failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}
