//! HTTP error types for the Quaderno API client.
//!
//! - [`ApiError`]: a well-formed JSON response whose status was not the one
//!   the call expected
//! - [`DecodeError`]: a response whose body is not valid JSON
//! - [`InvalidHttpRequestError`]: a request rejected before it was sent
//! - [`HttpError`]: unified error type for every dispatch failure
//!
//! # Example
//!
//! ```rust,ignore
//! use quaderno_api::HttpError;
//!
//! match client.invoices().create(&invoice).await {
//!     Ok(invoice) => println!("Created: {invoice}"),
//!     Err(HttpError::Api(e)) => println!("Rejected with {}: {}", e.status(), e.body()),
//!     Err(HttpError::Transport(e)) => println!("Network error: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

/// Error returned when the API answers with an unexpected status code.
///
/// The decoded response body is kept verbatim. Its shape belongs to the
/// service and is not interpreted here.
///
/// # Example
///
/// ```rust
/// use quaderno_api::ApiError;
/// use serde_json::json;
///
/// let error = ApiError::new(422, json!({"errors": ["Contact can't be blank"]}));
/// assert_eq!(error.status(), 422);
/// assert_eq!(error.body(), &json!({"errors": ["Contact can't be blank"]}));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Quaderno API responded with status {status}: {body}")]
pub struct ApiError {
    status: u16,
    body: Value,
}

impl ApiError {
    /// Wraps a decoded error response body.
    #[must_use]
    pub const fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Returns the HTTP status code of the response.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the decoded response body exactly as received.
    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    /// Consumes the error and returns the response body.
    #[must_use]
    pub fn into_body(self) -> Value {
        self.body
    }

    /// Returns the `errors` member of the body, if the service sent one.
    #[must_use]
    pub fn errors(&self) -> Option<&Value> {
        self.body.get("errors")
    }
}

/// Error returned when a response body is not valid JSON.
#[derive(Debug, Error)]
#[error("Failed to decode response body (status {status}): {source}")]
pub struct DecodeError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The raw response body.
    pub body: String,
    /// The underlying JSON error.
    #[source]
    pub source: serde_json::Error,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all request failures.
///
/// `Api` is reserved for well-formed responses with the wrong status.
/// Connection failures and undecodable bodies have their own variants and are
/// never reported as `Api`.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API answered with an unexpected status code.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Network or connection error before a response was received.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not valid JSON.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl HttpError {
    /// Returns the API error if this is one.
    #[must_use]
    pub const fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}
