//! HTTP client types for Quaderno API communication.
//!
//! # Overview
//!
//! - [`Client`]: the public client with `get`, `post`, `put`, `delete` and
//!   one accessor per resource
//! - [`HttpClient`]: the dispatcher that sends requests and checks statuses
//! - [`RequestDescriptor`]: path and optional ordered query of one request
//! - [`compose_url`]: joins the base URL and a request into an absolute URL
//! - [`HttpError`], [`ApiError`], [`DecodeError`]: failure types
//!
//! # Error Semantics
//!
//! A call succeeds only when the response status equals the status expected
//! for its verb. Any other well-formed JSON response becomes
//! [`HttpError::Api`] carrying the decoded body. Network failures and bodies
//! that are not JSON are reported as [`HttpError::Transport`] and
//! [`HttpError::Decode`]. Nothing is retried.

mod client;
mod errors;
mod http_client;
mod http_request;
mod url;

pub use client::{Client, CREATED, NO_CONTENT, OK, UPDATED};
pub use errors::{ApiError, DecodeError, HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, Query, RequestDescriptor};
pub use url::compose_url;
