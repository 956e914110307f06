//! HTTP dispatch for Quaderno API communication.
//!
//! This module provides the [`HttpClient`] type, which sends requests with the
//! client's auth header and turns responses into JSON values or typed errors.

use std::collections::HashMap;

use serde_json::Value;

use crate::auth::BaseUrl;
use crate::clients::errors::{ApiError, DecodeError, HttpError};
use crate::clients::http_request::{HttpMethod, RequestDescriptor};
use crate::clients::url::compose_url;
use crate::config::ClientOptions;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

const JSON_CONTENT_TYPE: &str = "application/json";

/// Low-level dispatcher for the Quaderno API.
///
/// The client handles:
/// - Base URL and auth resolution, once, at construction
/// - Default headers (`Authorization`, `Content-Type`, `Accept`, `User-Agent`)
/// - JSON decoding of every response body, success or not
/// - Comparing the response status to the single expected status
///
/// It never retries. Each call is independent and carries its own URL and
/// body, so one client can serve many concurrent calls.
///
/// # Example
///
/// ```rust,ignore
/// use quaderno_api::{ClientOptions, HttpClient, HttpMethod, RequestDescriptor};
///
/// let options = ClientOptions::builder().token("tok").build()?;
/// let client = HttpClient::new(&options)?;
///
/// let contacts = client
///     .dispatch(HttpMethod::Get, &RequestDescriptor::new("contacts"), None, 200)
///     .await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Resolved auth header and host.
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new dispatcher for the given options.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the underlying reqwest client cannot
    /// be created (e.g. TLS initialization failure).
    pub fn new(options: &ClientOptions) -> Result<Self, HttpError> {
        let base_url = BaseUrl::resolve(options);
        tracing::debug!(
            protocol = %base_url.protocol(),
            hostname = base_url.hostname(),
            sandbox = base_url.is_sandbox(),
            "Resolved Quaderno API host"
        );

        let user_agent_prefix = options
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Quaderno API Library v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert(
            "Authorization".to_string(),
            base_url.auth_header_value().to_string(),
        );
        default_headers.insert("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string());
        default_headers.insert("Accept".to_string(), JSON_CONTENT_TYPE.to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = options.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url,
            default_headers,
        })
    }

    /// Returns the resolved base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the absolute URL a request would be sent to.
    #[must_use]
    pub fn url(&self, request: &RequestDescriptor) -> String {
        compose_url(&self.base_url, request)
    }

    /// Sends a request and checks the response status.
    ///
    /// The body, when present, is sent as JSON. The response body is decoded
    /// as JSON whatever its status; an empty body decodes to
    /// [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - the request fails validation (`InvalidRequest`)
    /// - the connection fails or times out (`Transport`)
    /// - the body is not valid JSON (`Decode`)
    /// - the status differs from `expected_status` (`Api`)
    pub async fn dispatch(
        &self,
        method: HttpMethod,
        request: &RequestDescriptor,
        body: Option<&Value>,
        expected_status: u16,
    ) -> Result<Value, HttpError> {
        request.verify(method, body.is_some())?;

        let url = self.url(request);
        tracing::debug!(%method, %url, "Dispatching Quaderno API request");

        let mut req_builder = self.client.request(method.into(), url.as_str());
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;
        let status = res.status().as_u16();
        let body_text = res.text().await?;
        let body = decode_body(status, body_text)?;

        if status != expected_status {
            tracing::warn!(
                %method,
                %url,
                status,
                expected_status,
                "Quaderno API request returned an unexpected status"
            );
            return Err(ApiError::new(status, body).into());
        }

        Ok(body)
    }
}

/// Decodes a response body, mapping an empty body to `Value::Null`.
fn decode_body(status: u16, body_text: String) -> Result<Value, DecodeError> {
    if body_text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&body_text).map_err(|source| DecodeError {
        status,
        body: body_text,
        source,
    })
}
