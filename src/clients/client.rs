//! The Quaderno API client.
//!
//! [`Client`] owns the resolved base URL and exposes the four verbs that every
//! resource facade delegates to. Each verb fixes the HTTP method and the single
//! status code that counts as success:
//!
//! | Method | HTTP | Body | Expected status |
//! |---|---|---|---|
//! | [`Client::post`] | POST | required | 201 |
//! | [`Client::get`] | GET | none | 200 |
//! | [`Client::put`] | PUT | required | 201 |
//! | [`Client::delete`] | DELETE | none | 204 |

use std::sync::Arc;

use serde_json::Value;

use crate::auth::BaseUrl;
use crate::clients::{HttpClient, HttpError, HttpMethod, Query, RequestDescriptor};
use crate::config::ClientOptions;
use crate::error::Error;
use crate::rest::{Resource, ResourceKind};

/// Expected status for `POST` requests.
pub const CREATED: u16 = 201;
/// Expected status for `GET` requests.
pub const OK: u16 = 200;
/// Expected status for `PUT` requests.
pub const UPDATED: u16 = 201;
/// Expected status for `DELETE` requests.
pub const NO_CONTENT: u16 = 204;

/// Client for the Quaderno API.
///
/// Cloning is cheap; clones share the same connection pool and base URL.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`. Concurrent calls share only read-only state.
///
/// # Example
///
/// ```rust,ignore
/// use quaderno_api::{Client, ClientOptions};
/// use serde_json::json;
///
/// let options = ClientOptions::builder()
///     .account_name("ninive-4990")
///     .private_api_key("sk_test_WbnSHMkci7Czxj9f1Jc8")
///     .build()?;
/// let client = Client::new(options)?;
///
/// let contact = client
///     .contacts()
///     .create(&json!({"first_name": "Tony", "kind": "person"}))
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    http_client: Arc<HttpClient>,
    options: Arc<ClientOptions>,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a new client from validated options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the HTTP transport cannot be initialized.
    pub fn new(options: ClientOptions) -> Result<Self, Error> {
        let http_client = HttpClient::new(&options)?;
        Ok(Self {
            http_client: Arc::new(http_client),
            options: Arc::new(options),
        })
    }

    /// Returns the options this client was built with.
    #[must_use]
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Returns the resolved base URL.
    #[must_use]
    pub fn base_url(&self) -> &BaseUrl {
        self.http_client.base_url()
    }

    /// Returns the underlying dispatcher.
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Creates a resource at `pathname`. Succeeds only on `201 Created`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, decode or status failures.
    pub async fn post(&self, pathname: &str, body: &Value) -> Result<Value, HttpError> {
        self.http_client
            .dispatch(
                HttpMethod::Post,
                &RequestDescriptor::new(pathname),
                Some(body),
                CREATED,
            )
            .await
    }

    /// Fetches `pathname` with an optional query. Succeeds only on `200 OK`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, decode or status failures.
    pub async fn get(&self, pathname: &str, query: Option<Query>) -> Result<Value, HttpError> {
        let request = RequestDescriptor::new(pathname).with_query(query);
        self.http_client
            .dispatch(HttpMethod::Get, &request, None, OK)
            .await
    }

    /// Updates the resource at `pathname`. Succeeds only on `201`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, decode or status failures.
    pub async fn put(&self, pathname: &str, body: &Value) -> Result<Value, HttpError> {
        self.http_client
            .dispatch(
                HttpMethod::Put,
                &RequestDescriptor::new(pathname),
                Some(body),
                UPDATED,
            )
            .await
    }

    /// Deletes the resource at `pathname`. Succeeds only on `204 No Content`.
    ///
    /// The decoded body is returned, which is `Value::Null` for an empty
    /// response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, decode or status failures. A `200`
    /// response is an [`HttpError::Api`].
    pub async fn delete(&self, pathname: &str) -> Result<Value, HttpError> {
        self.http_client
            .dispatch(
                HttpMethod::Delete,
                &RequestDescriptor::new(pathname),
                None,
                NO_CONTENT,
            )
            .await
    }

    /// Returns the facade for a resource kind.
    #[must_use]
    pub const fn resource(&self, kind: ResourceKind) -> Resource<'_> {
        Resource::new(self, kind)
    }

    /// Contacts (customers and suppliers).
    #[must_use]
    pub const fn contacts(&self) -> Resource<'_> {
        self.resource(ResourceKind::Contacts)
    }

    /// Sales receipts.
    #[must_use]
    pub const fn receipts(&self) -> Resource<'_> {
        self.resource(ResourceKind::Receipts)
    }

    /// Invoices.
    #[must_use]
    pub const fn invoices(&self) -> Resource<'_> {
        self.resource(ResourceKind::Invoices)
    }

    /// Credit notes.
    #[must_use]
    pub const fn credits(&self) -> Resource<'_> {
        self.resource(ResourceKind::Credits)
    }

    /// Expenses.
    #[must_use]
    pub const fn expenses(&self) -> Resource<'_> {
        self.resource(ResourceKind::Expenses)
    }

    /// Estimates.
    #[must_use]
    pub const fn estimates(&self) -> Resource<'_> {
        self.resource(ResourceKind::Estimates)
    }

    /// Recurring documents.
    #[must_use]
    pub const fn recurring(&self) -> Resource<'_> {
        self.resource(ResourceKind::Recurring)
    }

    /// Catalog items.
    #[must_use]
    pub const fn items(&self) -> Resource<'_> {
        self.resource(ResourceKind::Items)
    }

    /// Payments.
    #[must_use]
    pub const fn payments(&self) -> Resource<'_> {
        self.resource(ResourceKind::Payments)
    }

    /// Taxes.
    #[must_use]
    pub const fn taxes(&self) -> Resource<'_> {
        self.resource(ResourceKind::Taxes)
    }

    /// Location evidence.
    #[must_use]
    pub const fn evidence(&self) -> Resource<'_> {
        self.resource(ResourceKind::Evidence)
    }

    /// Webhooks.
    #[must_use]
    pub const fn webhooks(&self) -> Resource<'_> {
        self.resource(ResourceKind::Webhooks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_client() -> Client {
        let options = ClientOptions::builder()
            .account_name("ninive-4990")
            .private_api_key("sk_test_WbnSHMkci7Czxj9f1Jc8")
            .build()
            .unwrap();
        Client::new(options).unwrap()
    }

    #[test]
    fn test_client_resolves_sandbox_host_from_test_key() {
        let client = create_test_client();

        assert!(client.base_url().is_sandbox());
        assert_eq!(
            client.base_url().hostname(),
            "ninive-4990.sandbox-quadernoapp.com/api"
        );
    }

    #[test]
    fn test_clones_share_base_url() {
        let client = create_test_client();
        let clone = client.clone();

        assert_eq!(client.base_url(), clone.base_url());
        assert!(Arc::ptr_eq(&client.http_client, &clone.http_client));
    }

    #[test]
    fn test_accessors_return_matching_kinds() {
        let client = create_test_client();

        assert_eq!(client.contacts().kind(), ResourceKind::Contacts);
        assert_eq!(client.invoices().kind(), ResourceKind::Invoices);
        assert_eq!(client.webhooks().kind(), ResourceKind::Webhooks);
        assert_eq!(client.evidence().kind(), ResourceKind::Evidence);
    }

    #[test]
    fn test_expected_statuses() {
        assert_eq!(CREATED, 201);
        assert_eq!(OK, 200);
        assert_eq!(UPDATED, 201);
        assert_eq!(NO_CONTENT, 204);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
