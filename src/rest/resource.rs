//! Resource facades for CRUD operations.
//!
//! Every Quaderno entity type is a [`ResourceKind`] with a fixed path prefix.
//! A [`Resource`] pairs a kind with a borrowed [`Client`] and maps the domain
//! verbs onto the client's generic verbs:
//!
//! | Facade | Client verb | Path |
//! |---|---|---|
//! | `create(body)` | `post` | `<prefix>` |
//! | `list(query)` | `get` | `<prefix>` |
//! | `retrieve(id)` | `get` | `<prefix>/<id>` |
//! | `update(id, body)` | `put` | `<prefix>/<id>` |
//! | `delete(id)` | `delete` | `<prefix>/<id>` |
//!
//! # Example
//!
//! ```rust,ignore
//! use quaderno_api::{Client, ClientOptions};
//!
//! let client = Client::new(ClientOptions::builder().token("tok").build()?)?;
//!
//! let invoices = client
//!     .invoices()
//!     .list(Some(vec![("q".to_string(), "Stark".to_string())]))
//!     .await?;
//! let invoice = client.invoices().retrieve(42).await?;
//! client.contacts().delete(7).await?;
//! ```

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::clients::{Client, HttpError, Query};

/// The closed set of Quaderno resource types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Customers and suppliers.
    Contacts,
    /// Sales receipts.
    Receipts,
    /// Invoices.
    Invoices,
    /// Credit notes.
    Credits,
    /// Expenses.
    Expenses,
    /// Estimates.
    Estimates,
    /// Recurring documents.
    Recurring,
    /// Catalog items.
    Items,
    /// Payments.
    Payments,
    /// Taxes.
    Taxes,
    /// Location evidence.
    Evidence,
    /// Webhooks.
    Webhooks,
}

impl ResourceKind {
    /// Every resource kind.
    pub const ALL: [Self; 12] = [
        Self::Contacts,
        Self::Receipts,
        Self::Invoices,
        Self::Credits,
        Self::Expenses,
        Self::Estimates,
        Self::Recurring,
        Self::Items,
        Self::Payments,
        Self::Taxes,
        Self::Evidence,
        Self::Webhooks,
    ];

    /// Returns the collection path below the API root.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Contacts => "contacts",
            Self::Receipts => "receipts",
            Self::Invoices => "invoices",
            Self::Credits => "credits",
            Self::Expenses => "expenses",
            Self::Estimates => "estimates",
            Self::Recurring => "recurring",
            Self::Items => "items",
            Self::Payments => "payments",
            Self::Taxes => "taxes",
            Self::Evidence => "evidence",
            Self::Webhooks => "webhooks",
        }
    }

    /// Returns the path of a single item, percent-encoding the id as one
    /// path segment.
    #[must_use]
    pub fn item_path(&self, id: impl fmt::Display) -> String {
        format!("{}/{}", self.path(), urlencoding::encode(&id.to_string()))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// CRUD facade for one resource kind.
///
/// Holds a borrowed client and never stores or alters auth state.
#[derive(Clone, Copy, Debug)]
pub struct Resource<'a> {
    client: &'a Client,
    kind: ResourceKind,
}

impl<'a> Resource<'a> {
    /// Creates a facade for `kind` backed by `client`.
    #[must_use]
    pub const fn new(client: &'a Client, kind: ResourceKind) -> Self {
        Self { client, kind }
    }

    /// Returns the resource kind.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Creates a new record. Expects `201`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialize`] if `body` cannot be converted to JSON,
    /// otherwise any error from [`Client::post`].
    pub async fn create<B>(&self, body: &B) -> Result<Value, HttpError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let body = serde_json::to_value(body)?;
        self.client.post(self.kind.path(), &body).await
    }

    /// Lists records, optionally filtered by `query`. Expects `200`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Client::get`].
    pub async fn list(&self, query: Option<Query>) -> Result<Value, HttpError> {
        self.client.get(self.kind.path(), query).await
    }

    /// Fetches one record. Expects `200`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Client::get`].
    pub async fn retrieve<I>(&self, id: I) -> Result<Value, HttpError>
    where
        I: fmt::Display + Send,
    {
        self.client.get(&self.kind.item_path(id), None).await
    }

    /// Updates one record. Expects `201`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialize`] if `body` cannot be converted to JSON,
    /// otherwise any error from [`Client::put`].
    pub async fn update<I, B>(&self, id: I, body: &B) -> Result<Value, HttpError>
    where
        I: fmt::Display + Send,
        B: Serialize + ?Sized + Sync,
    {
        let body = serde_json::to_value(body)?;
        self.client.put(&self.kind.item_path(id), &body).await
    }

    /// Deletes one record. Expects `204`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Client::delete`].
    pub async fn delete<I>(&self, id: I) -> Result<Value, HttpError>
    where
        I: fmt::Display + Send,
    {
        self.client.delete(&self.kind.item_path(id)).await
    }
}
