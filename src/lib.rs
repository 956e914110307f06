//! # Quaderno API Rust Client
//!
//! An async client for the Quaderno invoicing and tax API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Validated configuration via [`ClientOptions`] and [`ClientOptionsBuilder`]
//! - Bearer-token or account-credential authentication, with automatic
//!   sandbox routing for test keys
//! - A [`Client`] with `get`, `post`, `put`, and `delete` verbs that each
//!   accept exactly one success status
//! - Resource facades (`client.contacts()`, `client.invoices()`, ...) for CRUD
//! - Typed errors that keep the API's error body verbatim
//!
//! ## Quick Start
//!
//! ```rust
//! use quaderno_api::{Client, ClientOptions};
//!
//! let options = ClientOptions::builder()
//!     .account_name("ninive-4990")
//!     .private_api_key("sk_test_WbnSHMkci7Czxj9f1Jc8")
//!     .build()
//!     .unwrap();
//!
//! let client = Client::new(options).unwrap();
//! assert!(client.base_url().is_sandbox());
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use quaderno_api::rest::models::{Contact, Invoice, InvoiceItem};
//! use quaderno_api::HttpError;
//!
//! let invoice = Invoice {
//!     contact: Some(Contact {
//!         first_name: Some("Tony".to_string()),
//!         last_name: Some("Stark".to_string()),
//!         ..Default::default()
//!     }),
//!     currency: Some("USD".to_string()),
//!     items_attributes: vec![InvoiceItem {
//!         description: Some("Whiskey".to_string()),
//!         quantity: Some("1.0".to_string()),
//!         unit_price: Some("20.0".to_string()),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! match client.invoices().create(&invoice).await {
//!     Ok(created) => println!("Created invoice {}", created["id"]),
//!     Err(HttpError::Api(e)) => println!("Rejected: {}", e.body()),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the auth header and host are resolved once per client
//! - **Fail-fast validation**: invalid options are rejected before any I/O
//! - **Thread-safe**: all client types are `Send + Sync`
//! - **No hidden recovery**: nothing is retried; every failure reaches the caller

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{BaseUrl, SERVICE_HOST};
pub use config::{
    AccessToken, AccountName, ApiHost, ClientOptions, ClientOptionsBuilder, Credentials,
    PrivateApiKey, Protocol,
};
pub use error::{ConfigError, Error};

// Re-export HTTP client types
pub use clients::{
    compose_url, ApiError, Client, DecodeError, HttpClient, HttpError, HttpMethod,
    InvalidHttpRequestError, Query, RequestDescriptor,
};

// Re-export resource types
pub use rest::{Resource, ResourceKind};
