//! Authentication and host resolution.
//!
//! [`BaseUrl`] is computed once from validated [`ClientOptions`] and decides
//! both the `Authorization` header value and the host every request goes to.
//!
//! # Routing
//!
//! | Mode | Auth header | Host |
//! |---|---|---|
//! | Token | `Bearer <token>` | `[sandbox-]quadernoapp.com/api` |
//! | Account | `Basic base64(<key>:x)` | `<account>.[sandbox-]quadernoapp.com/api` |
//!
//! Token mode uses the sandbox when the `sandbox` option is set. Account mode
//! ignores that option and uses the sandbox whenever the private key is a
//! test key (`sk_test...`). Sandbox hosts are reached over plain HTTP.
//!
//! # Example
//!
//! ```rust
//! use quaderno_api::{BaseUrl, ClientOptions, Protocol};
//!
//! let options = ClientOptions::builder()
//!     .account_name("acme")
//!     .private_api_key("sk_test_123")
//!     .build()
//!     .unwrap();
//! let base = BaseUrl::resolve(&options);
//!
//! assert_eq!(base.protocol(), Protocol::Http);
//! assert_eq!(base.hostname(), "acme.sandbox-quadernoapp.com/api");
//! ```

mod base_url;

pub use base_url::{BaseUrl, SERVICE_HOST};
