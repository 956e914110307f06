//! REST resource layer for the Quaderno API.
//!
//! - [`ResourceKind`]: the closed set of entity types and their paths
//! - [`Resource`]: the CRUD facade for one kind, borrowed from a
//!   [`Client`](crate::Client)
//! - [`models`]: typed request bodies for contacts and invoices

pub mod models;
mod resource;

pub use resource::{Resource, ResourceKind};
