//! Typed request bodies for common resources.
//!
//! These structs serialize to the JSON the service expects and can be passed
//! to any [`Resource`](crate::rest::Resource) verb that takes a body. Unset
//! optional fields are omitted from the payload, and read-only fields such as
//! `id` are never sent.

mod contact;
mod invoice;

pub use contact::{Contact, ContactKind};
pub use invoice::{Invoice, InvoiceItem};
