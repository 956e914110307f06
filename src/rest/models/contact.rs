//! Contact model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Whether a contact is an individual or a business.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    /// An individual.
    #[default]
    Person,
    /// A business.
    Company,
}

/// A customer or supplier.
///
/// # Example
///
/// ```rust
/// use quaderno_api::rest::models::{Contact, ContactKind};
///
/// let contact = Contact {
///     first_name: Some("Tony".to_string()),
///     last_name: Some("Stark".to_string()),
///     email: Some("tony@tete.te".to_string()),
///     kind: Some(ContactKind::Person),
///     ..Default::default()
/// };
///
/// let json = serde_json::to_value(&contact).unwrap();
/// assert_eq!(json["kind"], "person");
/// assert!(json.get("id").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Contact {
    /// Identifier assigned by the service. Never sent.
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    /// Whether the contact is a person or a company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ContactKind>,
    /// First name, or the company name for companies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name of a person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Person to address at a company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Primary phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_1: Option<String>,
    /// First line of the street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_line_1: Option<String>,
    /// Second line of the street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_line_2: Option<String>,
    /// City or town.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Region, state or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Two-letter country code (ISO 3166-1 alpha-2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Tax identification number, such as a VAT number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// Language for documents sent to the contact (ISO 639-1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Arbitrary key/value pairs stored with the contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_metadata: Option<Map<String, Value>>,
}
