//! Invoice model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Contact;

/// A line of an invoice.
///
/// Quantities and amounts are decimal strings, as the service expects.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InvoiceItem {
    /// What is being sold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Number of units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Price of one unit, before tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<String>,
    /// Discount percentage applied to the line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<String>,
    /// Product code or SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Tax category of the line, such as `eservice`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
}

/// An invoice request body.
///
/// `contact` embeds a new contact; `contact_id` references an existing one.
///
/// # Example
///
/// ```rust
/// use quaderno_api::rest::models::{Contact, Invoice, InvoiceItem};
///
/// let invoice = Invoice {
///     contact: Some(Contact {
///         first_name: Some("Tony".to_string()),
///         ..Default::default()
///     }),
///     currency: Some("USD".to_string()),
///     items_attributes: vec![InvoiceItem {
///         description: Some("Whiskey".to_string()),
///         quantity: Some("1.0".to_string()),
///         unit_price: Some("20.0".to_string()),
///         ..Default::default()
///     }],
///     ..Default::default()
/// };
///
/// let json = serde_json::to_value(&invoice).unwrap();
/// assert_eq!(json["items_attributes"][0]["description"], "Whiskey");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Invoice {
    /// Identifier assigned by the service. Never sent.
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    /// New contact to create with the invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    /// Identifier of an existing contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<u64>,
    /// Invoice number. Assigned by the service when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Date of issue, serialized as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
    /// Purchase order number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,
    /// Three-letter currency code (ISO 4217).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Two-letter country code (ISO 3166-1 alpha-2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_list: Option<String>,
    /// Free-form notes printed on the invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Invoice lines. Omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items_attributes: Vec<InvoiceItem>,
    /// Arbitrary key/value pairs stored with the invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_metadata: Option<Map<String, Value>>,
}
