//! Cart request and created-cart models.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::domain::CatalogItemId;

/// Friendly name stamped on every line item this tool creates.
pub const DEFAULT_FRIENDLY_NAME: &str = "Myofferpurchase";

/// Provisioning values attached to a line item.
///
/// Serializes to exactly `subscriptionId`, `scope` and `duration`; fields that were
/// not collected are sent as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningContext {
    pub subscription_id: String,
    pub scope: String,
    pub duration: String,
}

/// One purchasable entry of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub id: u32,
    pub catalog_item_id: String,
    pub friendly_name: String,
    pub quantity: u32,
    pub billing_cycle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_context: Option<ProvisioningContext>,
}

impl CartLineItem {
    /// Single-quantity line item for the given catalog item.
    pub fn single(catalog_item_id: &CatalogItemId, billing_cycle: impl Into<String>) -> Self {
        Self {
            id: 0,
            catalog_item_id: catalog_item_id.as_str().to_string(),
            friendly_name: DEFAULT_FRIENDLY_NAME.to_string(),
            quantity: 1,
            billing_cycle: billing_cycle.into(),
            provisioning_context: None,
        }
    }

    pub fn with_provisioning_context(mut self, context: Option<ProvisioningContext>) -> Self {
        self.provisioning_context = context;
        self
    }
}

/// Cart submitted to the cart service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub line_items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new(line_items: Vec<CartLineItem>) -> Self {
        Self { line_items }
    }
}

/// Error reported by the service against a single line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItemError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

/// Line item as materialized by the service.
///
/// Fields the service omits, nulls, or shapes unexpectedly are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreatedLineItem {
    pub id: Option<u32>,
    pub catalog_item_id: Option<String>,
    pub friendly_name: Option<String>,
    pub quantity: Option<u32>,
    pub billing_cycle: Option<String>,
    pub provisioning_context: Option<BTreeMap<String, Value>>,
    pub error: Option<CartLineItemError>,
}

impl CreatedLineItem {
    fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            id: field(object, "id"),
            catalog_item_id: field(object, "catalogItemId"),
            friendly_name: field(object, "friendlyName"),
            quantity: field(object, "quantity"),
            billing_cycle: field(object, "billingCycle"),
            provisioning_context: field(object, "provisioningContext"),
            error: field(object, "error"),
        }
    }
}

/// Cart returned by the service after creation.
///
/// The service has already committed the cart once this is received, so
/// parsing never fails on field shape. The body is kept verbatim for display
/// and the typed fields are a best-effort view over it.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedCart {
    pub id: Option<String>,
    pub creation_timestamp: Option<DateTime<Utc>>,
    pub last_modified_timestamp: Option<DateTime<Utc>>,
    pub expiration_timestamp: Option<DateTime<Utc>>,
    pub last_modified_user: Option<String>,
    pub status: Option<String>,
    pub line_items: Vec<CreatedLineItem>,
    raw: Value,
}

impl CreatedCart {
    pub fn from_value(raw: Value) -> Self {
        let mut cart = Self {
            id: None,
            creation_timestamp: None,
            last_modified_timestamp: None,
            expiration_timestamp: None,
            last_modified_user: None,
            status: None,
            line_items: Vec::new(),
            raw: Value::Null,
        };
        if let Some(object) = raw.as_object() {
            cart.id = field(object, "id");
            cart.creation_timestamp = timestamp(object, "creationTimestamp");
            cart.last_modified_timestamp = timestamp(object, "lastModifiedTimestamp");
            cart.expiration_timestamp = timestamp(object, "expirationTimestamp");
            cart.last_modified_user = field(object, "lastModifiedUser");
            cart.status = field(object, "status");
            cart.line_items = object
                .get("lineItems")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(CreatedLineItem::from_value).collect())
                .unwrap_or_default();
        }
        cart.raw = raw;
        cart
    }

    /// Body exactly as the service returned it.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Line items the service flagged with an error.
    pub fn failed_line_items(&self) -> impl Iterator<Item = &CreatedLineItem> {
        self.line_items.iter().filter(|item| item.error.is_some())
    }
}

impl Serialize for CreatedCart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CreatedCart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

fn field<T: DeserializeOwned>(object: &Map<String, Value>, key: &str) -> Option<T> {
    object.get(key).and_then(|value| T::deserialize(value).ok())
}

/// RFC 3339, or an offset-less timestamp read as UTC.
fn timestamp(object: &Map<String, Value>, key: &str) -> Option<DateTime<Utc>> {
    let text = object.get(key)?.as_str()?;
    DateTime::parse_from_rfc3339(text).map(|parsed| parsed.with_timezone(&Utc)).ok().or_else(|| {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    })
}
