//! SKU descriptor returned by the catalog service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const DURATION_ATTRIBUTE: &str = "duration";

/// Reference object describing what a SKU needs before it can be purchased.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuDescriptor {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Names of the dynamic inputs the service needs to activate the purchase.
    #[serde(default)]
    pub provisioning_variables: Option<Vec<String>>,
    #[serde(default)]
    pub dynamic_attributes: Option<Map<String, Value>>,
    #[serde(default)]
    pub supported_billing_cycles: Vec<String>,
}

impl SkuDescriptor {
    /// Provisioning variable names, treating an absent list as empty.
    pub fn provisioning_variables(&self) -> &[String] {
        self.provisioning_variables.as_deref().unwrap_or_default()
    }

    /// Whether the SKU asks for any provisioning input at all.
    pub fn requires_provisioning(&self) -> bool {
        !self.provisioning_variables().is_empty()
    }

    /// Look up a dynamic attribute; JSON `null` counts as absent.
    pub fn dynamic_attribute(&self, name: &str) -> Option<&Value> {
        self.dynamic_attributes.as_ref()?.get(name).filter(|value| !value.is_null())
    }

    /// Term duration advertised by the SKU, if any.
    ///
    /// Non-string values are rendered with their JSON text, unvalidated.
    pub fn duration(&self) -> Option<String> {
        self.dynamic_attribute(DURATION_ATTRIBUTE).map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }

    /// First-in-list billing cycle.
    pub fn default_billing_cycle(&self) -> Option<&str> {
        self.supported_billing_cycles.first().map(String::as_str)
    }
}
