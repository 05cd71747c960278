//! Recognized provisioning variables and the values collected for them.

use crate::domain::ProvisioningContext;

/// Provisioning variable this tool knows how to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProvisioningField {
    Scope,
    SubscriptionId,
}

/// Variable name as published by the catalog, paired with the field it fills.
const RECOGNIZED: &[(&str, ProvisioningField)] = &[
    ("Scope", ProvisioningField::Scope),
    ("SubscriptionId", ProvisioningField::SubscriptionId),
];

impl ProvisioningField {
    /// Resolve a catalog variable name. Unknown names yield `None`.
    pub fn from_variable_name(name: &str) -> Option<Self> {
        RECOGNIZED.iter().find(|(known, _)| *known == name).map(|(_, field)| *field)
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            ProvisioningField::Scope => "Enter the Scope for the Provisioning status",
            ProvisioningField::SubscriptionId => "Enter the Subscription Id",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            ProvisioningField::Scope => "The scope can't be empty",
            ProvisioningField::SubscriptionId => "The subscription id can't be empty",
        }
    }
}

/// Values gathered while walking a SKU's provisioning variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisioningValues {
    scope: Option<String>,
    subscription_id: Option<String>,
}

impl ProvisioningValues {
    pub fn set(&mut self, field: ProvisioningField, value: String) {
        match field {
            ProvisioningField::Scope => self.scope = Some(value),
            ProvisioningField::SubscriptionId => self.subscription_id = Some(value),
        }
    }

    pub fn get(&self, field: ProvisioningField) -> Option<&str> {
        match field {
            ProvisioningField::Scope => self.scope.as_deref(),
            ProvisioningField::SubscriptionId => self.subscription_id.as_deref(),
        }
    }

    /// Build the wire context; anything not collected becomes an empty string.
    pub fn into_context(self, duration: Option<String>) -> ProvisioningContext {
        ProvisioningContext {
            subscription_id: self.subscription_id.unwrap_or_default(),
            scope: self.scope.unwrap_or_default(),
            duration: duration.unwrap_or_default(),
        }
    }
}
