//! Environment-driven configuration for the demo binary.

pub const ORDER_NUMBER_ENV: &str = "ACME_ORDER_NUMBER";
pub const SUPPLIER_ID_ENV: &str = "ACME_SUPPLIER_ID";
pub const CURRENCY_ENV: &str = "ACME_CURRENCY";

/// Raw demo settings. Validation happens in the domain constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub order_number: String,
    pub supplier_id: String,
    pub currency: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            order_number: "PO456".to_string(),
            supplier_id: "SUP123".to_string(),
            currency: "USD".to_string(),
        }
    }
}

impl DemoConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str, default: String| {
            lookup(key).unwrap_or_else(|| {
                tracing::warn!(key, default = %default, "not set; using default");
                default
            })
        };

        Self {
            order_number: read(ORDER_NUMBER_ENV, defaults.order_number),
            supplier_id: read(SUPPLIER_ID_ENV, defaults.supplier_id),
            currency: read(CURRENCY_ENV, defaults.currency),
        }
    }
}
