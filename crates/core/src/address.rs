//! Postal address value object.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A postal address. Every field is required and must not be blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: String,
    city: String,
    state_or_region: String,
    postal_code: String,
    country: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        city: impl Into<String>,
        state_or_region: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> DomainResult<Self> {
        Ok(Self {
            street: required("street", street.into())?,
            number: required("number", number.into())?,
            city: required("city", city.into())?,
            state_or_region: required("state_or_region", state_or_region.into())?,
            postal_code: required("postal_code", postal_code.into())?,
            country: required("country", country.into())?,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state_or_region(&self) -> &str {
        &self.state_or_region
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl ValueObject for Address {}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {}, {}, {} {}, {}",
            self.number, self.street, self.city, self.state_or_region, self.postal_code, self.country
        )
    }
}

fn required(field: &str, value: String) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_argument(format!(
            "{field} must not be blank"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metropolis() -> DomainResult<Address> {
        Address::new("123 Main St", "1213", "Metropolis", "NY", "12345", "USA")
    }

    #[test]
    fn builds_with_all_fields() {
        let address = metropolis().unwrap();
        assert_eq!(address.city(), "Metropolis");
        assert_eq!(address.postal_code(), "12345");
        assert_eq!(
            address.to_string(),
            "1213 123 Main St, Metropolis, NY 12345, USA"
        );
    }

    #[test]
    fn rejects_blank_fields() {
        let err = Address::new("123 Main St", "1213", " ", "NY", "12345", "USA").unwrap_err();
        match err {
            DomainError::InvalidArgument(msg) if msg.contains("city") => {}
            other => panic!("Expected InvalidArgument for city, got {other:?}"),
        }
    }
}
