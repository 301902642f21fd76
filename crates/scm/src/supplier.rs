use serde::{Deserialize, Serialize};

use acme_core::{Address, AggregateRoot, DomainError, DomainResult, ValueObject};

/// Supplier identifier, assigned outside this system (e.g. `SUP123`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SupplierId(String);

impl SupplierId {
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                "supplier id must not be blank",
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for SupplierId {}

impl core::fmt::Display for SupplierId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SupplierId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SupplierId> for String {
    fn from(value: SupplierId) -> Self {
        value.0
    }
}

/// Aggregate root: Supplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    address: Address,
}

impl Supplier {
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        address: Address,
    ) -> DomainResult<Self> {
        let id = SupplierId::new(identifier)?;
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                "supplier name must not be blank",
            ));
        }
        Ok(Self { id, name, address })
    }

    pub fn id_typed(&self) -> &SupplierId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl AggregateRoot for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
