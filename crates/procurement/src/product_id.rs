//! Product identifiers.

use core::str::FromStr;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use acme_core::{DomainError, DomainResult, ValueObject};

/// Identifier of an orderable product. Never the nil UUID.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct ProductId(Uuid);

impl ProductId {
    /// Create a new random identifier using the thread-local RNG.
    ///
    /// Prefer [`ProductId::generate`] with a seeded RNG in tests for determinism.
    pub fn new() -> Self {
        Self::generate(&mut rand::rng())
    }

    /// Create a new random (version 4) identifier from the given source.
    ///
    /// The version bits are always set, so the result is never nil.
    pub fn generate<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Wrap an externally supplied identifier.
    pub fn from_uuid(uuid: Uuid) -> DomainResult<Self> {
        if uuid.is_nil() {
            return Err(DomainError::invalid_argument("product id must not be nil"));
        }
        Ok(Self(uuid))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObject for ProductId {}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Uuid> for ProductId {
    type Error = DomainError;

    fn try_from(value: Uuid) -> Result<Self, Self::Error> {
        Self::from_uuid(value)
    }
}

impl From<ProductId> for Uuid {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_argument(format!("ProductId: {e}")))?;
        Self::from_uuid(uuid)
    }
}
