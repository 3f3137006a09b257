use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, Entity, ValueObject};

/// Maximum product name length, in UTF-16 code units (inclusive).
pub const MAX_NAME_LEN: usize = 120;

/// Product identifier. Assigned by the store, always positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// First id handed out by an empty store.
    pub const FIRST: ProductId = ProductId(1);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The id following this one, or `None` once the id space is exhausted.
    pub fn next(self) -> Option<ProductId> {
        self.0.checked_add(1).map(ProductId)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = u64::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Ok(Self(raw))
    }
}

/// Unit price. Only constructible with a value strictly greater than zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Price(Decimal);

impl Price {
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::validation("price must be greater than zero"));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl ValueObject for Price {}

/// Unvalidated create/update input.
///
/// Every field is optional so that a missing field is reported by `validate`
/// alongside the other rule violations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            price: Some(price),
        }
    }

    /// Check every field rule and report all violations at once.
    pub fn validate(&self) -> DomainResult<ValidProduct> {
        let mut violations: Vec<String> = Vec::new();

        let name = match self.name.as_deref() {
            None => {
                violations.push("name is required".to_string());
                None
            }
            Some(n) if n.trim().is_empty() => {
                violations.push("name is required".to_string());
                None
            }
            Some(n) if n.encode_utf16().count() > MAX_NAME_LEN => {
                violations.push(format!("name must be at most {MAX_NAME_LEN} characters"));
                None
            }
            Some(n) => Some(n.to_string()),
        };

        let description = match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => Some(d.to_string()),
            _ => {
                violations.push("description is required".to_string());
                None
            }
        };

        let price = match self.price {
            None => {
                violations.push("price is required".to_string());
                None
            }
            Some(p) => match Price::new(p) {
                Ok(p) => Some(p),
                Err(DomainError::Validation(msg)) => {
                    violations.push(msg);
                    None
                }
                Err(e) => return Err(e),
            },
        };

        match (name, description, price) {
            (Some(name), Some(description), Some(price)) if violations.is_empty() => {
                Ok(ValidProduct {
                    name,
                    description,
                    price,
                })
            }
            _ => Err(DomainError::validation(violations.join("; "))),
        }
    }
}

/// Product fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProduct {
    name: String,
    description: String,
    price: Price,
}

impl ValidProduct {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

/// Catalog entry.
///
/// Only built from a [`ValidProduct`], so every instance satisfies the field
/// rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Price,
}

impl Product {
    pub fn new(id: ProductId, fields: ValidProduct) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
        }
    }

    /// Replace every mutable field. The id is kept.
    pub fn replace(&mut self, fields: ValidProduct) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
