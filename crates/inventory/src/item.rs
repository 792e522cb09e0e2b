use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ValueObject};

/// Where an item is stored: a general area and a spot within it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub general: String,
    pub specific: String,
}

impl ValueObject for Location {}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} / {}", self.general, self.specific)
    }
}

/// Inventory record, keyed by `name`.
///
/// Fields are fixed at creation; an add for an existing name is rejected
/// rather than treated as an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    quantity: i64,
    general_location: String,
    specific_location: String,
    category: String,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        quantity: i64,
        general_location: impl Into<String>,
        specific_location: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            general_location: general_location.into(),
            specific_location: specific_location.into(),
            category: category.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn general_location(&self) -> &str {
        &self.general_location
    }

    pub fn specific_location(&self) -> &str {
        &self.specific_location
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn location(&self) -> Location {
        Location {
            general: self.general_location.clone(),
            specific: self.specific_location.clone(),
        }
    }
}

impl Entity for Item {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }
}
