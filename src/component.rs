//! Component record and draft types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ComponentId, Quantity};

/// Default character limit for component names.
pub const MAX_NAME_CHARS: usize = 49;
/// Default character limit for component descriptions.
pub const MAX_DESCRIPTION_CHARS: usize = 99;

/// One electronic component's inventory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// User-assigned identifier.
    pub id: ComponentId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Units in stock.
    pub quantity: Quantity,
    /// Free-text description.
    pub description: String,
}

/// Insert payload collected by the shell before a [`ComponentRecord`] exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDraft {
    /// User-assigned identifier.
    pub id: ComponentId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Units in stock.
    pub quantity: Quantity,
    /// Free-text description.
    pub description: String,
}

impl ComponentDraft {
    /// Truncates name and description to the given character limits.
    pub fn bounded(mut self, name_max: usize, description_max: usize) -> Self {
        truncate_chars(&mut self.name, name_max);
        truncate_chars(&mut self.description, description_max);
        self
    }

    /// Materializes the draft as a record.
    pub fn into_record(self) -> ComponentRecord {
        ComponentRecord {
            id: self.id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            description: self.description,
        }
    }
}

fn truncate_chars(text: &mut String, max: usize) {
    if let Some((idx, _)) = text.char_indices().nth(max) {
        text.truncate(idx);
    }
}
