//! Shared primitive IDs and counters.

/// User-assigned component identifier, unique within the inventory.
pub type ComponentId = i32;
/// Units in stock.
pub type Quantity = u32;
