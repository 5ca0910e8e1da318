//! Application state: one record store plus the recency stack over it.

use std::fmt;

use tracing::{debug, warn};

use crate::{
    component::{ComponentDraft, ComponentRecord},
    core::{
        recency::RecencyStack,
        store::{RecordStore, StoreError},
        traversal::TraversalQueue,
    },
    types::ComponentId,
};

/// Recoverable inventory failures. None of them mutate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A record with this id is already present.
    DuplicateId(ComponentId),
    /// The recency stack has nothing to pop.
    EmptyStack,
    /// The popped id is absent from the store.
    RecordNotFound(ComponentId),
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "Error: Component with ID {id} already exists."),
            Self::EmptyStack => f.write_str("Stack is empty. No component to remove."),
            Self::RecordNotFound(_) => f.write_str("Error: Component not found in inventory!"),
        }
    }
}

impl std::error::Error for InventoryError {}

impl From<StoreError> for InventoryError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::MissingComponent(id) => Self::RecordNotFound(id),
        }
    }
}

/// Owns the store and the recency stack for the lifetime of a session.
#[derive(Debug, Default)]
pub struct Inventory {
    store: RecordStore,
    recency: RecencyStack,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends the record and remembers it as the most recent addition.
    pub fn add(&mut self, draft: ComponentDraft) -> Result<(), InventoryError> {
        if self.store.contains(draft.id) {
            warn!(id = draft.id, "rejected duplicate component id");
            return Err(InventoryError::DuplicateId(draft.id));
        }

        let record = draft.into_record();
        let id = record.id;
        self.store.insert_front(record);
        self.recency.push(id);
        debug!(id, size = self.store.len(), "component added");
        Ok(())
    }

    /// Removes the most recently added record still present.
    pub fn remove_last(&mut self) -> Result<ComponentRecord, InventoryError> {
        let id = self.recency.pop().ok_or(InventoryError::EmptyStack)?;
        let removed = self.store.remove_record(id).map_err(|err| {
            warn!(id, "recency stack referenced a component missing from the store");
            InventoryError::from(err)
        })?;
        debug!(id, size = self.store.len(), "component removed");
        Ok(removed)
    }

    /// Builds a fresh oldest-first queue over the current records.
    pub fn ordered_queue(&self) -> TraversalQueue<'_> {
        let queue = TraversalQueue::from_store(&self.store);
        debug!(entries = queue.len(), "traversal queue built");
        queue
    }

    /// Looks up a record by id.
    pub fn get(&self, id: ComponentId) -> Option<&ComponentRecord> {
        self.store.find_by_id(id)
    }

    /// Returns true when a record with `id` is present.
    pub fn contains(&self, id: ComponentId) -> bool {
        self.store.contains(id)
    }

    /// Records newest first.
    pub fn records(&self) -> impl DoubleEndedIterator<Item = &ComponentRecord> + ExactSizeIterator {
        self.store.iter()
    }

    /// Ids newest first.
    pub fn ordered_ids(&self) -> Vec<ComponentId> {
        self.store.ordered_ids()
    }

    /// Id that the next [`Inventory::remove_last`] would target.
    pub fn last_added(&self) -> Option<ComponentId> {
        self.recency.peek()
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Store and stack, for callers that need the raw collections.
    pub fn parts_mut(&mut self) -> (&mut RecordStore, &mut RecencyStack) {
        (&mut self.store, &mut self.recency)
    }
}
