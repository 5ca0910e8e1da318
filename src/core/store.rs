use std::collections::VecDeque;

use crate::{component::ComponentRecord, types::ComponentId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    MissingComponent(ComponentId),
}

/// Newest-first sequence of component records.
///
/// Uniqueness of ids is not indexed; callers scan with [`RecordStore::find_by_id`]
/// before inserting.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: VecDeque<ComponentRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_front(&mut self, record: ComponentRecord) {
        self.records.push_front(record);
    }

    pub fn find_by_id(&self, id: ComponentId) -> Option<&ComponentRecord> {
        self.records.iter().find(|rec| rec.id == id)
    }

    pub fn contains(&self, id: ComponentId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Unlinks the record with `id` and hands ownership back to the caller.
    pub fn remove_record(&mut self, id: ComponentId) -> Result<ComponentRecord, StoreError> {
        let pos = self
            .records
            .iter()
            .position(|rec| rec.id == id)
            .ok_or(StoreError::MissingComponent(id))?;
        self.records
            .remove(pos)
            .ok_or(StoreError::MissingComponent(id))
    }

    /// Head to tail, newest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ComponentRecord> + ExactSizeIterator {
        self.records.iter()
    }

    pub fn ordered_ids(&self) -> Vec<ComponentId> {
        self.records.iter().map(|rec| rec.id).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
