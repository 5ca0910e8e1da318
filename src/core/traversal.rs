use std::collections::VecDeque;

use crate::component::ComponentRecord;

use super::store::RecordStore;

/// Short-lived FIFO of borrowed records, rebuilt for every ordered display.
#[derive(Debug, Default)]
pub struct TraversalQueue<'a> {
    entries: VecDeque<&'a ComponentRecord>,
}

impl<'a> TraversalQueue<'a> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Fills a queue oldest-inserted first, the reverse of store order.
    pub fn from_store(store: &'a RecordStore) -> Self {
        let mut queue = Self::new();
        for rec in store.iter().rev() {
            queue.enqueue(rec);
        }
        queue
    }

    pub fn enqueue(&mut self, record: &'a ComponentRecord) {
        self.entries.push_back(record);
    }

    pub fn dequeue(&mut self) -> Option<&'a ComponentRecord> {
        self.entries.pop_front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
