use crate::types::ComponentId;

/// LIFO of ids for records still present in the store, most recent on top.
#[derive(Debug, Default)]
pub struct RecencyStack {
    ids: Vec<ComponentId>,
}

impl RecencyStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: ComponentId) {
        self.ids.push(id);
    }

    pub fn pop(&mut self) -> Option<ComponentId> {
        self.ids.pop()
    }

    pub fn peek(&self) -> Option<ComponentId> {
        self.ids.last().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
