//! Item Store
//!
//! In-memory owner of the task list. Lookups are linear scans by id and the
//! list keeps insertion order.

use crate::error::{TodoError, TodoResult};
use crate::models::{FilterMode, Item, ItemId, SeedItem};

/// Supplies identifiers for new items
pub trait IdSource: Send + Sync {
    fn next_id(&mut self) -> ItemId;
}

/// Random UUID v4 identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> ItemId {
        ItemId::new_v4()
    }
}

#[derive(Debug, Default)]
pub struct TodoStore<I = UuidIds> {
    items: Vec<Item>,
    ids: I,
}

impl TodoStore {
    pub fn with_seed(seed: &[SeedItem]) -> Self {
        Self::with_ids(UuidIds, seed)
    }
}

impl<I: IdSource> TodoStore<I> {
    pub fn with_ids(ids: I, seed: &[SeedItem]) -> Self {
        let mut store = Self { items: Vec::with_capacity(seed.len()), ids };
        for entry in seed {
            let id = store.fresh_id();
            store.items.push(Item {
                id,
                content: entry.content.clone(),
                completed: entry.completed,
            });
        }
        store
    }

    #[cfg(test)]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Items selected by `mode`, in insertion order
    pub fn list_by_filter(&self, mode: FilterMode) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(move |item| mode.matches(item))
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn get(&self, id: ItemId) -> TodoResult<Item> {
        self.index_of(id)
            .map(|index| self.items[index].clone())
            .ok_or(TodoError::NotFound(id))
    }

    /// Append a new, not yet completed item
    pub fn add(&mut self, content: impl Into<String>) -> ItemId {
        let id = self.fresh_id();
        self.items.push(Item::new(id, content));
        tracing::debug!(%id, len = self.items.len(), "item added");
        id
    }

    /// Next id from the source that is not already stored
    fn fresh_id(&mut self) -> ItemId {
        let mut id = self.ids.next_id();
        while self.index_of(id).is_some() {
            tracing::warn!(%id, "id source repeated an existing id, drawing another");
            id = self.ids.next_id();
        }
        id
    }

    /// Unknown ids leave the list untouched
    pub fn delete(&mut self, id: ItemId) -> Option<Item> {
        let index = self.index_of(id)?;
        let removed = self.items.remove(index);
        tracing::debug!(%id, len = self.items.len(), "item deleted");
        Some(removed)
    }

    /// Copy `content` and `completed` onto the stored item with the same id
    pub fn update(&mut self, item: Item) -> bool {
        let Some(index) = self.index_of(item.id) else {
            return false;
        };
        let stored = &mut self.items[index];
        stored.content = item.content;
        stored.completed = item.completed;
        tracing::debug!(id = %item.id, completed = stored.completed, "item updated");
        true
    }
}
