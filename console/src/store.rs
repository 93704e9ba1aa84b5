//! In-memory repositories over the generated collections
//!
//! The console never reaches into shared arrays; every collection lives in
//! an explicit store passed by reference, with the usual CRUD surface.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no record with id {0}")]
    NotFound(u64),
}

/// Anything held by a store exposes a stable numeric id.
pub trait Record {
    fn record_id(&self) -> u64;
}

impl Record for generator::Resident {
    fn record_id(&self) -> u64 {
        self.id.0
    }
}

impl Record for generator::Household {
    fn record_id(&self) -> u64 {
        self.id.0
    }
}

/// Insertion-ordered record store keyed by id.
#[derive(Debug, Clone)]
pub struct Store<T: Record> {
    items: Vec<T>,
}

impl<T: Record> Store<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.items.iter().find(|item| item.record_id() == id)
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Replace the record with the same id.
    pub fn update(&mut self, item: T) -> Result<(), StoreError> {
        let id = item.record_id();
        match self.items.iter_mut().find(|i| i.record_id() == id) {
            Some(slot) => {
                *slot = item;
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    /// Remove and return the record with the given id.
    pub fn remove(&mut self, id: u64) -> Result<T, StoreError> {
        match self.items.iter().position(|i| i.record_id() == id) {
            Some(pos) => Ok(self.items.remove(pos)),
            None => Err(StoreError::NotFound(id)),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Record> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Card {
        id: u64,
        holder: String,
    }

    impl Record for Card {
        fn record_id(&self) -> u64 {
            self.id
        }
    }

    fn card(id: u64, holder: &str) -> Card {
        Card {
            id,
            holder: holder.to_string(),
        }
    }

    #[test]
    fn test_add_and_get() {
        let mut store = Store::new();
        store.add(card(1, "张敏"));
        store.add(card(2, "李强"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(2).unwrap().holder, "李强");
        assert!(store.get(3).is_none());
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut store = Store::from_items(vec![card(1, "张敏"), card(2, "李强")]);
        store.update(card(1, "张伟")).unwrap();

        assert_eq!(store.get(1).unwrap().holder, "张伟");
        // Insertion order preserved
        assert_eq!(store.list()[0].id, 1);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut store: Store<Card> = Store::new();
        assert_eq!(store.update(card(9, "王芳")), Err(StoreError::NotFound(9)));
    }

    #[test]
    fn test_remove_returns_the_record() {
        let mut store = Store::from_items(vec![card(1, "张敏"), card(2, "李强")]);
        let removed = store.remove(1).unwrap();
        assert_eq!(removed.holder, "张敏");
        assert_eq!(store.len(), 1);
        assert_eq!(store.remove(1), Err(StoreError::NotFound(1)));
    }
}
