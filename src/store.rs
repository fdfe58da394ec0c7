//! Record repositories.
//!
//! `Repository` is the seam where a real storage engine would plug in; the
//! only implementation today keeps an ordered in-memory sequence, seeded
//! from fixtures at startup and gone when the process exits.

use uuid::Uuid;

use crate::model::HasId;

/// Identifiers are assigned here, at the repository boundary, so callers
/// never invent their own. Random uuids make ids collision-free even under
/// rapid repeated submits.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

pub trait Repository<T: HasId> {
    fn list(&self) -> &[T];
    fn get(&self, id: &str) -> Option<&T>;
    /// Assigns a fresh id, appends, and returns the id.
    fn insert(&mut self, record: T) -> String;
    /// Full replacement of the record with the same id, in place.
    fn replace(&mut self, record: T) -> bool;
    fn remove(&mut self, id: &str) -> bool;
}

#[derive(Debug)]
pub struct MemStore<T: HasId> {
    records: Vec<T>,
}

impl<T: HasId> MemStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a store from fixture records, assigning each a fresh id.
    pub fn seeded(records: Vec<T>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: HasId> Default for MemStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HasId> Repository<T> for MemStore<T> {
    fn list(&self) -> &[T] {
        &self.records
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn insert(&mut self, mut record: T) -> String {
        let id = new_record_id();
        record.set_id(id.clone());
        self.records.push(record);
        id
    }

    fn replace(&mut self, record: T) -> bool {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.records.len() != before
    }
}
