//! The owned, ordered collection of plant records.
//!
//! Insertion order is significant for display. Removal is index-addressed
//! (0-based) and order-preserving. Each sort exists in two named forms:
//! an in-place variant that reorders the canonical collection and a
//! copy-returning variant that leaves it untouched.

use chrono::NaiveDate;
use thiserror::Error;

use crate::record::PlantRecord;

/// Index out of range for the current collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("index {index} out of range for collection of length {len}")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

/// The ordered sequence of records. Sole owner; records are value-copied
/// out when exposed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantCollection {
    records: Vec<PlantRecord>,
}

impl PlantCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<PlantRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlantRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[PlantRecord] {
        &self.records
    }

    /// Append a record at the end.
    pub fn add(&mut self, record: PlantRecord) {
        self.records.push(record);
    }

    /// Copy out the record at `index`.
    pub fn get(&self, index: usize) -> Result<PlantRecord, IndexError> {
        self.records
            .get(index)
            .cloned()
            .ok_or(IndexError {
                index,
                len: self.records.len(),
            })
    }

    /// Mutable access to the record at `index`. Mutations still go
    /// through the record's validated setters.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut PlantRecord, IndexError> {
        let len = self.records.len();
        self.records
            .get_mut(index)
            .ok_or(IndexError { index, len })
    }

    /// Remove the record at `index`, shifting later records down by one.
    /// On failure the collection is unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<(), IndexError> {
        if index >= self.records.len() {
            return Err(IndexError {
                index,
                len: self.records.len(),
            });
        }
        self.records.remove(index);
        Ok(())
    }

    /// Every record whose next watering date is strictly before
    /// `reference`, in original order. Does not mutate the collection.
    pub fn filter_needing_watering(&self, reference: NaiveDate) -> Vec<PlantRecord> {
        self.records
            .iter()
            .filter(|record| record.needs_watering(reference))
            .cloned()
            .collect()
    }

    /// In-place stable sort by name, ascending, ordinal comparison.
    pub fn sort_by_name(&mut self) {
        self.records.sort_by(|a, b| a.name().cmp(b.name()));
    }

    /// In-place stable sort by last watering date, earliest first.
    pub fn sort_by_last_watered(&mut self) {
        self.records
            .sort_by(|a, b| a.last_watered().cmp(&b.last_watered()));
    }

    /// Name-sorted copy; the owned order is untouched.
    pub fn sorted_by_name(&self) -> Vec<PlantRecord> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| a.name().cmp(b.name()));
        records
    }

    /// Watering-date-sorted copy; the owned order is untouched.
    pub fn sorted_by_last_watered(&self) -> Vec<PlantRecord> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| a.last_watered().cmp(&b.last_watered()));
        records
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
