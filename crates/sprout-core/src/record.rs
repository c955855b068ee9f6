//! The plant record and its temporal invariants.
//!
//! A record is always valid or rejected: construction and every validated
//! setter check that the last watering never precedes planting and that
//! the watering frequency is strictly positive. A failed check returns
//! [`PlantError`] and leaves the record untouched.

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Watering frequency applied when none is supplied, or when a stored
/// frequency cannot be parsed.
pub const DEFAULT_FREQUENCY_DAYS: i64 = 7;

/// Errors raised when a record's temporal invariants would be violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlantError {
    #[error("last watering date {watered} precedes planting date {planted}")]
    WateredBeforePlanted {
        watered: NaiveDate,
        planted: NaiveDate,
    },

    #[error("watering frequency must be positive, got {0}")]
    NonPositiveFrequency(i64),
}

/// One tracked houseplant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantRecord {
    name: String,
    notes: String,
    planted: NaiveDate,
    last_watered: NaiveDate,
    frequency_days: i64,
}

impl PlantRecord {
    /// Create a record, validating both temporal invariants.
    pub fn new(
        name: impl Into<String>,
        notes: impl Into<String>,
        planted: NaiveDate,
        last_watered: NaiveDate,
        frequency_days: i64,
    ) -> Result<Self, PlantError> {
        validate_watering_date(planted, last_watered)?;
        validate_frequency(frequency_days)?;
        Ok(Self {
            name: name.into(),
            notes: notes.into(),
            planted,
            last_watered,
            frequency_days,
        })
    }

    /// Convenience constructor: planted and watered today, weekly watering.
    ///
    /// Infallible -- today/today/7 satisfies both invariants.
    pub fn with_defaults(name: impl Into<String>) -> Self {
        let today = Local::now().date_naive();
        Self {
            name: name.into(),
            notes: String::new(),
            planted: today,
            last_watered: today,
            frequency_days: DEFAULT_FREQUENCY_DAYS,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn planted(&self) -> NaiveDate {
        self.planted
    }

    pub fn last_watered(&self) -> NaiveDate {
        self.last_watered
    }

    pub fn frequency_days(&self) -> i64 {
        self.frequency_days
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Update the last watering date. Fails if `date` precedes the
    /// planting date; the record is unchanged on failure.
    pub fn set_last_watered(&mut self, date: NaiveDate) -> Result<(), PlantError> {
        validate_watering_date(self.planted, date)?;
        self.last_watered = date;
        Ok(())
    }

    /// Update the watering frequency. Fails unless `days` is strictly
    /// positive; the record is unchanged on failure.
    pub fn set_frequency(&mut self, days: i64) -> Result<(), PlantError> {
        validate_frequency(days)?;
        self.frequency_days = days;
        Ok(())
    }

    /// Record a watering as of today. Always succeeds; the date is
    /// assigned directly, without the planting-date check.
    pub fn water_now(&mut self) {
        self.last_watered = Local::now().date_naive();
    }

    /// The next date the plant is due for watering. Derived, not stored.
    pub fn next_watering(&self) -> NaiveDate {
        self.last_watered + Duration::days(self.frequency_days)
    }

    /// True iff the next watering date is strictly before `reference`.
    /// A plant due exactly on `reference` is not yet overdue.
    pub fn needs_watering(&self, reference: NaiveDate) -> bool {
        self.next_watering() < reference
    }

    /// Human-readable watering summary, ISO dates.
    pub fn watering_info(&self) -> String {
        format!(
            "Plant: {}, Last watering: {}, Next watering: {}",
            self.name,
            self.last_watered,
            self.next_watering()
        )
    }
}

fn validate_watering_date(planted: NaiveDate, watered: NaiveDate) -> Result<(), PlantError> {
    if watered < planted {
        return Err(PlantError::WateredBeforePlanted { watered, planted });
    }
    Ok(())
}

fn validate_frequency(days: i64) -> Result<(), PlantError> {
    if days <= 0 {
        return Err(PlantError::NonPositiveFrequency(days));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
