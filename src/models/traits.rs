//! Trait definitions for domain models
//!
//! This module defines the core traits that all domain models implement,
//! providing common functionality and interfaces for working with models.

use chrono::NaiveDate;
use std::hash::Hash;

/// A trait that all domain models must implement.
///
/// The `EntityModel` trait provides common functionality for all models
/// in the system, including identifier access and conversion methods.
pub trait EntityModel: Clone + Send + Sync + std::fmt::Debug {
    /// The type of identifier used for this model
    type Id: Clone + Eq + Hash + Send + Sync + std::fmt::Debug;

    /// Get the unique identifier for this model
    fn id(&self) -> &Self::Id;

    /// Create a unique key string representation of the identifier
    fn key(&self) -> String;
}

/// A trait for entities that have temporal validity.
///
/// `TemporalValidity` provides methods for checking if an entity
/// was valid at a specific point in time.
pub trait TemporalValidity {
    /// Check if this entity was valid at a specific date
    fn was_valid_at(&self, date: &NaiveDate) -> bool {
        let after_start = self.valid_from() <= *date;
        let before_end = self.valid_to().is_none_or(|end| *date <= end);
        after_start && before_end
    }

    /// Get the start date of validity
    fn valid_from(&self) -> NaiveDate;

    /// Get the end date of validity (if any)
    fn valid_to(&self) -> Option<NaiveDate>;

    /// Create a snapshot of this entity at a specific point in time
    /// Returns None if the entity was not valid at the given date
    fn snapshot_at(&self, date: &NaiveDate) -> Option<Self>
    where
        Self: Sized;
}
