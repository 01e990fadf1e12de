//! Standardized collection traits and condition collections
//!
//! This module defines traits for collections of domain models, providing
//! a unified interface for adding, getting, and filtering items, plus the
//! `ConditionCollection` used to query conditions per person.

use rustc_hash::FxHashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::condition::ConditionOccurrence;
use crate::models::traits::{EntityModel, TemporalValidity};
use crate::staging::StagingClassifier;

/// Core trait for model collections
///
/// This trait provides the fundamental operations that all model
/// collections should support, including adding, getting, and listing
/// items.
pub trait ModelCollection<T: EntityModel>: Send + Sync + std::fmt::Debug {
    /// Add a model to the collection
    fn add(&mut self, model: T);

    /// Get a model by its identifier
    fn get(&self, id: &T::Id) -> Option<Arc<T>>;

    /// Get all models in the collection
    fn all(&self) -> Vec<Arc<T>>;

    /// Count the total number of models in the collection
    fn count(&self) -> usize;

    /// Filter models by a predicate function
    fn filter<F>(&self, predicate: F) -> Vec<Arc<T>>
    where
        F: Fn(&T) -> bool;

    /// Check if the collection contains a model with the given ID
    fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Add multiple models to the collection
    fn add_all(&mut self, models: Vec<T>) {
        for model in models {
            self.add(model);
        }
    }
}

/// Trait for collections with temporal filtering capabilities
pub trait TemporalCollection<T>: ModelCollection<T>
where
    T: EntityModel + TemporalValidity,
{
    /// Get all models valid at a specific date
    fn valid_at(&self, date: &NaiveDate) -> Vec<Arc<T>> {
        self.filter(|model| model.was_valid_at(date))
    }
}

/// A collection of condition occurrences indexed per person
#[derive(Debug, Default)]
pub struct ConditionCollection {
    /// Conditions by row identifier
    by_id: FxHashMap<i64, Arc<ConditionOccurrence>>,
    /// Conditions by person identifier
    conditions_by_person: FxHashMap<i64, Vec<Arc<ConditionOccurrence>>>,
}

impl ConditionCollection {
    /// Create a new empty `ConditionCollection`
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_id: FxHashMap::default(),
            conditions_by_person: FxHashMap::default(),
        }
    }

    /// Get all conditions for a person
    #[must_use]
    pub fn conditions_for_person(&self, person_id: i64) -> Vec<Arc<ConditionOccurrence>> {
        self.conditions_by_person
            .get(&person_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Conditions with at least one pathological stage modifier, per the
    /// classifier's registered staging vocabulary
    ///
    /// Conditions whose confirmation is unknown (no `"tnm"` bundle
    /// registered) are not included.
    #[must_use]
    pub fn pathologically_confirmed(
        &self,
        classifier: &StagingClassifier,
    ) -> Vec<Arc<ConditionOccurrence>> {
        self.filter(|condition| classifier.path_confirmation(condition) == Some(true))
    }
}

impl ModelCollection<ConditionOccurrence> for ConditionCollection {
    fn add(&mut self, condition: ConditionOccurrence) {
        let person_id = condition.person_id;
        let condition_arc = Arc::new(condition);

        self.by_id
            .insert(condition_arc.condition_occurrence_id, condition_arc.clone());
        self.conditions_by_person
            .entry(person_id)
            .or_default()
            .push(condition_arc);
    }

    fn get(&self, id: &i64) -> Option<Arc<ConditionOccurrence>> {
        self.by_id.get(id).cloned()
    }

    fn all(&self) -> Vec<Arc<ConditionOccurrence>> {
        self.by_id.values().cloned().collect()
    }

    fn count(&self) -> usize {
        self.by_id.len()
    }

    fn filter<F>(&self, predicate: F) -> Vec<Arc<ConditionOccurrence>>
    where
        F: Fn(&ConditionOccurrence) -> bool,
    {
        self.by_id
            .values()
            .filter(|condition| predicate(condition))
            .cloned()
            .collect()
    }
}

impl TemporalCollection<ConditionOccurrence> for ConditionCollection {}
