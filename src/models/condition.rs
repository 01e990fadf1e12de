//! Condition occurrence entity model
//!
//! This module contains the `ConditionOccurrence` model, representing a
//! diagnosed condition together with the modifier observations attached to
//! it. The staging queries in [`crate::staging`] are built on the
//! filter-and-sort primitive defined here.

use chrono::{NaiveDate, NaiveDateTime};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::models::measurement::Measurement;
use crate::models::traits::{EntityModel, TemporalValidity};
use crate::vocabulary::{ConceptCode, VocabularyFamily};

/// Representation of a diagnosed condition and its modifiers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionOccurrence {
    /// Unique identifier of the condition row
    pub condition_occurrence_id: i64,
    /// Person the condition belongs to
    pub person_id: i64,
    /// Concept of the condition itself
    pub condition_concept_id: ConceptCode,
    /// Provenance concept for the condition record
    pub condition_type_concept_id: ConceptCode,
    /// Status concept (e.g. primary diagnosis), when recorded
    pub condition_status_concept_id: Option<ConceptCode>,
    /// Source vocabulary concept, when mapped
    pub condition_source_concept_id: Option<ConceptCode>,
    /// Date the condition started
    pub condition_start_date: NaiveDate,
    /// Full start timestamp, when the source recorded one
    pub condition_start_datetime: Option<NaiveDateTime>,
    /// Date the condition ended, if it has
    pub condition_end_date: Option<NaiveDate>,
    /// Full end timestamp, when the source recorded one
    pub condition_end_datetime: Option<NaiveDateTime>,
    /// Reason the condition was closed
    pub stop_reason: Option<String>,
    /// Verbatim source representation of the condition
    pub condition_source_value: Option<String>,
    /// Verbatim source representation of the status
    pub condition_status_source_value: Option<String>,
    /// Provider who recorded the condition
    pub provider_id: Option<i64>,
    /// Visit during which the condition was recorded
    pub visit_occurrence_id: Option<i64>,
    /// Visit detail during which the condition was recorded
    pub visit_detail_id: Option<i64>,
    /// Modifier observations attached to this condition, in stored order
    pub modifiers: Vec<Measurement>,
}

impl ConditionOccurrence {
    /// Create a new condition occurrence
    #[must_use]
    pub const fn new(
        condition_occurrence_id: i64,
        person_id: i64,
        condition_concept_id: ConceptCode,
        condition_type_concept_id: ConceptCode,
        condition_start_date: NaiveDate,
    ) -> Self {
        Self {
            condition_occurrence_id,
            person_id,
            condition_concept_id,
            condition_type_concept_id,
            condition_status_concept_id: None,
            condition_source_concept_id: None,
            condition_start_date,
            condition_start_datetime: None,
            condition_end_date: None,
            condition_end_datetime: None,
            stop_reason: None,
            condition_source_value: None,
            condition_status_source_value: None,
            provider_id: None,
            visit_occurrence_id: None,
            visit_detail_id: None,
            modifiers: Vec::new(),
        }
    }

    /// Set the end date of the condition
    #[must_use]
    pub const fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.condition_end_date = Some(end_date);
        self
    }

    /// Set the status concept of the condition
    #[must_use]
    pub const fn with_status(mut self, status_concept_id: ConceptCode) -> Self {
        self.condition_status_concept_id = Some(status_concept_id);
        self
    }

    /// Set the verbatim source value of the condition
    #[must_use]
    pub fn with_source_value(mut self, source_value: &str) -> Self {
        self.condition_source_value = Some(source_value.to_string());
        self
    }

    /// Set the visit the condition was recorded during
    #[must_use]
    pub const fn with_visit(mut self, visit_occurrence_id: i64) -> Self {
        self.visit_occurrence_id = Some(visit_occurrence_id);
        self
    }

    /// Attach a modifier observation to this condition
    pub fn add_modifier(&mut self, modifier: Measurement) {
        self.modifiers.push(modifier);
    }

    /// Modifier observations whose concept belongs to the given family,
    /// ordered by measurement date (most recent last)
    ///
    /// The sort is stable: modifiers measured on the same date keep their
    /// stored relative order. Modifiers without a recorded concept pass
    /// every family filter.
    #[must_use]
    pub fn modifiers_in_family(&self, family: &VocabularyFamily) -> Vec<&Measurement> {
        self.modifiers
            .iter()
            .filter(|m| family.is_member(m.measurement_concept_id))
            .sorted_by_key(|m| m.measurement_date)
            .collect()
    }
}

impl EntityModel for ConditionOccurrence {
    type Id = i64;

    fn id(&self) -> &Self::Id {
        &self.condition_occurrence_id
    }

    fn key(&self) -> String {
        format!(
            "condition:{}:{}",
            self.person_id, self.condition_occurrence_id
        )
    }
}

impl TemporalValidity for ConditionOccurrence {
    fn valid_from(&self) -> NaiveDate {
        self.condition_start_date
    }

    fn valid_to(&self) -> Option<NaiveDate> {
        self.condition_end_date
    }

    fn snapshot_at(&self, date: &NaiveDate) -> Option<Self> {
        if self.was_valid_at(date) {
            Some(self.clone())
        } else {
            None
        }
    }
}
