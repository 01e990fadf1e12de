//! Episode entity model
//!
//! This module contains the Episode model, representing overarching
//! disease or treatment episodes that group lower-level clinical events.
//! Episode records are classified through the episode vocabulary families
//! in [`crate::vocabulary::oncology`].

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::traits::{EntityModel, TemporalValidity};
use crate::vocabulary::{ConceptCode, VocabularyFamily};

/// Representation of a disease or treatment episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    /// Unique identifier of the episode row
    pub episode_id: i64,
    /// Person the episode belongs to
    pub person_id: i64,
    /// What kind of episode this is (disease episode, regimen, cycle, ...)
    pub episode_concept_id: ConceptCode,
    /// The disease or treatment the episode is about
    pub episode_object_concept_id: ConceptCode,
    /// Provenance concept: stated in the EHR or derived from it
    pub episode_type_concept_id: ConceptCode,
    /// Date the episode started
    pub episode_start_date: NaiveDate,
    /// Full start timestamp, when the source recorded one
    pub episode_start_datetime: Option<NaiveDateTime>,
    /// Date the episode ended, if it has
    pub episode_end_date: Option<NaiveDate>,
    /// Full end timestamp, when the source recorded one
    pub episode_end_datetime: Option<NaiveDateTime>,
    /// Enclosing episode, for cycles nested under a regimen
    pub episode_parent_id: Option<i64>,
    /// Ordinal of this episode within its parent
    pub episode_number: Option<i32>,
    /// Verbatim source representation of the episode
    pub episode_source_value: Option<String>,
    /// Source vocabulary concept, when mapped
    pub episode_source_concept_id: Option<ConceptCode>,
}

impl Episode {
    /// Create a new episode
    #[must_use]
    pub const fn new(
        episode_id: i64,
        person_id: i64,
        episode_concept_id: ConceptCode,
        episode_object_concept_id: ConceptCode,
        episode_type_concept_id: ConceptCode,
        episode_start_date: NaiveDate,
    ) -> Self {
        Self {
            episode_id,
            person_id,
            episode_concept_id,
            episode_object_concept_id,
            episode_type_concept_id,
            episode_start_date,
            episode_start_datetime: None,
            episode_end_date: None,
            episode_end_datetime: None,
            episode_parent_id: None,
            episode_number: None,
            episode_source_value: None,
            episode_source_concept_id: None,
        }
    }

    /// Set the end date of the episode
    #[must_use]
    pub const fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.episode_end_date = Some(end_date);
        self
    }

    /// Nest this episode under a parent episode
    #[must_use]
    pub const fn with_parent(mut self, parent_id: i64, number: i32) -> Self {
        self.episode_parent_id = Some(parent_id);
        self.episode_number = Some(number);
        self
    }

    /// Whether this episode's kind belongs to the given family
    #[must_use]
    pub fn is_kind_of(&self, family: &VocabularyFamily) -> bool {
        family.is_member(Some(self.episode_concept_id))
    }
}

impl EntityModel for Episode {
    type Id = i64;

    fn id(&self) -> &Self::Id {
        &self.episode_id
    }

    fn key(&self) -> String {
        format!("episode:{}:{}", self.person_id, self.episode_id)
    }
}

impl TemporalValidity for Episode {
    fn valid_from(&self) -> NaiveDate {
        self.episode_start_date
    }

    fn valid_to(&self) -> Option<NaiveDate> {
        self.episode_end_date
    }

    fn snapshot_at(&self, date: &NaiveDate) -> Option<Self> {
        if self.was_valid_at(date) {
            Some(self.clone())
        } else {
            None
        }
    }
}
