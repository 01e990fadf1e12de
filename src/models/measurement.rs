//! Measurement entity model
//!
//! This module contains the Measurement model, representing timestamped
//! clinical measurements. In the oncology extension a measurement can act
//! as a modifier observation: a staging or diagnosis fact attached to a
//! row of another clinical table through the `modifier_of_*` columns.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::traits::EntityModel;
use crate::vocabulary::ConceptCode;

/// Representation of a clinical measurement record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    /// Unique identifier of the measurement row
    pub measurement_id: i64,
    /// Person the measurement belongs to
    pub person_id: i64,
    /// Concept the measurement records; `None` when no code was captured
    pub measurement_concept_id: Option<ConceptCode>,
    /// Date the measurement was taken
    pub measurement_date: NaiveDate,
    /// Full timestamp, when the source recorded one
    pub measurement_datetime: Option<NaiveDateTime>,
    /// Provenance concept for the measurement record
    pub measurement_type_concept_id: ConceptCode,
    /// Numeric result, if any
    pub value_as_number: Option<f64>,
    /// Coded result, if any
    pub value_as_concept_id: Option<ConceptCode>,
    /// Verbatim source representation of the measurement
    pub measurement_source_value: Option<String>,
    /// Row in another clinical table this measurement modifies
    pub modifier_of_event_id: Option<i64>,
    /// Field concept identifying which table/column the event id points at
    pub modifier_of_field_concept_id: Option<ConceptCode>,
}

impl Measurement {
    /// Create a new measurement
    #[must_use]
    pub const fn new(
        measurement_id: i64,
        person_id: i64,
        measurement_concept_id: Option<ConceptCode>,
        measurement_date: NaiveDate,
        measurement_type_concept_id: ConceptCode,
    ) -> Self {
        Self {
            measurement_id,
            person_id,
            measurement_concept_id,
            measurement_date,
            measurement_datetime: None,
            measurement_type_concept_id,
            value_as_number: None,
            value_as_concept_id: None,
            measurement_source_value: None,
            modifier_of_event_id: None,
            modifier_of_field_concept_id: None,
        }
    }

    /// Attach this measurement to a row of another clinical table,
    /// turning it into a modifier observation of that row
    #[must_use]
    pub const fn as_modifier_of(
        mut self,
        event_id: i64,
        field_concept_id: ConceptCode,
    ) -> Self {
        self.modifier_of_event_id = Some(event_id);
        self.modifier_of_field_concept_id = Some(field_concept_id);
        self
    }

    /// Set a numeric result value
    #[must_use]
    pub const fn with_value(mut self, value: f64) -> Self {
        self.value_as_number = Some(value);
        self
    }

    /// Set a coded result value
    #[must_use]
    pub const fn with_value_concept(mut self, concept_id: ConceptCode) -> Self {
        self.value_as_concept_id = Some(concept_id);
        self
    }

    /// Set the verbatim source value
    #[must_use]
    pub fn with_source_value(mut self, source_value: &str) -> Self {
        self.measurement_source_value = Some(source_value.to_string());
        self
    }

    /// Whether this measurement modifies the given event row
    #[must_use]
    pub fn modifies_event(&self, event_id: i64) -> bool {
        self.modifier_of_event_id == Some(event_id)
    }
}

impl EntityModel for Measurement {
    type Id = i64;

    fn id(&self) -> &Self::Id {
        &self.measurement_id
    }

    fn key(&self) -> String {
        format!("measurement:{}", self.measurement_id)
    }
}
