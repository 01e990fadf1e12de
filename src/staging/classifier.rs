//! Staging classification over condition modifiers
//!
//! The classifier answers read-only questions about a condition's attached
//! modifier observations: which of them are stage assessments, in what
//! temporal order, and whether the condition is pathologically confirmed.
//! Every staging query is gated on the `"tnm"` validator bundle; before
//! one is registered the answers are unknown and come back as `None`.

use rustc_hash::FxHashMap;

use crate::error::{OncoModelError, Result};
use crate::models::condition::ConditionOccurrence;
use crate::models::measurement::Measurement;
use crate::staging::bundle::{TNM_BUNDLE, TnmVocabulary};
use crate::vocabulary::VocabularyFamily;

/// Read-only staging queries backed by registered validator bundles
///
/// Bundles are registered once during startup, after the vocabulary
/// tables exist, and are immutable afterwards. Registration is
/// write-once per key.
#[derive(Debug, Default)]
pub struct StagingClassifier {
    validators: FxHashMap<String, TnmVocabulary>,
}

impl StagingClassifier {
    /// Create a classifier with no registered bundles
    ///
    /// All staging queries return `None` until a `"tnm"` bundle is
    /// registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a validator bundle under a name
    ///
    /// Each key can be registered exactly once per classifier; a second
    /// registration is rejected rather than silently replacing the
    /// vocabulary mid-process.
    pub fn register_bundle(&mut self, name: &str, bundle: TnmVocabulary) -> Result<()> {
        if self.validators.contains_key(name) {
            return Err(OncoModelError::BundleAlreadyRegistered(name.to_string()));
        }
        log::info!("registered staging validator bundle '{name}'");
        self.validators.insert(name.to_string(), bundle);
        Ok(())
    }

    /// Look up a registered bundle
    #[must_use]
    pub fn bundle(&self, name: &str) -> Option<&TnmVocabulary> {
        self.validators.get(name)
    }

    fn tnm(&self) -> Option<&TnmVocabulary> {
        self.validators.get(TNM_BUNDLE)
    }

    /// The condition's modifiers that belong to the given family,
    /// ordered by measurement date
    #[must_use]
    pub fn get_stage<'a>(
        &self,
        condition: &'a ConditionOccurrence,
        family: &VocabularyFamily,
    ) -> Vec<&'a Measurement> {
        condition.modifiers_in_family(family)
    }

    /// Whether any stage modifier of this condition is pathological
    ///
    /// `None` when no `"tnm"` bundle is registered: confirmation is
    /// unknown, not false.
    #[must_use]
    pub fn path_confirmation(&self, condition: &ConditionOccurrence) -> Option<bool> {
        self.tnm()
            .map(|bundle| !condition.modifiers_in_family(&bundle.path_stage_concepts).is_empty())
    }

    /// Group stage modifiers of this condition, ordered by modifier date
    /// (most recent last)
    #[must_use]
    pub fn group_stage<'a>(
        &self,
        condition: &'a ConditionOccurrence,
    ) -> Option<Vec<&'a Measurement>> {
        self.tnm()
            .map(|bundle| condition.modifiers_in_family(&bundle.group_stage_concepts))
    }

    /// T stage modifiers of this condition, ordered by modifier date
    #[must_use]
    pub fn t_stage<'a>(&self, condition: &'a ConditionOccurrence) -> Option<Vec<&'a Measurement>> {
        self.tnm()
            .map(|bundle| condition.modifiers_in_family(&bundle.t_stage_concepts))
    }

    /// N stage modifiers of this condition, ordered by modifier date
    #[must_use]
    pub fn n_stage<'a>(&self, condition: &'a ConditionOccurrence) -> Option<Vec<&'a Measurement>> {
        self.tnm()
            .map(|bundle| condition.modifiers_in_family(&bundle.n_stage_concepts))
    }

    /// M stage modifiers of this condition, ordered by modifier date
    #[must_use]
    pub fn m_stage<'a>(&self, condition: &'a ConditionOccurrence) -> Option<Vec<&'a Measurement>> {
        self.tnm()
            .map(|bundle| condition.modifiers_in_family(&bundle.m_stage_concepts))
    }
}
