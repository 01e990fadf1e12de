//! Swappable staging vocabulary bundles
//!
//! The concept codes that constitute a valid stage depend on the
//! site-specific vocabulary mapping loaded at startup. Staging queries
//! therefore draw their concept sets from a named bundle registered with
//! the classifier instead of hard-wired families, so a deployment can
//! substitute its own staging vocabulary without touching the
//! classification logic.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::vocabulary::{OncologyVocabularies, VocabularyFamily};

/// Key under which the TNM staging bundle is registered
pub const TNM_BUNDLE: &str = "tnm";

/// The vocabulary families consulted by TNM staging queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TnmVocabulary {
    /// Concepts marking a pathological stage assessment
    pub path_stage_concepts: VocabularyFamily,
    /// Overall group stage concepts
    pub group_stage_concepts: VocabularyFamily,
    /// Primary tumour stage concepts
    pub t_stage_concepts: VocabularyFamily,
    /// Regional node stage concepts
    pub n_stage_concepts: VocabularyFamily,
    /// Distant metastasis stage concepts
    pub m_stage_concepts: VocabularyFamily,
}

impl TnmVocabulary {
    /// Create a bundle from its five concept families
    #[must_use]
    pub const fn new(
        path_stage_concepts: VocabularyFamily,
        group_stage_concepts: VocabularyFamily,
        t_stage_concepts: VocabularyFamily,
        n_stage_concepts: VocabularyFamily,
        m_stage_concepts: VocabularyFamily,
    ) -> Self {
        Self {
            path_stage_concepts,
            group_stage_concepts,
            t_stage_concepts,
            n_stage_concepts,
            m_stage_concepts,
        }
    }

    /// Create a bundle backed by the standard oncology stage families
    ///
    /// Path-stage concepts are site-vocabulary dependent and have no
    /// standard enumeration, so the caller supplies that family.
    #[must_use]
    pub fn from_reference(
        vocabularies: &OncologyVocabularies,
        path_stage_concepts: VocabularyFamily,
    ) -> Self {
        Self::new(
            path_stage_concepts,
            vocabularies.group_stage.clone(),
            vocabularies.t_stage.clone(),
            vocabularies.n_stage.clone(),
            vocabularies.m_stage.clone(),
        )
    }

    /// Parse a bundle from its JSON configuration form
    ///
    /// The expected shape is one object per family, each with a `name`
    /// and an ordered `members` array of `{label, code}` entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let bundle: Self = serde_json::from_str(json)?;
        log::debug!("parsed staging vocabulary bundle from configuration");
        Ok(bundle)
    }
}
