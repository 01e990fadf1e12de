//! Standard oncology-extension vocabulary families
//!
//! Concept codes here come from the OMOP standardized vocabularies and the
//! Cancer Modifier vocabulary. Each constructor builds one closed family;
//! [`OncologyVocabularies`] builds the full set eagerly at startup so the
//! rest of the process can treat them as immutable lookup tables.
//!
//! Two families intentionally map several labels to one code (`ta`/`tx`/
//! `tis` in T-stage, `stageIII`/`stageIV` in group stage). The source
//! vocabulary has not assigned distinct codes for these, and label-based
//! lookups rely on every label resolving, so the collisions are preserved
//! rather than deduplicated.

use crate::vocabulary::family::VocabularyFamily;

/// Measurement fields a modifier record can point back at
#[must_use]
pub fn modifier_fields() -> VocabularyFamily {
    VocabularyFamily::new(
        "modifier_fields",
        &[
            ("condition_occurrence_id", 1_147_127),
            ("drug_exposure_id", 1_147_707),
            ("procedure_occurrence_id", 1_147_082),
        ],
    )
}

/// Tables whose rows can carry modifier measurements
#[must_use]
pub fn modifier_tables() -> VocabularyFamily {
    VocabularyFamily::new(
        "modifier_tables",
        &[
            ("drug_exposure", 1_147_339),
            ("episode", 35_225_440),
            ("observation", 1_147_304),
        ],
    )
}

/// Event concepts that start or evidence a treatment episode
#[must_use]
pub fn treatment_episode() -> VocabularyFamily {
    VocabularyFamily::new(
        "treatment_episode",
        &[
            ("care_plan_assignment", 4_207_655),
            ("ehr_prescription", 32_838),
            ("ehr_planned_dispensing", 32_837),
            ("ehr_encounter_record", 32_827),
        ],
    )
}

/// Treatment modality concepts
#[must_use]
pub fn modality() -> VocabularyFamily {
    VocabularyFamily::new(
        "modality",
        &[
            ("chemotherapy", 35_803_401),
            ("radiotherapy", 35_803_411),
        ],
    )
}

/// Disease and treatment episode concepts
#[must_use]
pub fn episode_concepts() -> VocabularyFamily {
    VocabularyFamily::new(
        "episode_concepts",
        &[
            ("episode_of_care", 32_533),
            ("treatment_regimen", 32_531),
            ("treatment_cycle", 32_532),
            ("disease_first_occurrence", 32_528),
            ("disease_progression", 32_677),
        ],
    )
}

/// Provenance of an episode record: stated in the EHR or derived from it
#[must_use]
pub fn episode_types() -> VocabularyFamily {
    VocabularyFamily::new(
        "episode_types",
        &[("ehr_defined", 32_544), ("ehr_derived", 32_545)],
    )
}

/// Parent concepts for grouping condition modifiers by measurement concept
#[must_use]
pub fn condition_modifiers() -> VocabularyFamily {
    VocabularyFamily::new(
        "condition_modifiers",
        &[
            ("init_diag", 734_306),
            ("tnm", 734_320),
            ("mets", 36_769_180),
        ],
    )
}

/// Parent concepts for grouping treatment modifiers
///
/// No codes mapped yet; kept so treatment-side grouping has a family to
/// grow into. Every non-null candidate fails membership here.
#[must_use]
pub fn treatment_modifiers() -> VocabularyFamily {
    VocabularyFamily::new("treatment_modifiers", &[])
}

/// AJCC/UICC T-stage (primary tumour) concepts
#[must_use]
pub fn t_stage_concepts() -> VocabularyFamily {
    VocabularyFamily::new(
        "t_stage",
        &[
            ("t0", 1_634_213),
            ("t1", 1_635_564),
            ("t2", 1_635_562),
            ("t3", 1_634_376),
            ("t4", 1_634_654),
            ("ta", 1_635_682),
            ("tx", 1_635_682),
            ("tis", 1_635_682),
        ],
    )
}

/// AJCC/UICC N-stage (regional nodes) concepts
#[must_use]
pub fn n_stage_concepts() -> VocabularyFamily {
    VocabularyFamily::new(
        "n_stage",
        &[
            ("n0", 1_633_440),
            ("n1", 1_634_434),
            ("n2", 1_634_119),
            ("n3", 1_635_320),
            ("n4", 1_635_445),
            ("nx", 1_633_885),
        ],
    )
}

/// AJCC/UICC M-stage (distant metastasis) concepts
#[must_use]
pub fn m_stage_concepts() -> VocabularyFamily {
    VocabularyFamily::new(
        "m_stage",
        &[("m0", 1_635_624), ("m1", 1_635_142), ("mx", 1_633_547)],
    )
}

/// AJCC/UICC overall group stage concepts
#[must_use]
pub fn group_stage_concepts() -> VocabularyFamily {
    VocabularyFamily::new(
        "group_stage",
        &[
            ("stage0", 1_633_754),
            ("stageI", 1_633_306),
            ("stageII", 1_634_209),
            ("stageIII", 1_633_650),
            ("stageIV", 1_633_650),
        ],
    )
}

/// The full set of standard oncology families, built once at startup
#[derive(Debug, Clone)]
pub struct OncologyVocabularies {
    /// Measurement fields a modifier can point back at
    pub modifier_fields: VocabularyFamily,
    /// Tables whose rows can carry modifiers
    pub modifier_tables: VocabularyFamily,
    /// Treatment episode event concepts
    pub treatment_episode: VocabularyFamily,
    /// Treatment modality concepts
    pub modality: VocabularyFamily,
    /// Disease and treatment episode concepts
    pub episode_concepts: VocabularyFamily,
    /// Episode provenance concepts
    pub episode_types: VocabularyFamily,
    /// Condition modifier grouping concepts
    pub condition_modifiers: VocabularyFamily,
    /// Treatment modifier grouping concepts (empty placeholder)
    pub treatment_modifiers: VocabularyFamily,
    /// T-stage concepts
    pub t_stage: VocabularyFamily,
    /// N-stage concepts
    pub n_stage: VocabularyFamily,
    /// M-stage concepts
    pub m_stage: VocabularyFamily,
    /// Overall group stage concepts
    pub group_stage: VocabularyFamily,
}

impl OncologyVocabularies {
    /// Build every standard family
    #[must_use]
    pub fn new() -> Self {
        let vocabularies = Self {
            modifier_fields: modifier_fields(),
            modifier_tables: modifier_tables(),
            treatment_episode: treatment_episode(),
            modality: modality(),
            episode_concepts: episode_concepts(),
            episode_types: episode_types(),
            condition_modifiers: condition_modifiers(),
            treatment_modifiers: treatment_modifiers(),
            t_stage: t_stage_concepts(),
            n_stage: n_stage_concepts(),
            m_stage: m_stage_concepts(),
            group_stage: group_stage_concepts(),
        };
        log::debug!("built standard oncology vocabulary families");
        vocabularies
    }
}

impl Default for OncologyVocabularies {
    fn default() -> Self {
        Self::new()
    }
}
