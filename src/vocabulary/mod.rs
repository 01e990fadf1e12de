//! Concept vocabulary system
//!
//! Closed, declaration-ordered sets of (label, concept code) pairs and the
//! standard oncology-extension families built from them.

pub mod family;
pub mod oncology;

pub use family::{ConceptCode, ConceptEntry, FamilyDef, VocabularyFamily};
pub use oncology::OncologyVocabularies;
