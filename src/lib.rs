//! A Rust library modeling the OMOP CDM oncology extension: clinical
//! entity models, closed concept vocabularies, and TNM staging
//! classification over condition modifiers.

pub mod error;
pub mod models;
pub mod staging;
pub mod vocabulary;

// Re-export the most common types for easier use
// Core types
pub use error::{OncoModelError, Result};

// Entity models
pub use models::{ConditionOccurrence, Episode, Measurement};

// Vocabulary system
pub use vocabulary::{ConceptCode, OncologyVocabularies, VocabularyFamily};

// Staging classification
pub use staging::{StagingClassifier, TNM_BUNDLE, TnmVocabulary};
