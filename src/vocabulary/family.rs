//! Closed vocabulary families of clinical concept codes
//!
//! A vocabulary family is a named, declaration-ordered set of
//! (label, concept code) pairs used to classify clinical facts by
//! membership. Families are immutable once constructed. A candidate code
//! of `None` ("no code recorded") is treated as a member of every family.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::OncoModelError;

/// Integer identifier for a coded clinical concept in a standard vocabulary
pub type ConceptCode = i32;

/// A single labeled member of a vocabulary family
///
/// Labels are unique within a family. Distinct labels may carry the same
/// concept code; several source vocabularies do this where concepts have
/// not yet been assigned their own code, and label-based lookups depend on
/// every label resolving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptEntry {
    /// Label as it appears in the source vocabulary
    pub label: String,
    /// Concept code the label maps to
    pub code: ConceptCode,
}

/// Raw, order-preserving definition of a family
///
/// This is the wire form: members are kept as an array so declaration
/// order survives serialization, and [`VocabularyFamily`] is rebuilt from
/// it with validation on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyDef {
    /// Family name
    pub name: String,
    /// Members in declaration order
    pub members: Vec<ConceptEntry>,
}

/// Named closed set of concept codes with label lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "FamilyDef", into = "FamilyDef")]
pub struct VocabularyFamily {
    name: String,
    members: Vec<ConceptEntry>,
    by_label: FxHashMap<String, ConceptCode>,
    code_set: FxHashSet<ConceptCode>,
}

impl VocabularyFamily {
    /// Create a family from (label, code) pairs in declaration order
    #[must_use]
    pub fn new(name: &str, members: &[(&str, ConceptCode)]) -> Self {
        let entries = members
            .iter()
            .map(|(label, code)| ConceptEntry {
                label: (*label).to_string(),
                code: *code,
            })
            .collect();
        Self::from_entries(name.to_string(), entries)
    }

    fn from_entries(name: String, members: Vec<ConceptEntry>) -> Self {
        let mut by_label = FxHashMap::default();
        let mut code_set = FxHashSet::default();
        for entry in &members {
            by_label.insert(entry.label.clone(), entry.code);
            code_set.insert(entry.code);
        }
        Self {
            name,
            members,
            by_label,
            code_set,
        }
    }

    /// Name of this family
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Membership test for a candidate concept code
    ///
    /// `None` is vacuously a member: a fact without a recorded code passes
    /// every family filter.
    #[must_use]
    pub fn is_member(&self, candidate: Option<ConceptCode>) -> bool {
        candidate.is_none_or(|code| self.code_set.contains(&code))
    }

    /// All labels in declaration order
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.label.as_str()).collect()
    }

    /// Member codes in declaration order
    ///
    /// Lazy and restartable; codes repeat when several labels share one.
    pub fn codes(&self) -> impl Iterator<Item = ConceptCode> + '_ {
        self.members.iter().map(|m| m.code)
    }

    /// Resolve a label to its concept code
    #[must_use]
    pub fn code_of(&self, label: &str) -> Option<ConceptCode> {
        self.by_label.get(label).copied()
    }

    /// Members in declaration order
    #[must_use]
    pub fn entries(&self) -> &[ConceptEntry] {
        &self.members
    }

    /// Number of labeled members
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the family has no members
    ///
    /// A non-null candidate is never a member of an empty family.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl TryFrom<FamilyDef> for VocabularyFamily {
    type Error = OncoModelError;

    fn try_from(def: FamilyDef) -> Result<Self, Self::Error> {
        let mut seen = FxHashSet::default();
        for entry in &def.members {
            if !seen.insert(entry.label.as_str()) {
                return Err(OncoModelError::DuplicateLabel {
                    family: def.name,
                    label: entry.label.clone(),
                });
            }
        }
        Ok(Self::from_entries(def.name, def.members))
    }
}

impl From<VocabularyFamily> for FamilyDef {
    fn from(family: VocabularyFamily) -> Self {
        Self {
            name: family.name,
            members: family.members,
        }
    }
}
