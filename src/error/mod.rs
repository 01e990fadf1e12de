//! Error handling for the oncology data model.

/// Specialized error type for vocabulary and staging configuration
#[derive(Debug, thiserror::Error)]
pub enum OncoModelError {
    /// A vocabulary family definition declared the same label twice
    #[error("duplicate label '{label}' in vocabulary family '{family}'")]
    DuplicateLabel {
        /// Name of the offending family
        family: String,
        /// The repeated label
        label: String,
    },

    /// A validator bundle was registered twice under the same key
    #[error("validator bundle '{0}' is already registered")]
    BundleAlreadyRegistered(String),

    /// Error parsing a vocabulary bundle definition
    #[error("bundle definition error: {0}")]
    BundleDefinition(#[from] serde_json::Error),
}

/// Result type for oncology model operations
pub type Result<T> = std::result::Result<T, OncoModelError>;
