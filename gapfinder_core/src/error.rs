//! Error types for GapFinder.
//!
//! Gap detection itself is total and never fails. These errors only surface
//! at the reference-data loading boundary and when resolving card ids.

/// Main error type for GapFinder.
///
/// All fallible operations return `Result<T> = std::result::Result<T, GapFinderError>`.
#[derive(thiserror::Error, Debug)]
pub enum GapFinderError {
    /// Reference data document is structurally invalid.
    #[error("Invalid reference data: {0}")]
    InvalidReferenceData(String),

    /// The same card id appears twice in one industry's catalog.
    #[error("Duplicate card id '{card_id}' in {industry} catalog")]
    DuplicateCardId {
        /// Industry whose catalog contains the duplicate
        industry: String,
        /// The repeated card id
        card_id: String,
    },

    /// A card id could not be found in the industry's catalog.
    #[error("Unknown card '{card_id}' for industry {industry}")]
    UnknownCard {
        /// Industry that was searched
        industry: String,
        /// The missing card id
        card_id: String,
    },

    /// A stage name did not match any canonical stage.
    #[error("Unknown stage: {0}")]
    UnknownStage(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Result with GapFinderError.
pub type Result<T> = std::result::Result<T, GapFinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GapFinderError::UnknownCard {
            industry: "ecommerce".to_string(),
            card_id: "fax".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown card 'fax' for industry ecommerce");
    }

    #[test]
    fn test_unknown_stage_display() {
        let err = GapFinderError::UnknownStage("loyalty".to_string());
        assert_eq!(err.to_string(), "Unknown stage: loyalty");
    }
}
