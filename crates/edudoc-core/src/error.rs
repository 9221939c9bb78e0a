//! Error types for edudoc-core.

use thiserror::Error;

use edudoc_ast::ParseOptionError;

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Reasons a form cannot start a generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Topic missing or blank
    #[error("Please enter a topic or syllabus outline")]
    MissingTopic,

    /// One of the selections was left unset
    #[error("Please fill in all required fields")]
    MissingFields,

    /// A selection outside its enumeration
    #[error(transparent)]
    UnknownOption(#[from] ParseOptionError),
}

/// Errors reported by the session controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The form did not validate
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A generation is already in flight
    #[error("A generation is already in progress")]
    Busy,

    /// An export was requested before any document was generated
    #[error("No content to {0}")]
    NoContent(&'static str),
}

/// Structural problems of a document received from outside
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("Document has no title")]
    MissingTitle,

    #[error("Document has no sections")]
    NoSections,
}

/// Errors loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The TOML text could not be parsed
    #[error("Invalid settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is unusable
    #[error("Invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingTopic.to_string(),
            "Please enter a topic or syllabus outline"
        );
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Please fill in all required fields"
        );
    }

    #[test]
    fn test_document_messages() {
        assert_eq!(DocumentError::MissingTitle.to_string(), "Document has no title");
        assert_eq!(DocumentError::NoSections.to_string(), "Document has no sections");
    }

    #[test]
    fn test_session_error_wraps_validation() {
        let err: SessionError = ValidationError::MissingTopic.into();
        assert_eq!(err.to_string(), "Please enter a topic or syllabus outline");
        assert_eq!(SessionError::NoContent("copy").to_string(), "No content to copy");
    }
}
