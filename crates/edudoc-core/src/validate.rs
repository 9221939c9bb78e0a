//! Form validation
//!
//! Converts raw [`FormFields`] into a [`FormInput`]. The topic is checked
//! first, then presence of every selection, then membership of each value
//! in its enumeration.

use edudoc_ast::{FormFields, FormInput};

use crate::error::ValidationError;

/// Validate raw form values
pub fn validate(fields: &FormFields) -> Result<FormInput, ValidationError> {
    let topic = present(&fields.topic).ok_or(ValidationError::MissingTopic)?;

    let (Some(subject), Some(level), Some(content_type), Some(length)) = (
        present(&fields.subject),
        present(&fields.level),
        present(&fields.content_type),
        present(&fields.length),
    ) else {
        return Err(ValidationError::MissingFields);
    };

    Ok(FormInput {
        topic: topic.to_string(),
        subject: subject.parse()?,
        level: level.parse()?,
        content_type: content_type.parse()?,
        length: length.parse()?,
    })
}

/// Trimmed value, or `None` when missing or blank
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
