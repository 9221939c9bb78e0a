//! Article request form definitions
//!
//! `FormFields` carries raw values exactly as a form delivers them;
//! `FormInput` is the validated request with every selection resolved to
//! its enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A value that is not a member of the named enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {field}: {value}")]
pub struct ParseOptionError {
    /// Name of the form field being parsed
    pub field: &'static str,
    /// The rejected value
    pub value: String,
}

/// Find the option whose display name matches `value`, ignoring ASCII case
/// and surrounding whitespace.
fn parse_named<T: Copy>(
    field: &'static str,
    value: &str,
    options: &[T],
    name: impl Fn(T) -> &'static str,
) -> Result<T, ParseOptionError> {
    let wanted = value.trim();
    options
        .iter()
        .copied()
        .find(|option| name(*option).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ParseOptionError {
            field,
            value: value.to_string(),
        })
}

/// Academic subject of the article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    Mathematics,
    Physics,
    Chemistry,
    Biology,
    History,
    Literature,
    Economics,
    Psychology,
    Engineering,
}

impl Subject {
    /// Every subject, in form order
    pub const ALL: [Subject; 10] = [
        Subject::ComputerScience,
        Subject::Mathematics,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::History,
        Subject::Literature,
        Subject::Economics,
        Subject::Psychology,
        Subject::Engineering,
    ];

    /// Display name as shown in the form
    pub fn name(self) -> &'static str {
        match self {
            Subject::ComputerScience => "Computer Science",
            Subject::Mathematics => "Mathematics",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::History => "History",
            Subject::Literature => "Literature",
            Subject::Economics => "Economics",
            Subject::Psychology => "Psychology",
            Subject::Engineering => "Engineering",
        }
    }
}

/// Target reader level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Every level, in form order
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    /// Display name as shown in the form
    pub fn name(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

/// Kind of article to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "Blog Post")]
    BlogPost,
    #[serde(rename = "Study Guide")]
    StudyGuide,
    Tutorial,
    #[serde(rename = "Reference Material")]
    ReferenceMaterial,
    #[serde(rename = "Lesson Plan")]
    LessonPlan,
}

impl ContentType {
    /// Every content type, in form order
    pub const ALL: [ContentType; 5] = [
        ContentType::BlogPost,
        ContentType::StudyGuide,
        ContentType::Tutorial,
        ContentType::ReferenceMaterial,
        ContentType::LessonPlan,
    ];

    /// Display name as shown in the form
    pub fn name(self) -> &'static str {
        match self {
            ContentType::BlogPost => "Blog Post",
            ContentType::StudyGuide => "Study Guide",
            ContentType::Tutorial => "Tutorial",
            ContentType::ReferenceMaterial => "Reference Material",
            ContentType::LessonPlan => "Lesson Plan",
        }
    }
}

/// Requested article length
///
/// Collected and validated, but no template varies its output by length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Length {
    Short,
    Medium,
    Long,
}

impl Length {
    /// Every length, in form order
    pub const ALL: [Length; 3] = [Length::Short, Length::Medium, Length::Long];

    /// Display name as shown in the form
    pub fn name(self) -> &'static str {
        match self {
            Length::Short => "Short",
            Length::Medium => "Medium",
            Length::Long => "Long",
        }
    }
}

impl FromStr for Subject {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("subject", s, &Self::ALL, Self::name)
    }
}

impl FromStr for Level {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("level", s, &Self::ALL, Self::name)
    }
}

impl FromStr for ContentType {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("content type", s, &Self::ALL, Self::name)
    }
}

impl FromStr for Length {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("length", s, &Self::ALL, Self::name)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw form values before validation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormFields {
    pub topic: Option<String>,
    pub subject: Option<String>,
    pub level: Option<String>,
    pub content_type: Option<String>,
    pub length: Option<String>,
}

impl FormFields {
    /// Fill every field from string values
    pub fn new(
        topic: impl Into<String>,
        subject: impl Into<String>,
        level: impl Into<String>,
        content_type: impl Into<String>,
        length: impl Into<String>,
    ) -> Self {
        Self {
            topic: Some(topic.into()),
            subject: Some(subject.into()),
            level: Some(level.into()),
            content_type: Some(content_type.into()),
            length: Some(length.into()),
        }
    }
}

/// A validated article request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    /// Free-text topic or syllabus outline, trimmed and non-empty
    pub topic: String,
    pub subject: Subject,
    pub level: Level,
    pub content_type: ContentType,
    pub length: Length,
}

impl FormInput {
    /// The topic up to its first line break
    pub fn topic_display_name(&self) -> &str {
        self.topic.lines().next().unwrap_or(&self.topic)
    }
}

impl From<&FormInput> for FormFields {
    fn from(input: &FormInput) -> Self {
        FormFields::new(
            input.topic.clone(),
            input.subject.name(),
            input.level.name(),
            input.content_type.name(),
            input.length.name(),
        )
    }
}
