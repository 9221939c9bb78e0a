//! Sample topics offered to prefill the request form.

use serde::Serialize;

use edudoc_ast::{ContentType, FormFields, Length, Level, Subject};

/// A ready-made request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleTopic {
    pub title: &'static str,
    pub subject: Subject,
    pub level: Level,
    pub keywords: &'static str,
}

/// Built-in samples
pub const SAMPLE_TOPICS: [SampleTopic; 3] = [
    SampleTopic {
        title: "Introduction to Machine Learning",
        subject: Subject::ComputerScience,
        level: Level::Beginner,
        keywords: "supervised learning, unsupervised learning, algorithms, neural networks, data preprocessing",
    },
    SampleTopic {
        title: "Fundamentals of Organic Chemistry",
        subject: Subject::Chemistry,
        level: Level::Intermediate,
        keywords: "molecular structure, functional groups, reactions, stereochemistry, nomenclature",
    },
    SampleTopic {
        title: "Ancient Roman History",
        subject: Subject::History,
        level: Level::Beginner,
        keywords: "Roman Empire, Julius Caesar, Augustus, Roman law, military tactics",
    },
];

impl SampleTopic {
    /// Form values for this sample: a Medium tutorial whose topic lists the
    /// keywords under the title
    pub fn form_fields(&self) -> FormFields {
        FormFields::new(
            format!("{}\n\nKeywords: {}", self.title, self.keywords),
            self.subject.name(),
            self.level.name(),
            ContentType::Tutorial.name(),
            Length::Medium.name(),
        )
    }
}

/// Look a sample up by index, wrapping around
pub fn sample(index: usize) -> &'static SampleTopic {
    &SAMPLE_TOPICS[index % SAMPLE_TOPICS.len()]
}
