//! Content templates
//!
//! Turns a validated [`FormInput`] into a [`Document`]. There are exactly two
//! templates: a fixed machine learning primer, chosen only for Computer
//! Science requests whose topic mentions machine learning, and a generic
//! five-section article parametrized by topic, subject, level and content
//! type. Generation is total: every input yields a well-formed document.
//!
//! # Example
//!
//! ```
//! use edudoc_ast::{ContentType, FormInput, Length, Level, Subject};
//! use edudoc_core::template::generate;
//!
//! let input = FormInput {
//!     topic: "Roman Law".to_string(),
//!     subject: Subject::History,
//!     level: Level::Beginner,
//!     content_type: ContentType::Tutorial,
//!     length: Length::Medium,
//! };
//!
//! let doc = generate(&input);
//! assert_eq!(doc.title, "Roman Law: A Beginner Tutorial");
//! assert_eq!(doc.sections.len(), 5);
//! ```

use tracing::debug;

use edudoc_ast::{Document, FormInput, Section, Subject};

/// Title of the fixed machine learning document
pub const MACHINE_LEARNING_TITLE: &str = "Introduction to Machine Learning: A Beginner's Guide";

/// Which template a request resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// The fixed machine learning primer
    MachineLearning,
    /// The parametrized five-section article
    Generic,
}

/// Selects and instantiates document templates
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTemplateEngine;

impl ContentTemplateEngine {
    pub fn new() -> Self {
        Self
    }

    /// Decide which template serves `input`
    ///
    /// Deliberately a single special case rather than a lookup table.
    pub fn select(&self, input: &FormInput) -> TemplateKind {
        if input.subject == Subject::ComputerScience
            && input.topic.to_lowercase().contains("machine learning")
        {
            TemplateKind::MachineLearning
        } else {
            TemplateKind::Generic
        }
    }

    /// Generate a document for `input`
    pub fn generate(&self, input: &FormInput) -> Document {
        let kind = self.select(input);
        debug!(?kind, subject = %input.subject, "selected template");

        match kind {
            TemplateKind::MachineLearning => machine_learning_document(),
            TemplateKind::Generic => generic_document(input),
        }
    }
}

/// Convenience function to generate a document with the default engine
pub fn generate(input: &FormInput) -> Document {
    ContentTemplateEngine::new().generate(input)
}

fn generic_document(input: &FormInput) -> Document {
    let topic = input.topic_display_name();
    let subject = input.subject.name();
    let subject_lower = subject.to_lowercase();
    let level = input.level.name();
    let level_lower = level.to_lowercase();
    let kind = input.content_type.name();
    let kind_lower = kind.to_lowercase();

    let sections = vec![
        Section::new(
            "Introduction",
            format!(
                "Welcome to this comprehensive {kind_lower} on {topic}. This {level_lower}-level guide is designed to provide you with a thorough understanding of the key concepts and practical applications in {subject_lower}.\n\n\
                 Whether you're a student, professional, or simply curious about this topic, this {kind_lower} will equip you with the knowledge and insights needed to understand and apply these concepts effectively."
            ),
        ),
        Section::new(
            "Key Concepts and Fundamentals",
            format!(
                "Understanding the fundamental concepts is crucial for mastering any subject in {subject}. In this section, we'll explore the core principles that form the foundation of {topic}.\n\n\
                 These concepts are essential building blocks that will help you develop a deeper understanding of more advanced topics. We'll break down complex ideas into manageable parts and provide practical examples to illustrate each concept."
            ),
        ),
        Section::new(
            "Detailed Analysis and Applications",
            format!(
                "Now that we've covered the fundamentals, let's dive deeper into the practical applications and real-world implementations. This section provides comprehensive coverage of how these concepts are applied in professional settings.\n\n\
                 We'll examine case studies, best practices, and common challenges you might encounter when working with these concepts in {subject}. Understanding both the theory and practice is essential for developing expertise in this field."
            ),
        ),
        Section::new(
            "Examples and Case Studies",
            format!(
                "Learning through examples is one of the most effective ways to understand complex concepts. In this section, we'll explore real-world scenarios and case studies that demonstrate the practical application of the principles we've discussed.\n\n\
                 These examples are carefully selected to represent common situations you might encounter in your studies or professional work in {subject}. Each case study includes detailed analysis and key takeaways."
            ),
        ),
        Section::new(
            "Conclusion and Next Steps",
            format!(
                "In this {kind_lower}, we've covered the essential aspects of {topic}, from fundamental concepts to practical applications. The key to mastering this topic is consistent practice and continued learning.\n\n\
                 As you continue your journey in {subject}, remember that understanding comes through both theoretical study and hands-on experience. Consider exploring advanced topics, participating in projects, and staying updated with the latest developments in the field."
            ),
        ),
    ];

    Document {
        title: format!("{topic}: A {level} {kind}"),
        sections,
        references: vec![
            format!("{subject} Textbook - Comprehensive Guide"),
            "Academic Journals and Publications".to_string(),
            "Online Learning Resources and Courses".to_string(),
            "Professional Documentation and Standards".to_string(),
            "Industry Case Studies and Best Practices".to_string(),
        ],
    }
}

fn machine_learning_document() -> Document {
    Document {
        title: MACHINE_LEARNING_TITLE.to_string(),
        sections: vec![
            Section::new(
                "What is Machine Learning?",
                "Machine Learning (ML) is a subset of artificial intelligence that enables computers to learn and make decisions from data without being explicitly programmed for every task. Unlike traditional programming where we write explicit instructions, ML algorithms build mathematical models based on training data to make predictions or decisions without being explicitly programmed to perform the task.\n\n\
                 At its core, machine learning is about finding patterns in data and using those patterns to make informed predictions about new, unseen data. This approach has revolutionized numerous fields, from healthcare and finance to entertainment and transportation.",
            ),
            Section::new(
                "Types of Machine Learning",
                "There are three main types of machine learning approaches:\n\n\
                 **Supervised Learning**: This involves learning from labeled examples where both input and correct output are provided. Common applications include email spam detection, image recognition, and medical diagnosis. Popular algorithms include Linear Regression, Decision Trees, and Support Vector Machines.\n\n\
                 **Unsupervised Learning**: Here, the algorithm finds patterns in unlabeled data without being told what to look for. Examples include customer segmentation, anomaly detection, and data compression. Key techniques include K-Means clustering and Principal Component Analysis.\n\n\
                 **Reinforcement Learning**: This approach learns through trial and error by interacting with an environment and receiving rewards or penalties. It's widely used in game playing (like AlphaGo), robotics, and autonomous vehicles.",
            ),
            Section::new(
                "Common Algorithms and Applications",
                "Several algorithms form the foundation of modern machine learning:\n\n\
                 **Linear Regression**: Used for predicting continuous values like house prices or stock prices. It finds the best line that fits through data points.\n\n\
                 **Decision Trees**: These create a tree-like model of decisions, making them highly interpretable. They're excellent for classification tasks and can handle both numerical and categorical data.\n\n\
                 **Neural Networks**: Inspired by the human brain, these networks can learn complex patterns and are the foundation of deep learning. They excel at image recognition, natural language processing, and complex pattern recognition.\n\n\
                 **K-Means Clustering**: An unsupervised algorithm that groups similar data points together, useful for market segmentation and data analysis.",
            ),
            Section::new(
                "Getting Started with Machine Learning",
                "For beginners interested in machine learning:\n\n\
                 1. **Learn the Basics**: Start with statistics, linear algebra, and programming (Python or R)\n\
                 2. **Choose Learning Resources**: Online courses, textbooks, and practical tutorials\n\
                 3. **Practice with Real Data**: Use datasets from Kaggle, UCI ML Repository, or create your own\n\
                 4. **Use Tools and Libraries**: Scikit-learn for beginners, TensorFlow or PyTorch for deep learning\n\
                 5. **Build Projects**: Start with simple projects and gradually increase complexity\n\n\
                 Remember, machine learning is both an art and a science. Success comes from understanding the theory, practicing with real data, and continuously learning from the rapidly evolving field.",
            ),
        ],
        references: vec![
            "Introduction to Statistical Learning - James, Witten, Hastie, Tibshirani".to_string(),
            "Machine Learning Yearning - Andrew Ng".to_string(),
            "Scikit-learn Documentation".to_string(),
            "Coursera Machine Learning Course - Andrew Ng".to_string(),
            "Kaggle Learn - Machine Learning Courses".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edudoc_ast::{ContentType, Length, Level};

    fn input(topic: &str, subject: Subject) -> FormInput {
        FormInput {
            topic: topic.to_string(),
            subject,
            level: Level::Beginner,
            content_type: ContentType::Tutorial,
            length: Length::Medium,
        }
    }

    #[test]
    fn test_machine_learning_special_case() {
        let doc = generate(&input(
            "Machine learning basics\nKeywords: supervised learning",
            Subject::ComputerScience,
        ));
        assert_eq!(doc.title, MACHINE_LEARNING_TITLE);
        assert_eq!(doc.sections.len(), 4);
        assert_eq!(doc.sections[0].heading, "What is Machine Learning?");
        assert_eq!(doc.references.len(), 5);
    }

    #[test]
    fn test_machine_learning_match_is_case_insensitive() {
        let engine = ContentTemplateEngine::new();
        let kind = engine.select(&input("Applied MACHINE LEARNING", Subject::ComputerScience));
        assert_eq!(kind, TemplateKind::MachineLearning);
    }

    #[test]
    fn test_machine_learning_requires_computer_science() {
        let doc = generate(&input("Machine Learning", Subject::Mathematics));
        assert_eq!(doc.title, "Machine Learning: A Beginner Tutorial");
        assert_eq!(doc.sections.len(), 5);
    }

    #[test]
    fn test_machine_learning_ignores_level_and_type() {
        let mut request = input("machine learning", Subject::ComputerScience);
        request.level = Level::Advanced;
        request.content_type = ContentType::LessonPlan;
        request.length = Length::Long;
        assert_eq!(generate(&request).title, MACHINE_LEARNING_TITLE);
    }

    #[test]
    fn test_generic_template() {
        let doc = generate(&input("Roman Law", Subject::History));
        assert_eq!(doc.title, "Roman Law: A Beginner Tutorial");
        let headings: Vec<_> = doc.headings().collect();
        assert_eq!(
            headings,
            vec![
                "Introduction",
                "Key Concepts and Fundamentals",
                "Detailed Analysis and Applications",
                "Examples and Case Studies",
                "Conclusion and Next Steps",
            ]
        );
        assert_eq!(doc.references[0], "History Textbook - Comprehensive Guide");
        assert_eq!(doc.references.len(), 5);
        assert!(doc.is_well_formed());
    }

    #[test]
    fn test_generic_template_interpolation() {
        let mut request = input("Cell Biology\n\nKeywords: mitosis", Subject::Biology);
        request.level = Level::Intermediate;
        request.content_type = ContentType::StudyGuide;
        let doc = generate(&request);

        assert_eq!(doc.title, "Cell Biology: A Intermediate Study Guide");
        let intro = &doc.sections[0].content;
        assert!(intro.starts_with("Welcome to this comprehensive study guide on Cell Biology."));
        assert!(intro.contains("This intermediate-level guide"));
        assert!(intro.contains("practical applications in biology."));
        assert!(doc.sections[1].content.contains("any subject in Biology."));
        assert!(!doc.sections[4].content.contains("Keywords"));
    }

    #[test]
    fn test_length_does_not_change_content() {
        let mut short = input("Roman Law", Subject::History);
        short.length = Length::Short;
        let mut long = short.clone();
        long.length = Length::Long;
        assert_eq!(generate(&short), generate(&long));
    }

    #[test]
    fn test_sections_have_two_paragraphs() {
        let doc = generate(&input("Roman Law", Subject::History));
        for section in &doc.sections {
            assert_eq!(section.paragraphs().count(), 2, "{}", section.heading);
        }
    }
}
