//! Transient user notices
//!
//! A notice is a short message with a severity, shown briefly after a user
//! action. Only one is shown at a time: posting a new notice replaces the
//! current one.
//!
//! # Example
//!
//! ```
//! use edudoc_core::notice::{Notice, NoticeSlot, Severity};
//!
//! let mut slot = NoticeSlot::new();
//! slot.post(Notice::success("Article generated successfully!"));
//! slot.post(Notice::error("Failed to copy content"));
//!
//! assert_eq!(slot.current().map(|n| n.severity), Some(Severity::Error));
//! ```

use serde::{Deserialize, Serialize};

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    /// Create a notice
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Create a success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Create an error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Check if this is an error notice
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Single-slot holder for the notice currently shown
#[derive(Debug, Clone, Default)]
pub struct NoticeSlot {
    current: Option<Notice>,
}

impl NoticeSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `notice`, replacing any notice already shown
    pub fn post(&mut self, notice: Notice) {
        self.current = Some(notice);
    }

    /// The notice currently shown
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Remove and return the current notice
    pub fn dismiss(&mut self) -> Option<Notice> {
        self.current.take()
    }
}
