//! Notice system for list screens.
//!
//! Fetch failures and validation problems surface as transient notices; the
//! screen itself stays interactive.

use std::time::Instant;

/// A notice message for the user
#[derive(Debug, Clone)]
pub struct Notice {
    /// The message to display
    pub message: String,
    /// The severity level of the notice
    pub level: NoticeLevel,
    /// When the notice was created
    pub timestamp: Instant,
}

/// Severity level for notices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational message
    Info,
    /// Warning message
    Warning,
    /// Error message
    Error,
    /// Success message
    Success,
}

impl Notice {
    /// Create a new notice with the given message and level
    pub fn new(message: String, level: NoticeLevel) -> Self {
        Self {
            message,
            level,
            timestamp: Instant::now(),
        }
    }

    /// Create an info notice
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), NoticeLevel::Info)
    }

    /// Create a warning notice
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), NoticeLevel::Warning)
    }

    /// Create an error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), NoticeLevel::Error)
    }

    /// Create a success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), NoticeLevel::Success)
    }
}
