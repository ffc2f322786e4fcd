//! Structured error types shared across the quiz draw crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`QuizError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (partition labels, counts, bounds).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for the quiz draw engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum QuizError {
    /// A question ID belongs to no declared partition, or a partition
    /// table failed validation.
    #[error("out of range: {0}")]
    OutOfRange(ErrorInfo),
    /// A mandatory partition has no eligible question left.
    #[error("exhausted partition: {0}")]
    ExhaustedPartition(ErrorInfo),
    /// Too few partitions remain eligible for the extension phase.
    #[error("insufficient partitions: {0}")]
    InsufficientPartitions(ErrorInfo),
    /// Rejection sampling hit its attempt ceiling without filling the batch.
    #[error("exhausted space: {0}")]
    ExhaustedSpace(ErrorInfo),
    /// Invalid draw configuration supplied by the caller.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl QuizError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            QuizError::OutOfRange(info)
            | QuizError::ExhaustedPartition(info)
            | QuizError::InsufficientPartitions(info)
            | QuizError::ExhaustedSpace(info)
            | QuizError::Config(info) => info,
        }
    }

    /// Returns the stable machine readable code carried by the payload.
    pub fn code(&self) -> &str {
        &self.info().code
    }
}
