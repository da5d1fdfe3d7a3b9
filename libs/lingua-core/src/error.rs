//! Error types for lingua-core.

use std::fmt;

use thiserror::Error;

use crate::types::{ContentKind, ExerciseType};

/// Result type alias using ContentError.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors raised while resolving or checking exercise content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("exercise type {0} has no content shape")]
    Unsupported(ExerciseType),

    #[error("exercise type {ty} expects {expected} content, got {found}")]
    ShapeMismatch {
        ty: ExerciseType,
        expected: ContentKind,
        found: ContentKind,
    },

    #[error("unknown exercise type: {0}")]
    UnknownType(String),

    #[error("malformed {ty} content: {message}")]
    Malformed { ty: ExerciseType, message: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Errors raised while building the alphabet pattern.
#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("invalid alphabet pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Field is empty or whitespace only.
    Required,
    /// List must contain at least one entry.
    Empty,
    /// Value collides with another entry in the same list.
    Duplicate,
    /// Numeric value outside the allowed range.
    OutOfRange,
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Required => "required",
            Self::Empty => "must not be empty",
            Self::Duplicate => "duplicate value",
            Self::OutOfRange => "out of range",
        };
        f.write_str(s)
    }
}

/// A field-level validation failure. `field` is a dotted path such as
/// `variants.1.name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, FieldErrorKind::Required)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// All field failures collected for one form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Whether a failure is recorded for the given field path.
    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Kind of the first failure recorded for a field path.
    pub fn kind_of(&self, field: &str) -> Option<FieldErrorKind> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.kind)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("validation failed")?;
        for (i, e) in self.errors.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { ", " })?;
            write!(f, "{}", e)?;
        }
        Ok(())
    }
}
