//! Required-field validation for the edit forms.

use std::collections::HashSet;

use crate::content::content_errors;
use crate::error::{FieldError, FieldErrorKind, ValidationError};
use crate::types::{ExerciseDraft, LanguageDraft, LessonDraft, ModuleDraft, VocabularyItem};

/// Form-level validation. Collects every failing field instead of
/// stopping at the first one.
pub trait Validate {
    fn field_errors(&self) -> Vec<FieldError>;

    fn validate(&self) -> Result<(), ValidationError> {
        let errors = self.field_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors })
        }
    }
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn require(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if blank(value) {
        errors.push(FieldError::required(field));
    }
}

fn require_id(errors: &mut Vec<FieldError>, field: &str, id: i64) {
    if id <= 0 {
        errors.push(FieldError::required(field));
    }
}

impl Validate for LanguageDraft {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, "name", &self.name);

        if self.alphabet.is_empty() {
            errors.push(FieldError::new("alphabet", FieldErrorKind::Empty));
        }

        let mut seen = HashSet::new();
        for (i, item) in self.alphabet.iter().enumerate() {
            let field = format!("alphabet.{}.letter", i);
            if blank(&item.letter) {
                errors.push(FieldError::required(field));
            } else if !seen.insert(item.letter.as_str()) {
                errors.push(FieldError::new(field, FieldErrorKind::Duplicate));
            }
        }

        errors
    }
}

impl Validate for ModuleDraft {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, "title", &self.title);
        require(&mut errors, "description", &self.description);
        require_id(&mut errors, "languageId", self.language_id);
        errors
    }
}

impl Validate for LessonDraft {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, "title", &self.title);
        if self.order < 1 {
            errors.push(FieldError::new("order", FieldErrorKind::OutOfRange));
        }
        require(&mut errors, "description", &self.description);
        require_id(&mut errors, "moduleId", self.module_id);
        require_id(&mut errors, "languageId", self.language_id);
        errors
    }
}

impl Validate for ExerciseDraft {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require_id(&mut errors, "lessonId", self.lesson_id);
        errors.extend(content_errors(self.exercise_type, &self.content));
        errors
    }
}

impl Validate for VocabularyItem {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, "word", &self.word);
        require(&mut errors, "audioUrl", &self.audio_url);
        require(&mut errors, "imageUrl", &self.image_url);
        errors
    }
}
