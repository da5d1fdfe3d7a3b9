//! Core library for the language-learning catalogue admin.
//!
//! Provides:
//! - Entity model (languages, modules, lessons, exercises, vocabulary)
//! - Exercise content resolver (default shapes, required-field checks)
//! - Alphabet-aware highlighter for multi-character letters
//! - Form validation and cross-entity relation checks
//! - Cyrillic transliteration for language codes

pub mod content;
pub mod error;
pub mod highlight;
pub mod relations;
pub mod translit;
pub mod types;
pub mod validate;

pub use content::{check_draft, check_shape, default_content, Side};
pub use error::{ContentError, FieldError, FieldErrorKind, HighlightError, Result, ValidationError};
pub use highlight::{Highlighter, Token};
pub use relations::{check_relations, EntityKind, RelationIssue};
pub use translit::{language_code, transliterate};
pub use types::{
    locale_cmp, sort_vocabulary, AlphabetItem, ContentKind, Difficulty, EntityRef, Exercise,
    ExerciseContent, ExerciseDraft, ExerciseType, Language, LanguageDraft, Lesson, LessonDraft,
    Module, ModuleDraft, Pair, PairItem, PairSide, PairsContent, UploadedFile, User, Variant,
    VariantsContent, VocabularyItem,
};
pub use validate::Validate;
