//! Exercise content resolver.
//!
//! Picks the content shape for an exercise type, seeds default form values
//! and checks required fields before a draft is submitted. Only
//! required-field rules are applied: a variants list with no option marked
//! correct is accepted.

use uuid::Uuid;

use crate::error::{ContentError, FieldError, Result, ValidationError};
use crate::types::{
    AlphabetItem, ContentKind, ExerciseContent, ExerciseDraft, ExerciseType, Language, Pair,
    PairItem, PairSide, PairsContent, Variant, VariantsContent,
};

/// Default content for a new exercise of the given type.
pub fn default_content(ty: ExerciseType) -> Result<ExerciseContent> {
    match ty.content_kind() {
        Some(ContentKind::Variants) => Ok(ExerciseContent::Variants(VariantsContent {
            name: String::new(),
            letter: None,
            word: Some(String::new()),
            ..VariantsContent::default()
        })),
        Some(ContentKind::Pairs) => Ok(ExerciseContent::Pairs(PairsContent {
            name: String::new(),
            left: PairSide::default(),
            right: PairSide::default(),
            ..PairsContent::default()
        })),
        Some(ContentKind::Other) | None => Err(ContentError::Unsupported(ty)),
    }
}

/// Check that the content shape matches what the type expects.
///
/// Raw content is only accepted for types without a known shape.
pub fn check_shape(ty: ExerciseType, content: &ExerciseContent) -> Result<()> {
    let found = content.kind();
    match ty.content_kind() {
        Some(expected) if expected != found => Err(ContentError::ShapeMismatch {
            ty,
            expected,
            found,
        }),
        Some(_) => Ok(()),
        None if found == ContentKind::Other => Ok(()),
        None => Err(ContentError::Unsupported(ty)),
    }
}

/// Required-field failures for a piece of content.
pub fn content_errors(ty: ExerciseType, content: &ExerciseContent) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if content.name().map_or(true, is_blank) && content.kind() != ContentKind::Other {
        errors.push(FieldError::required("name"));
    }

    match content {
        ExerciseContent::Variants(c) => {
            if c.letter.as_ref().map_or(true, |l| is_blank(&l.letter)) {
                errors.push(FieldError::required("letter"));
            }
            if ty == ExerciseType::Listening && c.word.as_deref().map_or(true, is_blank) {
                errors.push(FieldError::required("word"));
            }
            for (i, variant) in c.variants.iter().enumerate() {
                if is_blank(&variant.name) {
                    errors.push(FieldError::required(format!("variants.{}.name", i)));
                }
                if ty == ExerciseType::MultipleChoice
                    && variant.audio_url.as_deref().map_or(true, is_blank)
                {
                    errors.push(FieldError::required(format!("variants.{}.audioUrl", i)));
                }
            }
        }
        ExerciseContent::Pairs(c) => {
            for (i, pair) in c.pairs.iter().enumerate() {
                if is_blank(&pair.left.value) {
                    errors.push(FieldError::required(format!("pairs.{}.left.value", i)));
                }
                if is_blank(&pair.right.value) {
                    errors.push(FieldError::required(format!("pairs.{}.right.value", i)));
                }
            }
        }
        ExerciseContent::Other(_) => {}
    }

    errors
}

/// Validate a draft before it is sent: shape first, then required fields.
pub fn check_draft(draft: &ExerciseDraft) -> Result<()> {
    check_shape(draft.exercise_type, &draft.content)?;

    let mut errors = content_errors(draft.exercise_type, &draft.content);
    if draft.lesson_id <= 0 {
        errors.insert(0, FieldError::required("lessonId"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { errors }.into())
    }
}

impl ExerciseDraft {
    /// Empty draft for a new exercise, seeded with the type's default content.
    pub fn new(ty: ExerciseType, language_id: i64) -> Result<Self> {
        Ok(Self {
            id: None,
            exercise_type: ty,
            title: String::new(),
            order: 0,
            lesson_id: 0,
            language_id,
            content: default_content(ty)?,
        })
    }
}

impl VariantsContent {
    /// Append an empty, incorrect option.
    pub fn add_variant(&mut self) -> &mut Variant {
        self.variants.push(Variant::default());
        let last = self.variants.len() - 1;
        &mut self.variants[last]
    }

    pub fn remove_variant(&mut self, index: usize) -> Option<Variant> {
        (index < self.variants.len()).then(|| self.variants.remove(index))
    }

    /// Number of options marked correct.
    pub fn correct_count(&self) -> usize {
        self.variants.iter().filter(|v| v.correct).count()
    }

    /// Select the exercise letter from the language's alphabet. Returns
    /// false when the letter is not part of the alphabet.
    pub fn select_letter(&mut self, language: &Language, letter: &str) -> bool {
        match language.letter(letter) {
            Some(item) => {
                self.letter = Some(item.clone());
                true
            }
            None => false,
        }
    }
}

/// Left or right column of a matching exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl PairsContent {
    /// Append a pair with a fresh id and empty values.
    pub fn add_pair(&mut self) -> &mut Pair {
        self.pairs.push(Pair {
            id: Uuid::new_v4().to_string(),
            left: PairItem::default(),
            right: PairItem::default(),
        });
        let last = self.pairs.len() - 1;
        &mut self.pairs[last]
    }

    pub fn remove_pair(&mut self, index: usize) -> Option<Pair> {
        (index < self.pairs.len()).then(|| self.pairs.remove(index))
    }

    pub fn side(&self, side: Side) -> PairSide {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Fill one side of a pair with an alphabet letter, taking over the
    /// letter's recording. Returns false for an unknown index.
    pub fn select_letter(&mut self, side: Side, index: usize, item: &AlphabetItem) -> bool {
        let Some(pair) = self.pairs.get_mut(index) else {
            return false;
        };
        let target = match side {
            Side::Left => &mut pair.left,
            Side::Right => &mut pair.right,
        };
        target.value = item.letter.clone();
        target.audio_url = item.audio_url.clone();
        true
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
