//! Core types for the language-learning catalogue.
//!
//! Every record here is owned by the server; the admin client only holds
//! re-fetchable copies. Wire names are camelCase.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use unicode_normalization::UnicodeNormalization;

use crate::error::ContentError;

/// One letter (or multi-character grapheme) of a language's alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlphabetItem {
    pub letter: String,
    #[serde(default)]
    pub transcription: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub order: i32,
}

impl AlphabetItem {
    pub fn new(letter: impl Into<String>, transcription: impl Into<String>, order: i32) -> Self {
        Self {
            letter: letter.into(),
            transcription: transcription.into(),
            audio_url: None,
            order,
        }
    }
}

/// Language with its ordered alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub alphabet: Vec<AlphabetItem>,
}

impl Language {
    /// Re-sort the alphabet ascending by `order`. Equal orders keep their
    /// relative position.
    pub fn sort_alphabet(&mut self) {
        self.alphabet.sort_by_key(|item| item.order);
    }

    /// Look up an alphabet item by its letter.
    pub fn letter(&self, letter: &str) -> Option<&AlphabetItem> {
        self.alphabet.iter().find(|item| item.letter == letter)
    }

    /// Letters in alphabet order.
    pub fn letters(&self) -> impl Iterator<Item = &str> {
        self.alphabet.iter().map(|item| item.letter.as_str())
    }

    /// Editable copy of this language.
    pub fn to_draft(&self) -> LanguageDraft {
        LanguageDraft {
            id: Some(self.id),
            name: self.name.clone(),
            code: Some(self.code.clone()),
            alphabet: self.alphabet.clone(),
        }
    }
}

/// Create/edit form state for a language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default)]
    pub alphabet: Vec<AlphabetItem>,
}

impl LanguageDraft {
    /// New language with a single empty letter, ready to fill in.
    pub fn new(name: impl Into<String>) -> Self {
        let mut draft = Self {
            name: name.into(),
            ..Self::default()
        };
        draft.add_letter();
        draft
    }

    /// Append an empty letter ordered after the existing ones.
    pub fn add_letter(&mut self) -> &mut AlphabetItem {
        let order = self.alphabet.len() as i32 + 1;
        self.alphabet.push(AlphabetItem {
            letter: String::new(),
            transcription: String::new(),
            audio_url: Some(String::new()),
            order,
        });
        let last = self.alphabet.len() - 1;
        &mut self.alphabet[last]
    }

    /// Remove the letter at `index`, if present.
    pub fn remove_letter(&mut self, index: usize) -> Option<AlphabetItem> {
        (index < self.alphabet.len()).then(|| self.alphabet.remove(index))
    }
}

/// Module difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Beginner
    }
}

/// Reference to a related record. The server sends either a bare id or the
/// embedded record; only the id is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef {
    Id(i64),
    Object { id: i64 },
}

impl EntityRef {
    pub fn id(&self) -> i64 {
        match self {
            Self::Id(id) | Self::Object { id } => *id,
        }
    }
}

/// Thematic grouping of lessons for a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<u32>,
    pub language_id: i64,
    #[serde(default)]
    pub lesson_ids: Vec<i64>,
    #[serde(default)]
    pub lessons: Vec<EntityRef>,
}

impl Module {
    /// Lesson ids of this module, from `lessonIds` or else the embedded lessons.
    pub fn lesson_ids(&self) -> Vec<i64> {
        if !self.lesson_ids.is_empty() {
            return self.lesson_ids.clone();
        }
        self.lessons.iter().map(EntityRef::id).collect()
    }

    pub fn to_draft(&self) -> ModuleDraft {
        ModuleDraft {
            id: Some(self.id),
            title: self.title.clone(),
            description: self.description.clone(),
            order: self.order,
            difficulty: self.difficulty,
            language_id: self.language_id,
            lesson_ids: self.lesson_ids(),
        }
    }
}

/// Create/edit form state for a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub order: i32,
    pub difficulty: Difficulty,
    pub language_id: i64,
    #[serde(default)]
    pub lesson_ids: Vec<i64>,
}

impl ModuleDraft {
    pub fn new(language_id: i64) -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            order: 0,
            difficulty: Difficulty::default(),
            language_id,
            lesson_ids: Vec::new(),
        }
    }
}

/// Ordered unit within a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub module_id: Option<i64>,
    pub language_id: i64,
    #[serde(default)]
    pub exercise_ids: Vec<i64>,
    #[serde(default)]
    pub exercises: Vec<EntityRef>,
}

impl Lesson {
    /// Exercise ids of this lesson, from `exerciseIds` or else the embedded exercises.
    pub fn exercise_ids(&self) -> Vec<i64> {
        if !self.exercise_ids.is_empty() {
            return self.exercise_ids.clone();
        }
        self.exercises.iter().map(EntityRef::id).collect()
    }

    pub fn to_draft(&self) -> LessonDraft {
        LessonDraft {
            id: Some(self.id),
            title: self.title.clone(),
            description: self.description.clone(),
            order: self.order,
            module_id: self.module_id.unwrap_or_default(),
            language_id: self.language_id,
            exercise_ids: self.exercise_ids(),
        }
    }
}

/// Create/edit form state for a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub order: i32,
    pub module_id: i64,
    pub language_id: i64,
    #[serde(default)]
    pub exercise_ids: Vec<i64>,
}

impl LessonDraft {
    pub fn new(language_id: i64, module_id: i64) -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            order: 1,
            module_id,
            language_id,
            exercise_ids: Vec::new(),
        }
    }
}

/// Kind of learning activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExerciseType {
    MultipleChoice,
    MultipleChoiceImgs,
    Matching,
    MatchingAudio,
    Translation,
    Listening,
    Speaking,
    FillBlank,
    Reorder,
    TrueFalse,
}

impl ExerciseType {
    pub const ALL: [ExerciseType; 10] = [
        Self::MultipleChoice,
        Self::MultipleChoiceImgs,
        Self::Matching,
        Self::MatchingAudio,
        Self::Translation,
        Self::Listening,
        Self::Speaking,
        Self::FillBlank,
        Self::Reorder,
        Self::TrueFalse,
    ];

    /// Wire name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "MULTIPLE_CHOICE",
            Self::MultipleChoiceImgs => "MULTIPLE_CHOICE_IMGS",
            Self::Matching => "MATCHING",
            Self::MatchingAudio => "MATCHING_AUDIO",
            Self::Translation => "TRANSLATION",
            Self::Listening => "LISTENING",
            Self::Speaking => "SPEAKING",
            Self::FillBlank => "FILL_BLANK",
            Self::Reorder => "REORDER",
            Self::TrueFalse => "TRUE_FALSE",
        }
    }

    /// Content shape used by this type. `None` for types without an
    /// authoring form.
    pub fn content_kind(&self) -> Option<ContentKind> {
        match self {
            Self::Listening | Self::MultipleChoice | Self::MultipleChoiceImgs => {
                Some(ContentKind::Variants)
            }
            Self::Matching | Self::MatchingAudio => Some(ContentKind::Pairs),
            Self::Translation
            | Self::Speaking
            | Self::FillBlank
            | Self::Reorder
            | Self::TrueFalse => None,
        }
    }

    /// Types that can be authored.
    pub fn supported() -> impl Iterator<Item = ExerciseType> {
        Self::ALL.into_iter().filter(|t| t.content_kind().is_some())
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ContentError::UnknownType(s.to_string()))
    }
}

/// Shape of exercise content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Answer options, some marked correct.
    Variants,
    /// Left/right items to be matched.
    Pairs,
    /// Raw content of a type without a known shape.
    Other,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Variants => "variants",
            Self::Pairs => "pairs",
            Self::Other => "other",
        })
    }
}

/// Which key an option's label was read from; the label is written back
/// under the same key(s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum LabelKey {
    #[default]
    Name,
    Word,
    Both,
}

/// One answer option.
///
/// The label is read from `name`, falling back to `word` when `name` is
/// missing or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "VariantRecord", into = "VariantRecord")]
pub struct Variant {
    pub name: String,
    pub correct: bool,
    pub audio_url: Option<String>,
    pub image_url: Option<String>,
    /// Keys this client does not interpret, written back unchanged.
    pub extra: Map<String, Value>,
    label_key: LabelKey,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VariantRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    word: Option<String>,
    #[serde(default)]
    correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<VariantRecord> for Variant {
    fn from(record: VariantRecord) -> Self {
        let label_key = match (&record.name, &record.word) {
            (Some(_), Some(_)) => LabelKey::Both,
            (None, Some(_)) => LabelKey::Word,
            _ => LabelKey::Name,
        };
        let name = record
            .name
            .filter(|n| !n.is_empty())
            .or(record.word)
            .unwrap_or_default();

        Self {
            name,
            correct: record.correct,
            audio_url: record.audio_url,
            image_url: record.image_url,
            extra: record.extra,
            label_key,
        }
    }
}

impl From<Variant> for VariantRecord {
    fn from(variant: Variant) -> Self {
        let (name, word) = match variant.label_key {
            LabelKey::Name => (Some(variant.name), None),
            LabelKey::Word => (None, Some(variant.name)),
            LabelKey::Both => (Some(variant.name.clone()), Some(variant.name)),
        };
        Self {
            name,
            word,
            correct: variant.correct,
            audio_url: variant.audio_url,
            image_url: variant.image_url,
            extra: variant.extra,
        }
    }
}

/// Content of answer-choice exercises.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantsContent {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<AlphabetItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    pub variants: Vec<Variant>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Display options for one side of a matching exercise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairSide {
    #[serde(default)]
    pub is_letter: bool,
    #[serde(default)]
    pub only_audio: bool,
}

/// One side of a pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairItem {
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    #[serde(default)]
    pub id: String,
    pub left: PairItem,
    pub right: PairItem,
}

/// Content of matching exercises.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairsContent {
    #[serde(default)]
    pub name: String,
    pub left: PairSide,
    pub right: PairSide,
    pub pairs: Vec<Pair>,
    /// Keys such as `word`, `letter` or `lessonId` that other editors keep
    /// in the content object.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Exercise content. On the wire this is a flat object whose shape is
/// fixed by the exercise type; see [`ExerciseContent::decode`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExerciseContent {
    Pairs(PairsContent),
    Variants(VariantsContent),
    Other(Value),
}

impl ExerciseContent {
    /// Decode raw content for an exercise type. Types without a content
    /// shape keep the value verbatim.
    pub fn decode(ty: ExerciseType, value: Value) -> Result<Self, ContentError> {
        let malformed = |e: serde_json::Error| ContentError::Malformed {
            ty,
            message: e.to_string(),
        };
        match ty.content_kind() {
            Some(ContentKind::Variants) => serde_json::from_value(value)
                .map(Self::Variants)
                .map_err(malformed),
            Some(ContentKind::Pairs) => serde_json::from_value(value)
                .map(Self::Pairs)
                .map_err(malformed),
            Some(ContentKind::Other) | None => Ok(Self::Other(value)),
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Variants(_) => ContentKind::Variants,
            Self::Pairs(_) => ContentKind::Pairs,
            Self::Other(_) => ContentKind::Other,
        }
    }

    /// Exercise name stored in the content, if the shape has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Variants(c) => Some(&c.name),
            Self::Pairs(c) => Some(&c.name),
            Self::Other(value) => value.get("name").and_then(|n| n.as_str()),
        }
    }

    pub fn as_variants(&self) -> Option<&VariantsContent> {
        match self {
            Self::Variants(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_variants_mut(&mut self) -> Option<&mut VariantsContent> {
        match self {
            Self::Variants(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_pairs(&self) -> Option<&PairsContent> {
        match self {
            Self::Pairs(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_pairs_mut(&mut self) -> Option<&mut PairsContent> {
        match self {
            Self::Pairs(c) => Some(c),
            _ => None,
        }
    }
}

/// A single learning activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ExerciseRecord")]
pub struct Exercise {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<i64>,
    pub language_id: i64,
    pub content: ExerciseContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson: Option<EntityRef>,
}

/// Exercise as received, before its content is decoded by type.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExerciseRecord {
    id: i64,
    title: String,
    #[serde(rename = "type")]
    exercise_type: ExerciseType,
    #[serde(default)]
    order: i32,
    #[serde(default)]
    lesson_id: Option<i64>,
    language_id: i64,
    content: Value,
    #[serde(default)]
    lesson: Option<EntityRef>,
}

impl TryFrom<ExerciseRecord> for Exercise {
    type Error = ContentError;

    fn try_from(record: ExerciseRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            content: ExerciseContent::decode(record.exercise_type, record.content)?,
            id: record.id,
            title: record.title,
            exercise_type: record.exercise_type,
            order: record.order,
            lesson_id: record.lesson_id,
            language_id: record.language_id,
            lesson: record.lesson,
        })
    }
}

impl Exercise {
    /// Owning lesson, from `lessonId` or else the embedded lesson.
    pub fn lesson_id(&self) -> Option<i64> {
        self.lesson_id.or_else(|| self.lesson.map(|l| l.id()))
    }

    pub fn to_draft(&self) -> ExerciseDraft {
        ExerciseDraft {
            id: Some(self.id),
            exercise_type: self.exercise_type,
            title: self.title.clone(),
            order: self.order,
            lesson_id: self.lesson_id().unwrap_or_default(),
            language_id: self.language_id,
            content: self.content.clone(),
        }
    }
}

/// Create/edit form state for an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ExerciseDraftRecord")]
pub struct ExerciseDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub title: String,
    pub order: i32,
    pub lesson_id: i64,
    pub language_id: i64,
    pub content: ExerciseContent,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExerciseDraftRecord {
    #[serde(default)]
    id: Option<i64>,
    #[serde(rename = "type")]
    exercise_type: ExerciseType,
    title: String,
    order: i32,
    lesson_id: i64,
    language_id: i64,
    content: Value,
}

impl TryFrom<ExerciseDraftRecord> for ExerciseDraft {
    type Error = ContentError;

    fn try_from(record: ExerciseDraftRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            content: ExerciseContent::decode(record.exercise_type, record.content)?,
            id: record.id,
            exercise_type: record.exercise_type,
            title: record.title,
            order: record.order,
            lesson_id: record.lesson_id,
            language_id: record.language_id,
        })
    }
}

impl ExerciseDraft {
    /// Set the exercise name; the title follows the content name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        match &mut self.content {
            ExerciseContent::Variants(c) => c.name = name.clone(),
            ExerciseContent::Pairs(c) => c.name = name.clone(),
            ExerciseContent::Other(_) => {}
        }
        self.title = name;
    }
}

/// Vocabulary entry, unique by `word` within a language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    pub word: String,
    #[serde(default)]
    pub audio_url: String,
    #[serde(default)]
    pub image_url: String,
}

impl VocabularyItem {
    pub fn new(
        word: impl Into<String>,
        audio_url: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            audio_url: audio_url.into(),
            image_url: image_url.into(),
        }
    }
}

/// Profile of the signed-in administrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Stored asset returned by the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub url: String,
}

/// Accent- and case-folded sort key: decomposed, combining marks dropped,
/// lowercased.
fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Locale-style string ordering.
///
/// Base letters decide first, then accents, then case with lowercase
/// ahead of uppercase. Exact comparison breaks any remaining tie.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| {
            let upper = |s: &str| s.chars().map(char::is_uppercase).collect::<Vec<_>>();
            upper(a).cmp(&upper(b))
        })
        .then_with(|| a.cmp(b))
}

/// Sort vocabulary ascending by word.
pub fn sort_vocabulary(items: &mut [VocabularyItem]) {
    items.sort_by(|a, b| locale_cmp(&a.word, &b.word));
}
