//! Per-entity services sharing one API client.
//!
//! Each service owns the cached list for its entity. The active language is
//! always passed in explicitly. After every successful mutation the list is
//! fetched again and the cache replaced.

pub mod exercises;
pub mod files;
pub mod languages;
pub mod lessons;
pub mod modules;
pub mod vocabulary;

use serde::Serialize;

pub use exercises::ExerciseService;
pub use files::FileService;
pub use languages::LanguageService;
pub use lessons::LessonService;
pub use modules::ModuleService;
pub use vocabulary::VocabularyService;

/// `?languageId=` filter shared by the learning endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LanguageQuery {
    pub language_id: i64,
}
