//! Cross-entity reference checks for one language's catalogue.
//!
//! Exercises point at a lesson, lessons at a module and a set of exercises,
//! modules at a set of lessons. Nothing guarantees these links server-side,
//! so the checks only report.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::types::{Exercise, Lesson, Module};

/// Kind of record a relation issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Module,
    Lesson,
    Exercise,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Module => "module",
            Self::Lesson => "lesson",
            Self::Exercise => "exercise",
        })
    }
}

/// A broken or suspicious link between records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelationIssue {
    /// Record belongs to another language than the one being checked.
    ForeignLanguage {
        kind: EntityKind,
        id: i64,
        language_id: i64,
    },
    /// Lesson without a module, or with one that does not exist.
    MissingModule { lesson_id: i64, module_id: Option<i64> },
    /// Module lists a lesson that does not exist.
    MissingLesson { module_id: i64, lesson_id: i64 },
    /// Lesson lists an exercise that does not exist.
    MissingExercise { lesson_id: i64, exercise_id: i64 },
    /// Exercise without a lesson, or with one that does not exist.
    OrphanExercise { exercise_id: i64, lesson_id: Option<i64> },
}

impl fmt::Display for RelationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForeignLanguage {
                kind,
                id,
                language_id,
            } => write!(f, "{} {} belongs to language {}", kind, id, language_id),
            Self::MissingModule {
                lesson_id,
                module_id: Some(module_id),
            } => write!(f, "lesson {} refers to unknown module {}", lesson_id, module_id),
            Self::MissingModule { lesson_id, .. } => {
                write!(f, "lesson {} has no module", lesson_id)
            }
            Self::MissingLesson {
                module_id,
                lesson_id,
            } => write!(f, "module {} lists unknown lesson {}", module_id, lesson_id),
            Self::MissingExercise {
                lesson_id,
                exercise_id,
            } => write!(
                f,
                "lesson {} lists unknown exercise {}",
                lesson_id, exercise_id
            ),
            Self::OrphanExercise {
                exercise_id,
                lesson_id: Some(lesson_id),
            } => write!(
                f,
                "exercise {} refers to unknown lesson {}",
                exercise_id, lesson_id
            ),
            Self::OrphanExercise { exercise_id, .. } => {
                write!(f, "exercise {} has no lesson", exercise_id)
            }
        }
    }
}

/// Check the links between one language's modules, lessons and exercises.
///
/// Issues are reported in a stable order: language scoping first, then
/// module, lesson and exercise links.
pub fn check_relations(
    language_id: i64,
    modules: &[Module],
    lessons: &[Lesson],
    exercises: &[Exercise],
) -> Vec<RelationIssue> {
    let mut issues = Vec::new();

    let scoped = modules
        .iter()
        .map(|m| (EntityKind::Module, m.id, m.language_id))
        .chain(lessons.iter().map(|l| (EntityKind::Lesson, l.id, l.language_id)))
        .chain(exercises.iter().map(|e| (EntityKind::Exercise, e.id, e.language_id)));
    for (kind, id, lang) in scoped {
        if lang != language_id {
            issues.push(RelationIssue::ForeignLanguage {
                kind,
                id,
                language_id: lang,
            });
        }
    }

    let module_ids: HashSet<i64> = modules.iter().map(|m| m.id).collect();
    let lesson_ids: HashSet<i64> = lessons.iter().map(|l| l.id).collect();
    let exercise_ids: HashSet<i64> = exercises.iter().map(|e| e.id).collect();

    for module in modules {
        for lesson_id in module.lesson_ids() {
            if !lesson_ids.contains(&lesson_id) {
                issues.push(RelationIssue::MissingLesson {
                    module_id: module.id,
                    lesson_id,
                });
            }
        }
    }

    for lesson in lessons {
        if !lesson.module_id.is_some_and(|id| module_ids.contains(&id)) {
            issues.push(RelationIssue::MissingModule {
                lesson_id: lesson.id,
                module_id: lesson.module_id,
            });
        }
        for exercise_id in lesson.exercise_ids() {
            if !exercise_ids.contains(&exercise_id) {
                issues.push(RelationIssue::MissingExercise {
                    lesson_id: lesson.id,
                    exercise_id,
                });
            }
        }
    }

    for exercise in exercises {
        let lesson_id = exercise.lesson_id();
        if !lesson_id.is_some_and(|id| lesson_ids.contains(&id)) {
            issues.push(RelationIssue::OrphanExercise {
                exercise_id: exercise.id,
                lesson_id,
            });
        }
    }

    issues
}
