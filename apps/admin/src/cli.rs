//! Command-line front end.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use lingua_core::{check_relations, ExerciseType, Highlighter, Language, Token};

use crate::AdminClient;

/// Administer languages, learning content and vocabulary of the CMS.
#[derive(Parser)]
#[command(name = "lingua-admin", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List languages with their alphabets.
    Languages,

    /// List the modules of a language.
    Modules {
        /// Language code (e.g. "che").
        #[arg(short, long)]
        language: String,
    },

    /// List the lessons of a language.
    Lessons {
        #[arg(short, long)]
        language: String,
    },

    /// List exercises of one type.
    Exercises {
        #[arg(short, long)]
        language: String,

        /// Exercise type (e.g. MATCHING, multiple_choice).
        #[arg(short = 't', long = "type")]
        exercise_type: ExerciseType,
    },

    /// List the vocabulary of a language.
    Vocabulary {
        #[arg(short, long)]
        language: String,
    },

    /// Split a word into alphabet letters and mark one of them.
    Highlight {
        #[arg(short, long)]
        language: String,

        /// Letter to mark.
        #[arg(long)]
        letter: String,

        word: String,
    },

    /// Upload an audio or image file.
    Upload { path: PathBuf },

    /// Report broken links between modules, lessons and exercises.
    Check {
        #[arg(short, long)]
        language: String,
    },

    /// Delete a language by code.
    DeleteLanguage { code: String },
}

async fn select_language(admin: &AdminClient, code: &str) -> Result<Language> {
    admin.languages.fetch_all().await?;
    let language = admin
        .languages
        .set_active(code)
        .await
        .with_context(|| format!("no language with code {:?}", code))?;
    Ok(language)
}

/// Marked letters are wrapped in brackets.
pub fn render_tokens(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|t| {
            if t.is_target {
                format!("[{}]", t.text)
            } else {
                t.text.to_string()
            }
        })
        .collect()
}

/// Run one command, writing its report to `out`.
pub async fn execute<W: Write>(
    admin: &AdminClient,
    command: Command,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Languages => {
            for language in admin.languages.fetch_all().await? {
                let letters: Vec<&str> = language.letters().collect();
                writeln!(
                    out,
                    "{:<6} {:<20} {}",
                    language.code,
                    language.name,
                    letters.join(" ")
                )?;
            }
        }
        Command::Modules { language } => {
            let language = select_language(admin, &language).await?;
            for module in admin.modules.fetch(language.id).await? {
                writeln!(
                    out,
                    "#{:<5} {:>3}. {} ({} lessons)",
                    module.id,
                    module.order,
                    module.title,
                    module.lesson_ids().len()
                )?;
            }
        }
        Command::Lessons { language } => {
            let language = select_language(admin, &language).await?;
            for lesson in admin.lessons.fetch(language.id).await? {
                let module = lesson
                    .module_id
                    .map(|id| format!("module #{}", id))
                    .unwrap_or_else(|| "no module".to_string());
                writeln!(
                    out,
                    "#{:<5} {:>3}. {} [{}]",
                    lesson.id, lesson.order, lesson.title, module
                )?;
            }
        }
        Command::Exercises {
            language,
            exercise_type,
        } => {
            let language = select_language(admin, &language).await?;
            let exercises = admin
                .exercises
                .fetch(language.id, Some(exercise_type))
                .await?;
            for exercise in exercises {
                let lesson = exercise
                    .lesson_id()
                    .map(|id| format!("lesson #{}", id))
                    .unwrap_or_else(|| "no lesson".to_string());
                writeln!(out, "#{:<5} {} [{}]", exercise.id, exercise.title, lesson)?;
            }
        }
        Command::Vocabulary { language } => {
            let language = select_language(admin, &language).await?;
            for item in admin.vocabulary.fetch(language.id).await? {
                writeln!(out, "{:<24} {}", item.word, item.audio_url)?;
            }
        }
        Command::Highlight {
            language,
            letter,
            word,
        } => {
            let language = select_language(admin, &language).await?;
            let highlighter = Highlighter::new(&language.alphabet)?;
            writeln!(out, "{}", render_tokens(&highlighter.highlight(&word, &letter)))?;
        }
        Command::Upload { path } => {
            let uploaded = admin.files.upload_path(&path).await?;
            writeln!(out, "{}", admin.files.resolve(&uploaded))?;
        }
        Command::Check { language } => {
            let language = select_language(admin, &language).await?;
            let modules = admin.modules.fetch(language.id).await?;
            let lessons = admin.lessons.fetch(language.id).await?;
            let mut exercises = Vec::new();
            for ty in ExerciseType::ALL {
                exercises.extend(admin.exercises.fetch(language.id, Some(ty)).await?);
            }

            let issues = check_relations(language.id, &modules, &lessons, &exercises);
            if issues.is_empty() {
                writeln!(out, "no issues in {}", language.name)?;
            }
            for issue in &issues {
                writeln!(out, "{}", issue)?;
            }
        }
        Command::DeleteLanguage { code } => {
            let language = select_language(admin, &code).await?;
            admin.languages.delete(language.id).await?;
            tracing::info!(code = %language.code, "language removed");
            writeln!(out, "deleted {} ({})", language.name, language.code)?;
        }
    }

    Ok(())
}
