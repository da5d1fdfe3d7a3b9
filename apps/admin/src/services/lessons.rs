//! Lessons within modules.

use reqwest::Method;

use lingua_core::{Lesson, LessonDraft, Validate};

use super::LanguageQuery;
use crate::error::Result;
use crate::http::ApiClient;
use crate::store::Store;

#[derive(Clone)]
pub struct LessonService {
    client: ApiClient,
    lessons: Store<Lesson>,
}

impl LessonService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            lessons: Store::new(),
        }
    }

    /// GET /learning/lessons?languageId=
    pub async fn fetch(&self, language_id: i64) -> Result<Vec<Lesson>> {
        let lessons: Vec<Lesson> = self
            .client
            .get_query("/learning/lessons", &LanguageQuery { language_id })
            .await?;
        tracing::debug!(language_id, count = lessons.len(), "lessons fetched");
        self.lessons.replace(lessons.clone()).await;
        Ok(lessons)
    }

    pub async fn lessons(&self) -> Vec<Lesson> {
        self.lessons.snapshot().await
    }

    pub async fn find(&self, id: i64) -> Option<Lesson> {
        self.lessons.find(|l| l.id == id).await
    }

    /// Lessons of one module, from the cache.
    pub async fn by_module(&self, module_id: i64) -> Vec<Lesson> {
        self.lessons
            .snapshot()
            .await
            .into_iter()
            .filter(|l| l.module_id == Some(module_id))
            .collect()
    }

    /// PATCH an existing lesson or PUT a new one.
    pub async fn save(&self, draft: &LessonDraft) -> Result<Vec<Lesson>> {
        draft.validate()?;

        match draft.id {
            Some(id) => {
                self.client
                    .send_json(Method::PATCH, &format!("/learning/lessons/{}", id), draft)
                    .await?;
                tracing::info!(id, title = %draft.title, "lesson updated");
            }
            None => {
                self.client
                    .send_json(Method::PUT, "/learning/lessons", draft)
                    .await?;
                tracing::info!(title = %draft.title, "lesson created");
            }
        }

        self.fetch(draft.language_id).await
    }

    pub async fn delete(&self, id: i64, language_id: i64) -> Result<Vec<Lesson>> {
        self.client
            .send_empty(Method::DELETE, &format!("/learning/lessons/{}", id))
            .await?;
        tracing::info!(id, "lesson deleted");

        self.fetch(language_id).await
    }
}
