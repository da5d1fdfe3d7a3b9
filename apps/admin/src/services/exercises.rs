//! Exercises, filtered by language and type.

use reqwest::Method;
use serde::Serialize;

use lingua_core::{check_draft, Exercise, ExerciseDraft, ExerciseType};

use crate::error::Result;
use crate::http::ApiClient;
use crate::store::Store;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExerciseQuery {
    language_id: i64,
    #[serde(rename = "type")]
    exercise_type: ExerciseType,
}

#[derive(Clone)]
pub struct ExerciseService {
    client: ApiClient,
    exercises: Store<Exercise>,
}

impl ExerciseService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            exercises: Store::new(),
        }
    }

    /// GET /learning/exercises?languageId=&type=
    ///
    /// Without a type there is nothing to list: the cache is cleared and no
    /// request is made.
    pub async fn fetch(
        &self,
        language_id: i64,
        exercise_type: Option<ExerciseType>,
    ) -> Result<Vec<Exercise>> {
        let Some(exercise_type) = exercise_type else {
            self.exercises.clear().await;
            return Ok(Vec::new());
        };

        let query = ExerciseQuery {
            language_id,
            exercise_type,
        };
        let exercises: Vec<Exercise> = self.client.get_query("/learning/exercises", &query).await?;
        tracing::debug!(
            language_id,
            %exercise_type,
            count = exercises.len(),
            "exercises fetched"
        );
        self.exercises.replace(exercises.clone()).await;
        Ok(exercises)
    }

    pub async fn exercises(&self) -> Vec<Exercise> {
        self.exercises.snapshot().await
    }

    pub async fn find(&self, id: i64) -> Option<Exercise> {
        self.exercises.find(|e| e.id == id).await
    }

    /// Validate the content against its type, then PATCH or PUT.
    ///
    /// The saved title is the content name whenever one is set.
    pub async fn save(&self, draft: &ExerciseDraft) -> Result<Vec<Exercise>> {
        check_draft(draft)?;

        let mut payload = draft.clone();
        if let Some(name) = draft.content.name().filter(|n| !n.is_empty()) {
            payload.title = name.to_string();
        }

        match draft.id {
            Some(id) => {
                self.client
                    .send_json(Method::PATCH, &format!("/learning/exercises/{}", id), &payload)
                    .await?;
                tracing::info!(id, exercise_type = %draft.exercise_type, "exercise updated");
            }
            None => {
                self.client
                    .send_json(Method::PUT, "/learning/exercises", &payload)
                    .await?;
                tracing::info!(
                    exercise_type = %draft.exercise_type,
                    title = %payload.title,
                    "exercise created"
                );
            }
        }

        self.fetch(draft.language_id, Some(draft.exercise_type)).await
    }

    pub async fn delete(
        &self,
        id: i64,
        language_id: i64,
        exercise_type: ExerciseType,
    ) -> Result<Vec<Exercise>> {
        self.client
            .send_empty(Method::DELETE, &format!("/learning/exercises/{}", id))
            .await?;
        tracing::info!(id, "exercise deleted");

        self.fetch(language_id, Some(exercise_type)).await
    }
}
