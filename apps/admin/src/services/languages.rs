//! Languages and their alphabets.

use std::sync::Arc;

use reqwest::Method;
use tokio::sync::RwLock;

use lingua_core::{language_code, Language, LanguageDraft, Validate};

use crate::error::{ClientError, Result};
use crate::http::ApiClient;
use crate::store::Store;

#[derive(Clone)]
pub struct LanguageService {
    client: ApiClient,
    languages: Store<Language>,
    active: Arc<RwLock<Option<Language>>>,
}

impl LanguageService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            languages: Store::new(),
            active: Arc::new(RwLock::new(None)),
        }
    }

    /// GET /languages. Alphabets come back sorted by `order`; the active
    /// language is swapped for its fresh copy.
    pub async fn fetch_all(&self) -> Result<Vec<Language>> {
        let mut languages: Vec<Language> = self.client.get("/languages").await?;
        for language in &mut languages {
            language.sort_alphabet();
        }
        tracing::debug!(count = languages.len(), "languages fetched");

        self.languages.replace(languages.clone()).await;

        let mut active = self.active.write().await;
        if let Some(active_id) = active.as_ref().map(|l| l.id) {
            *active = languages.iter().find(|l| l.id == active_id).cloned();
        }

        Ok(languages)
    }

    /// Cached languages from the last fetch.
    pub async fn languages(&self) -> Vec<Language> {
        self.languages.snapshot().await
    }

    pub async fn find_by_code(&self, code: &str) -> Option<Language> {
        self.languages.find(|l| l.code == code).await
    }

    /// Make the cached language with `code` the active one.
    pub async fn set_active(&self, code: &str) -> Result<Language> {
        let language = self
            .find_by_code(code)
            .await
            .ok_or_else(|| ClientError::NotFound(format!("language {}", code)))?;
        *self.active.write().await = Some(language.clone());
        Ok(language)
    }

    pub async fn active(&self) -> Option<Language> {
        self.active.read().await.clone()
    }

    pub async fn clear_active(&self) {
        *self.active.write().await = None;
    }

    /// Create or update a language. New languages get a code derived from
    /// their name.
    pub async fn save(&self, draft: &LanguageDraft) -> Result<Vec<Language>> {
        draft.validate()?;

        match draft.id {
            Some(id) => {
                self.client
                    .send_json(Method::PATCH, &format!("/languages/{}", id), draft)
                    .await?;
                tracing::info!(id, name = %draft.name, "language updated");
            }
            None => {
                let mut payload = draft.clone();
                payload.code = Some(language_code(&draft.name));
                self.client
                    .send_json(Method::POST, "/languages", &payload)
                    .await?;
                tracing::info!(name = %draft.name, code = ?payload.code, "language created");
            }
        }

        self.fetch_all().await
    }

    /// Delete a language and drop it from the cache by re-fetching.
    pub async fn delete(&self, id: i64) -> Result<Vec<Language>> {
        self.client
            .send_empty(Method::DELETE, &format!("/languages/{}", id))
            .await?;
        tracing::info!(id, "language deleted");

        self.fetch_all().await
    }
}
