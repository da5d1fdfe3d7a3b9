//! Per-language vocabulary.

use reqwest::Method;
use serde::Serialize;

use lingua_core::{sort_vocabulary, Validate, VocabularyItem};

use crate::error::Result;
use crate::http::ApiClient;
use crate::store::Store;

#[derive(Debug, Serialize)]
struct WordKey<'a> {
    word: &'a str,
}

fn path(language_id: i64) -> String {
    format!("/languages/{}/vocabulary", language_id)
}

#[derive(Clone)]
pub struct VocabularyService {
    client: ApiClient,
    items: Store<VocabularyItem>,
}

impl VocabularyService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            items: Store::new(),
        }
    }

    /// GET /languages/:id/vocabulary, sorted by word.
    pub async fn fetch(&self, language_id: i64) -> Result<Vec<VocabularyItem>> {
        let mut items: Vec<VocabularyItem> = self.client.get(&path(language_id)).await?;
        sort_vocabulary(&mut items);
        tracing::debug!(language_id, count = items.len(), "vocabulary fetched");
        self.items.replace(items.clone()).await;
        Ok(items)
    }

    pub async fn items(&self) -> Vec<VocabularyItem> {
        self.items.snapshot().await
    }

    pub async fn find(&self, word: &str) -> Option<VocabularyItem> {
        self.items.find(|i| i.word == word).await
    }

    pub async fn save(&self, language_id: i64, item: &VocabularyItem) -> Result<Vec<VocabularyItem>> {
        item.validate()?;

        self.client
            .send_json(Method::POST, &path(language_id), item)
            .await?;
        tracing::info!(language_id, word = %item.word, "vocabulary word saved");

        self.fetch(language_id).await
    }

    /// Words are the key; the server expects it in the DELETE body.
    pub async fn delete(&self, language_id: i64, word: &str) -> Result<Vec<VocabularyItem>> {
        self.client
            .send_json(Method::DELETE, &path(language_id), &WordKey { word })
            .await?;
        tracing::info!(language_id, word, "vocabulary word deleted");

        self.fetch(language_id).await
    }
}
