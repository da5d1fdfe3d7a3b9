//! Learning modules.

use reqwest::Method;

use lingua_core::{Module, ModuleDraft, Validate};

use super::LanguageQuery;
use crate::error::Result;
use crate::http::ApiClient;
use crate::store::Store;

#[derive(Clone)]
pub struct ModuleService {
    client: ApiClient,
    modules: Store<Module>,
}

impl ModuleService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            modules: Store::new(),
        }
    }

    /// GET /learning/modules?languageId=
    pub async fn fetch(&self, language_id: i64) -> Result<Vec<Module>> {
        let modules: Vec<Module> = self
            .client
            .get_query("/learning/modules", &LanguageQuery { language_id })
            .await?;
        tracing::debug!(language_id, count = modules.len(), "modules fetched");
        self.modules.replace(modules.clone()).await;
        Ok(modules)
    }

    pub async fn modules(&self) -> Vec<Module> {
        self.modules.snapshot().await
    }

    pub async fn find(&self, id: i64) -> Option<Module> {
        self.modules.find(|m| m.id == id).await
    }

    /// PATCH an existing module or PUT a new one.
    pub async fn save(&self, draft: &ModuleDraft) -> Result<Vec<Module>> {
        draft.validate()?;

        match draft.id {
            Some(id) => {
                self.client
                    .send_json(Method::PATCH, &format!("/learning/modules/{}", id), draft)
                    .await?;
                tracing::info!(id, title = %draft.title, "module updated");
            }
            None => {
                self.client
                    .send_json(Method::PUT, "/learning/modules", draft)
                    .await?;
                tracing::info!(title = %draft.title, "module created");
            }
        }

        self.fetch(draft.language_id).await
    }

    pub async fn delete(&self, id: i64, language_id: i64) -> Result<Vec<Module>> {
        self.client
            .send_empty(Method::DELETE, &format!("/learning/modules/{}", id))
            .await?;
        tracing::info!(id, "module deleted");

        self.fetch(language_id).await
    }
}
