pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod services;
pub mod store;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::auth::AuthService;
use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::http::ApiClient;
use crate::services::{
    ExerciseService, FileService, LanguageService, LessonService, ModuleService,
    VocabularyService,
};

/// Everything an admin session needs, sharing one API client.
#[derive(Clone)]
pub struct AdminClient {
    pub config: Config,
    pub client: ApiClient,
    pub auth: AuthService,
    pub languages: LanguageService,
    pub modules: ModuleService,
    pub lessons: LessonService,
    pub exercises: ExerciseService,
    pub vocabulary: VocabularyService,
    pub files: FileService,
}

impl AdminClient {
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::new(&config)?;
        Ok(Self {
            auth: AuthService::new(client.clone()),
            languages: LanguageService::new(client.clone()),
            modules: ModuleService::new(client.clone()),
            lessons: LessonService::new(client.clone()),
            exercises: ExerciseService::new(client.clone()),
            vocabulary: VocabularyService::new(client.clone()),
            files: FileService::new(client.clone()),
            client,
            config,
        })
    }

    /// Log in with configured credentials, or resume a session from the
    /// refresh cookie.
    pub async fn authenticate(&self) -> Result<()> {
        if let Some(credentials) = &self.config.credentials {
            self.auth
                .login(&credentials.email, &credentials.password)
                .await?;
            return Ok(());
        }

        if self.auth.refresh(false).await {
            Ok(())
        } else {
            Err(ClientError::NotAuthenticated)
        }
    }
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = cli::Cli::parse();
    let config = Config::from_env()?;

    tracing::info!(api_url = %config.api_url, "connecting to CMS");
    let admin = AdminClient::new(config)?;
    admin.authenticate().await?;

    let refresh = admin.auth.spawn_refresh_loop(admin.config.refresh_interval);
    let outcome = cli::execute(&admin, cli.command, &mut std::io::stdout()).await;
    refresh.abort();

    outcome
}
