//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{
    LanguageService, LanguageServiceImpl, MatchService, MatchServiceImpl, MessageService,
    MessageServiceImpl, ProfileService, ProfileServiceImpl, UserService, UserServiceImpl,
};
use crate::config::Settings;
use crate::infrastructure::{database, Repositories, StorageBackend};
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub messages: Arc<dyn MessageService>,
    pub users: Arc<dyn UserService>,
    pub profiles: Arc<dyn ProfileService>,
    pub languages: Arc<dyn LanguageService>,
    pub matches: Arc<dyn MatchService>,
    pub backend: StorageBackend,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire every service to the given repositories.
    pub fn new(repos: Repositories, settings: Settings) -> Self {
        Self {
            messages: Arc::new(MessageServiceImpl::new(
                repos.messages.clone(),
                repos.matches.clone(),
                repos.users.clone(),
            )),
            users: Arc::new(UserServiceImpl::new(repos.users.clone())),
            profiles: Arc::new(ProfileServiceImpl::new(
                repos.profiles.clone(),
                repos.users.clone(),
            )),
            languages: Arc::new(LanguageServiceImpl::new(
                repos.languages.clone(),
                repos.users.clone(),
            )),
            matches: Arc::new(MatchServiceImpl::new(repos.matches, repos.users)),
            backend: repos.backend,
            settings: Arc::new(settings),
        }
    }
}

/// Full router with every middleware layer applied.
pub fn build_router(state: AppState) -> Router {
    let cors_layer = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors_layer)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let repos = match settings.database.url.as_deref() {
            Some(url) => {
                let pool = database::create_pool(&settings.database, url)
                    .await
                    .context("failed to connect to PostgreSQL")?;
                tracing::info!("Database connection pool created");
                Repositories::postgres(pool)
            }
            None => {
                tracing::warn!("No database URL configured, using the in-memory store");
                Repositories::in_memory()
            }
        };
        tracing::info!(backend = repos.backend.name(), "Storage ready");

        health::init_server_start();

        let addr = settings
            .server
            .socket_addr()
            .context("invalid server address configuration")?;
        let router = build_router(AppState::new(repos, settings));

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until Ctrl-C is received
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Server shut down");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
