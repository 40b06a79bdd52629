//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database repositories (PostgreSQL)
//! - An in-memory store implementing the same repository traits
//! - Prometheus metrics

pub mod database;
pub mod memory;
pub mod metrics;
pub mod repositories;

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::{
    MatchRepository, MessageRepository, ProfileRepository, UserLanguageRepository, UserRepository,
};
use memory::MemoryStore;
use repositories::{
    PgMatchRepository, PgMessageRepository, PgProfileRepository, PgUserLanguageRepository,
    PgUserRepository,
};

/// Which store backs the repositories.
#[derive(Clone)]
pub enum StorageBackend {
    Postgres(PgPool),
    Memory,
}

impl StorageBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StorageBackend::Postgres(_) => "postgres",
            StorageBackend::Memory => "memory",
        }
    }
}

/// Every repository the services depend on, bound to one backend.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub matches: Arc<dyn MatchRepository>,
    pub messages: Arc<dyn MessageRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub languages: Arc<dyn UserLanguageRepository>,
    pub backend: StorageBackend,
}

impl Repositories {
    /// PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            matches: Arc::new(PgMatchRepository::new(pool.clone())),
            messages: Arc::new(PgMessageRepository::new(pool.clone())),
            profiles: Arc::new(PgProfileRepository::new(pool.clone())),
            languages: Arc::new(PgUserLanguageRepository::new(pool.clone())),
            backend: StorageBackend::Postgres(pool),
        }
    }

    /// Repositories backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::from_memory(Arc::new(MemoryStore::new()))
    }

    /// Repositories backed by an existing in-memory store.
    pub fn from_memory(store: Arc<MemoryStore>) -> Self {
        Self {
            users: store.clone(),
            matches: store.clone(),
            messages: store.clone(),
            profiles: store.clone(),
            languages: store,
            backend: StorageBackend::Memory,
        }
    }
}
