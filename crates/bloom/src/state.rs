//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds one repository trait object per collection and
//! selects the storage backend via feature flags.

use std::sync::Arc;

use bloom_core::admin::AdminCredentials;
use bloom_core::content::{ContactFilter, EventFilter, GalleryFilter};
use bloom_core::storage::{
    Collection, ContactRepository, EventRepository, GalleryRepository, StatusRepository,
};

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "sqlite", feature = "dynamodb"))]
compile_error!("Cannot enable both 'sqlite' and 'dynamodb' storage features");

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(all(feature = "sqlite", feature = "supabase"))]
compile_error!("Cannot enable both 'sqlite' and 'supabase' storage features");

#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!("Cannot enable both 'dynamodb' and 'inmemory' storage features");

#[cfg(all(feature = "dynamodb", feature = "supabase"))]
compile_error!("Cannot enable both 'dynamodb' and 'supabase' storage features");

#[cfg(all(feature = "inmemory", feature = "supabase"))]
compile_error!("Cannot enable both 'inmemory' and 'supabase' storage features");

#[cfg(not(any(
    feature = "inmemory",
    feature = "sqlite",
    feature = "dynamodb",
    feature = "supabase"
)))]
compile_error!(
    "Must enable exactly one storage feature: 'inmemory', 'sqlite', 'dynamodb', or 'supabase'"
);

/// Shared application state.
///
/// This is cloned for each request handler and contains the repository trait
/// objects for every collection plus the configured admin principal.
#[derive(Clone)]
pub struct AppState {
    pub gallery_repo: Arc<dyn GalleryRepository>,
    pub event_repo: Arc<dyn EventRepository>,
    pub contact_repo: Arc<dyn ContactRepository>,
    pub status_repo: Arc<dyn StatusRepository>,
    /// Admin principal checked by the login endpoint.
    pub admin: Arc<AdminCredentials>,
}

impl AppState {
    /// Creates a new AppState with the given repositories and credentials.
    pub fn build(
        gallery_repo: Arc<dyn GalleryRepository>,
        event_repo: Arc<dyn EventRepository>,
        contact_repo: Arc<dyn ContactRepository>,
        status_repo: Arc<dyn StatusRepository>,
        admin: AdminCredentials,
    ) -> Self {
        Self {
            gallery_repo,
            event_repo,
            contact_repo,
            status_repo,
            admin: Arc::new(admin),
        }
    }

    /// Creates AppState where one repository serves every collection.
    fn from_shared<R>(repo: Arc<R>, admin: AdminCredentials) -> Self
    where
        R: GalleryRepository
            + EventRepository
            + ContactRepository
            + StatusRepository
            + 'static,
    {
        Self::build(repo.clone(), repo.clone(), repo.clone(), repo, admin)
    }

    /// Lists every collection once and logs how many records it holds.
    ///
    /// Failures are logged and never abort startup.
    pub async fn log_collection_status(&self) {
        for collection in Collection::ALL {
            match self.count(collection).await {
                Ok(count) => tracing::info!(
                    collection = collection.table_name(),
                    count,
                    "Collection is reachable"
                ),
                Err(e) => tracing::warn!(
                    collection = collection.table_name(),
                    error = %e,
                    "Collection check failed"
                ),
            }
        }
    }

    async fn count(&self, collection: Collection) -> bloom_core::storage::Result<usize> {
        Ok(match collection {
            Collection::Gallery => self
                .gallery_repo
                .list_gallery_items(&GalleryFilter::all())
                .await?
                .len(),
            Collection::Events => self.event_repo.list_events(&EventFilter::all()).await?.len(),
            Collection::ContactMessages => self
                .contact_repo
                .list_contact_messages(ContactFilter::all())
                .await?
                .len(),
            Collection::StatusChecks => self.status_repo.list_status_checks().await?.len(),
        })
    }
}

// ============================================================================
// Backend-specific AppState constructors
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-process storage. Data is lost on exit.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            Ok(Self::from_shared(repo, config.admin_credentials()))
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            tracing::info!(path = %config.sqlite_path, "Opened SQLite database");
            Ok(Self::from_shared(repo, config.admin_credentials()))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(DynamoDbRepository::from_env(&config.dynamodb_table_name).await?);
            tracing::info!(table = %config.dynamodb_table_name, "Using DynamoDB table");
            Ok(Self::from_shared(repo, config.admin_credentials()))
        }
    }
}

#[cfg(feature = "supabase")]
mod supabase {
    use super::*;
    use crate::storage::SupabaseRepository;

    impl AppState {
        /// Creates AppState backed by a Supabase (PostgREST) project.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SupabaseRepository::new(
                &config.supabase_url,
                &config.supabase_key,
            )?);
            tracing::info!(url = %config.supabase_url, "Using Supabase project");
            Ok(Self::from_shared(repo, config.admin_credentials()))
        }
    }
}
