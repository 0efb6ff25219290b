//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `bloom_core::storage`. The backend is selected at compile time
//! via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): process-local maps, lost on restart
//! - `sqlite`: SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `dynamodb`: AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//! - `supabase`: Supabase/PostgREST backend using `reqwest`
//!
//! Only one backend can be enabled at a time; see `state.rs` for the
//! compile-time checks.
//!
//! # Examples
//!
//! Build with SQLite:
//! ```bash
//! cargo build -p bloom --no-default-features --features sqlite
//! ```

#[cfg(any(test, feature = "inmemory"))]
mod inmemory;

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "dynamodb")]
mod dynamodb;

#[cfg(feature = "supabase")]
mod supabase;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

#[cfg(feature = "supabase")]
pub use supabase::SupabaseRepository;
