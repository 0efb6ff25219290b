//! Supabase storage backend implementation.
//!
//! Talks to the project's PostgREST endpoint (`/rest/v1/<table>`) over HTTP
//! using `reqwest`. Tables are expected to match the layout returned by
//! `POST /api/init-tables`.

mod error;
mod query;
mod repository;

pub use repository::SupabaseRepository;
