//! Placeholder admin login.
//!
//! A single configured principal, checked by SHA-256 digest. Tokens handed out
//! on success are opaque and never verified afterwards.

mod error;
mod functions;
mod types;

pub use error::AuthError;
pub use functions::{generate_token, hash_password, login, sha256_hex, verify_credentials};
pub use types::{AdminCredentials, LoginRequest, LoginResponse};
