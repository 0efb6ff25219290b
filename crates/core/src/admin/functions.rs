use chrono::{DateTime, Utc};
use rand::{distr::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

use super::{AdminCredentials, AuthError, LoginRequest, LoginResponse};

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}

pub fn hash_password(password: &str) -> String {
    sha256_hex(password.as_bytes())
}

/// Check a login attempt against the configured principal.
pub fn verify_credentials(credentials: &AdminCredentials, request: &LoginRequest) -> bool {
    request.username == credentials.username
        && hash_password(&request.password) == credentials.password_hash
}

/// Generate an opaque bearer token for `username` issued at `issued_at`.
///
/// A random nonce keeps two logins in the same instant from colliding.
pub fn generate_token(username: &str, issued_at: DateTime<Utc>) -> String {
    let nonce: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect();
    sha256_hex(format!("{username}{}{nonce}", issued_at.to_rfc3339()).as_bytes())
}

/// Perform the login check and build the response.
pub fn login(
    credentials: &AdminCredentials,
    request: &LoginRequest,
    now: DateTime<Utc>,
) -> Result<LoginResponse, AuthError> {
    if !verify_credentials(credentials, request) {
        return Err(AuthError::InvalidCredentials);
    }
    Ok(LoginResponse::success(generate_token(
        &request.username,
        now,
    )))
}
