use serde::{Deserialize, Serialize};

use super::functions::hash_password;

/// The one admin principal: a username and the SHA-256 hex digest of its password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password_hash: String,
}

impl AdminCredentials {
    pub const DEFAULT_USERNAME: &'static str = "admin";
    const DEFAULT_PASSWORD: &'static str = "bloom2024";

    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into().trim().to_ascii_lowercase(),
        }
    }

    /// Builds credentials from a plaintext password.
    pub fn from_password(username: impl Into<String>, password: &str) -> Self {
        Self::new(username, hash_password(password))
    }

    /// Digest of the built-in default password.
    pub fn default_password_hash() -> String {
        hash_password(Self::DEFAULT_PASSWORD)
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::new(Self::DEFAULT_USERNAME, Self::default_password_hash())
    }
}

/// Body of `POST /admin/login`.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub message: String,
}

impl LoginResponse {
    pub fn success(token: String) -> Self {
        Self {
            success: true,
            token: Some(token),
            message: "Login successful".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_credentials() {
        let creds = AdminCredentials::default();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password_hash, hash_password("bloom2024"));
    }

    #[test]
    fn test_new_normalizes_hash_case() {
        let creds = AdminCredentials::new("admin", "ABCDEF");
        assert_eq!(creds.password_hash, "abcdef");
    }

    #[test]
    fn test_new_trims_surrounding_whitespace() {
        let digest = hash_password("bloom2024");
        let creds = AdminCredentials::new("admin", format!("  {}\n", digest.to_uppercase()));
        assert_eq!(creds.password_hash, digest);
    }

    #[test]
    fn test_login_request_debug_redacts_password() {
        let request = LoginRequest::new("admin", "bloom2024");
        let debug = format!("{request:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("bloom2024"));
    }
}
