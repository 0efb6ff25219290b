use std::env;

use bloom_core::admin::AdminCredentials;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "bloom.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// DynamoDB table holding every collection (default: "bloom")
    #[allow(dead_code)]
    pub dynamodb_table_name: String,
    /// Base URL of the Supabase project (default: "http://localhost:54321")
    #[allow(dead_code)]
    pub supabase_url: String,
    /// Supabase API key, sent on every PostgREST request (default: empty)
    #[allow(dead_code)]
    pub supabase_key: String,
    /// Admin login username (default: "admin")
    pub admin_username: String,
    /// SHA-256 hex digest of the admin password
    pub admin_password_hash: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "bloom.db")
    /// - `DYNAMODB_TABLE_NAME` - DynamoDB table name (default: "bloom")
    /// - `SUPABASE_URL` - Supabase base URL (default: "http://localhost:54321")
    /// - `SUPABASE_KEY` - Supabase API key (default: "")
    /// - `ADMIN_USERNAME` - Admin username (default: "admin")
    /// - `ADMIN_PASSWORD_HASH` - Admin password digest (default: digest of "bloom2024")
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "bloom.db".to_string()),
            dynamodb_table_name: env::var("DYNAMODB_TABLE_NAME")
                .unwrap_or_else(|_| "bloom".to_string()),
            supabase_url: env::var("SUPABASE_URL")
                .unwrap_or_else(|_| "http://localhost:54321".to_string()),
            supabase_key: env::var("SUPABASE_KEY").unwrap_or_default(),
            admin_username: env::var("ADMIN_USERNAME")
                .unwrap_or_else(|_| AdminCredentials::DEFAULT_USERNAME.to_string()),
            admin_password_hash: env::var("ADMIN_PASSWORD_HASH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(AdminCredentials::default_password_hash),
        }
    }

    /// The admin principal described by this configuration.
    pub fn admin_credentials(&self) -> AdminCredentials {
        AdminCredentials::new(&self.admin_username, &self.admin_password_hash)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
