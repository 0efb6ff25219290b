//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository.
//! List queries are assembled from a filter by pure functions so the WHERE
//! clause only mentions the constraints that were supplied.

use bloom_core::content::{ContactFilter, EventFilter, GalleryFilter};

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Gallery table
CREATE TABLE IF NOT EXISTS gallery (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    image_url TEXT NOT NULL,
    category TEXT NOT NULL DEFAULT 'general',
    created_at TEXT NOT NULL,
    is_active INTEGER NOT NULL DEFAULT 1
);

-- Events table
CREATE TABLE IF NOT EXISTS events (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    date TEXT NOT NULL,
    time TEXT NOT NULL,
    location TEXT NOT NULL,
    image_url TEXT,
    category TEXT NOT NULL DEFAULT 'workshop',
    is_featured INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    is_active INTEGER NOT NULL DEFAULT 1
);

-- Contact messages table
CREATE TABLE IF NOT EXISTS contact_messages (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    message TEXT NOT NULL,
    created_at TEXT NOT NULL,
    is_read INTEGER NOT NULL DEFAULT 0
);

-- Status checks table
CREATE TABLE IF NOT EXISTS status_checks (
    id TEXT PRIMARY KEY,
    client_name TEXT NOT NULL,
    timestamp TEXT NOT NULL
);

-- Indexes for the list orderings
CREATE INDEX IF NOT EXISTS idx_gallery_created_at ON gallery(created_at);
CREATE INDEX IF NOT EXISTS idx_events_date ON events(date, created_at);
CREATE INDEX IF NOT EXISTS idx_contact_messages_created_at ON contact_messages(created_at);
"#;

// Gallery queries
const GALLERY_COLUMNS: &str = "id, title, description, image_url, category, created_at, is_active";

pub const INSERT_GALLERY_ITEM: &str = r#"
INSERT INTO gallery (id, title, description, image_url, category, created_at, is_active)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const SELECT_GALLERY_ITEM_BY_ID: &str = r#"
SELECT id, title, description, image_url, category, created_at, is_active
FROM gallery
WHERE id = ?1
"#;

pub const UPDATE_GALLERY_ITEM: &str = r#"
UPDATE gallery
SET title = ?2, description = ?3, image_url = ?4, category = ?5, is_active = ?6
WHERE id = ?1
"#;

pub const DELETE_GALLERY_ITEM: &str = r#"
DELETE FROM gallery
WHERE id = ?1
"#;

// Event queries
const EVENT_COLUMNS: &str =
    "id, title, description, date, time, location, image_url, category, is_featured, created_at, is_active";

pub const INSERT_EVENT: &str = r#"
INSERT INTO events (id, title, description, date, time, location, image_url, category, is_featured, created_at, is_active)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
"#;

pub const SELECT_EVENT_BY_ID: &str = r#"
SELECT id, title, description, date, time, location, image_url, category, is_featured, created_at, is_active
FROM events
WHERE id = ?1
"#;

pub const UPDATE_EVENT: &str = r#"
UPDATE events
SET title = ?2, description = ?3, date = ?4, time = ?5, location = ?6,
    image_url = ?7, category = ?8, is_featured = ?9, is_active = ?10
WHERE id = ?1
"#;

pub const DELETE_EVENT: &str = r#"
DELETE FROM events
WHERE id = ?1
"#;

// Contact message queries
const CONTACT_MESSAGE_COLUMNS: &str = "id, name, email, phone, message, created_at, is_read";

pub const INSERT_CONTACT_MESSAGE: &str = r#"
INSERT INTO contact_messages (id, name, email, phone, message, created_at, is_read)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const SELECT_CONTACT_MESSAGE_BY_ID: &str = r#"
SELECT id, name, email, phone, message, created_at, is_read
FROM contact_messages
WHERE id = ?1
"#;

pub const MARK_CONTACT_MESSAGE_READ: &str = r#"
UPDATE contact_messages
SET is_read = 1
WHERE id = ?1
"#;

pub const DELETE_CONTACT_MESSAGE: &str = r#"
DELETE FROM contact_messages
WHERE id = ?1
"#;

// Status check queries
pub const INSERT_STATUS_CHECK: &str = r#"
INSERT INTO status_checks (id, client_name, timestamp)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_STATUS_CHECKS: &str = r#"
SELECT id, client_name, timestamp
FROM status_checks
ORDER BY timestamp ASC
"#;

/// A SELECT statement together with its positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub sql: String,
    pub params: Vec<String>,
}

fn list_query(
    columns: &str,
    table: &str,
    conditions: Vec<String>,
    params: Vec<String>,
    order_by: &str,
) -> ListQuery {
    let mut sql = format!("SELECT {columns} FROM {table}");
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(" ORDER BY ");
    sql.push_str(order_by);
    ListQuery { sql, params }
}

/// Builds the gallery listing query, newest first.
pub fn select_gallery_items(filter: &GalleryFilter) -> ListQuery {
    let mut conditions = Vec::new();
    let mut params = Vec::new();
    if let Some(category) = &filter.category {
        params.push(category.clone());
        conditions.push(format!("category = ?{}", params.len()));
    }
    if filter.active_only {
        conditions.push("is_active = 1".to_string());
    }
    list_query(
        GALLERY_COLUMNS,
        "gallery",
        conditions,
        params,
        "created_at DESC",
    )
}

/// Builds the event listing query, by date then creation time.
pub fn select_events(filter: &EventFilter) -> ListQuery {
    let mut conditions = Vec::new();
    let mut params = Vec::new();
    if let Some(category) = &filter.category {
        params.push(category.clone());
        conditions.push(format!("category = ?{}", params.len()));
    }
    if filter.featured_only {
        conditions.push("is_featured = 1".to_string());
    }
    if filter.active_only {
        conditions.push("is_active = 1".to_string());
    }
    list_query(
        EVENT_COLUMNS,
        "events",
        conditions,
        params,
        "date ASC, created_at ASC",
    )
}

/// Builds the contact message listing query, newest first.
pub fn select_contact_messages(filter: ContactFilter) -> ListQuery {
    let conditions = if filter.unread_only {
        vec!["is_read = 0".to_string()]
    } else {
        Vec::new()
    };
    list_query(
        CONTACT_MESSAGE_COLUMNS,
        "contact_messages",
        conditions,
        Vec::new(),
        "created_at DESC",
    )
}
