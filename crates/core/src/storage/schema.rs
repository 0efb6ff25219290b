//! Collection names and the relational table layout shared by every backend.

pub const GALLERY_TABLE: &str = "gallery";
pub const EVENTS_TABLE: &str = "events";
pub const CONTACT_MESSAGES_TABLE: &str = "contact_messages";
pub const STATUS_CHECKS_TABLE: &str = "status_checks";

/// The four record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Gallery,
    Events,
    ContactMessages,
    StatusChecks,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Gallery,
        Collection::Events,
        Collection::ContactMessages,
        Collection::StatusChecks,
    ];

    /// Table (or partition) name of the collection.
    pub const fn table_name(self) -> &'static str {
        match self {
            Collection::Gallery => GALLERY_TABLE,
            Collection::Events => EVENTS_TABLE,
            Collection::ContactMessages => CONTACT_MESSAGES_TABLE,
            Collection::StatusChecks => STATUS_CHECKS_TABLE,
        }
    }

    /// Human readable record name used in error messages.
    pub const fn entity_type(self) -> &'static str {
        match self {
            Collection::Gallery => "Gallery item",
            Collection::Events => "Event",
            Collection::ContactMessages => "Message",
            Collection::StatusChecks => "Status check",
        }
    }
}

/// PostgreSQL DDL an operator runs once before using the PostgREST backend.
pub const TABLE_DEFINITIONS: &str = r#"
-- Gallery table
CREATE TABLE IF NOT EXISTS gallery (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    image_url TEXT NOT NULL,
    category TEXT DEFAULT 'general',
    created_at TIMESTAMPTZ DEFAULT NOW(),
    is_active BOOLEAN DEFAULT TRUE
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
    category TEXT DEFAULT 'workshop',
    is_featured BOOLEAN DEFAULT FALSE,
    created_at TIMESTAMPTZ DEFAULT NOW(),
    is_active BOOLEAN DEFAULT TRUE
);

-- Contact messages table
CREATE TABLE IF NOT EXISTS contact_messages (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    message TEXT NOT NULL,
    created_at TIMESTAMPTZ DEFAULT NOW(),
    is_read BOOLEAN DEFAULT FALSE
);

-- Status checks table
CREATE TABLE IF NOT EXISTS status_checks (
    id TEXT PRIMARY KEY,
    client_name TEXT NOT NULL,
    timestamp TIMESTAMPTZ DEFAULT NOW()
);
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_definitions_cover_every_collection() {
        for collection in Collection::ALL {
            let statement = format!("CREATE TABLE IF NOT EXISTS {} (", collection.table_name());
            assert!(
                TABLE_DEFINITIONS.contains(&statement),
                "missing table {}",
                collection.table_name()
            );
        }
    }

    #[test]
    fn test_entity_types_are_distinct() {
        let mut names: Vec<_> = Collection::ALL.iter().map(|c| c.entity_type()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
