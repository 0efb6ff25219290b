//! DynamoDB key generation functions.
//!
//! Pure functions for generating partition and sort keys following the single-table design.
//! Every collection lives in its own partition (`PK` = collection name) and each record
//! is addressed by a prefixed sort key. All functions are sync and have no side effects.

use bloom_core::storage::Collection;
use uuid::Uuid;

// ============================================================================
// Key prefixes
// ============================================================================

pub const GALLERY_PREFIX: &str = "GALLERY#";
pub const EVENT_PREFIX: &str = "EVENT#";
pub const MESSAGE_PREFIX: &str = "MESSAGE#";
pub const STATUS_PREFIX: &str = "STATUS#";

/// Partition key holding every record of a collection.
///
/// Pattern: `<collection name>`, e.g. `gallery`
pub fn collection_pk(collection: Collection) -> String {
    collection.table_name().to_string()
}

/// Sort-key prefix for records of a collection.
pub fn sk_prefix(collection: Collection) -> &'static str {
    match collection {
        Collection::Gallery => GALLERY_PREFIX,
        Collection::Events => EVENT_PREFIX,
        Collection::ContactMessages => MESSAGE_PREFIX,
        Collection::StatusChecks => STATUS_PREFIX,
    }
}

/// Generate sort key for a record.
///
/// Pattern: `<PREFIX>#<id>`
pub fn record_sk(collection: Collection, id: Uuid) -> String {
    format!("{}{id}", sk_prefix(collection))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> Uuid {
        Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap()
    }

    #[test]
    fn test_collection_pk() {
        assert_eq!(collection_pk(Collection::Gallery), "gallery");
        assert_eq!(collection_pk(Collection::ContactMessages), "contact_messages");
    }

    #[test]
    fn test_gallery_sk() {
        assert_eq!(
            record_sk(Collection::Gallery, id()),
            "GALLERY#550e8400-e29b-41d4-a716-446655440001"
        );
    }

    #[test]
    fn test_event_sk() {
        assert_eq!(
            record_sk(Collection::Events, id()),
            "EVENT#550e8400-e29b-41d4-a716-446655440001"
        );
    }

    #[test]
    fn test_message_and_status_sk() {
        assert_eq!(
            record_sk(Collection::ContactMessages, id()),
            "MESSAGE#550e8400-e29b-41d4-a716-446655440001"
        );
        assert_eq!(
            record_sk(Collection::StatusChecks, id()),
            "STATUS#550e8400-e29b-41d4-a716-446655440001"
        );
    }

    #[test]
    fn test_prefixes() {
        // All prefixes end with # for consistent parsing
        for collection in Collection::ALL {
            assert!(sk_prefix(collection).ends_with('#'));
        }
    }
}
