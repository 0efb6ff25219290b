//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use bloom_core::content::{ContactMessage, Event, GalleryItem, StatusCheck};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;
use uuid::Uuid;

/// Convert a SQLite row to a GalleryItem.
///
/// Expected columns: id, title, description, image_url, category, created_at, is_active
pub fn row_to_gallery_item(row: &Row) -> rusqlite::Result<GalleryItem> {
    let id: String = row.get(0)?;
    let title: String = row.get(1)?;
    let description: Option<String> = row.get(2)?;
    let image_url: String = row.get(3)?;
    let category: String = row.get(4)?;
    let created_at: String = row.get(5)?;
    let is_active: bool = row.get(6)?;

    Ok(GalleryItem {
        id: parse_uuid(&id)?,
        title,
        description: description.unwrap_or_default(),
        image_url,
        category,
        created_at: parse_datetime(&created_at)?,
        is_active,
    })
}

/// Convert a SQLite row to an Event.
///
/// Expected columns: id, title, description, date, time, location, image_url, category,
/// is_featured, created_at, is_active
pub fn row_to_event(row: &Row) -> rusqlite::Result<Event> {
    let id: String = row.get(0)?;
    let image_url: Option<String> = row.get(6)?;
    let created_at: String = row.get(9)?;

    Ok(Event {
        id: parse_uuid(&id)?,
        title: row.get(1)?,
        description: row.get(2)?,
        date: row.get(3)?,
        time: row.get(4)?,
        location: row.get(5)?,
        image_url: image_url.unwrap_or_default(),
        category: row.get(7)?,
        is_featured: row.get(8)?,
        created_at: parse_datetime(&created_at)?,
        is_active: row.get(10)?,
    })
}

/// Convert a SQLite row to a ContactMessage.
///
/// Expected columns: id, name, email, phone, message, created_at, is_read
pub fn row_to_contact_message(row: &Row) -> rusqlite::Result<ContactMessage> {
    let id: String = row.get(0)?;
    let phone: Option<String> = row.get(3)?;
    let created_at: String = row.get(5)?;

    Ok(ContactMessage {
        id: parse_uuid(&id)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: phone.unwrap_or_default(),
        message: row.get(4)?,
        created_at: parse_datetime(&created_at)?,
        is_read: row.get(6)?,
    })
}

/// Convert a SQLite row to a StatusCheck.
///
/// Expected columns: id, client_name, timestamp
pub fn row_to_status_check(row: &Row) -> rusqlite::Result<StatusCheck> {
    let id: String = row.get(0)?;
    let client_name: String = row.get(1)?;
    let timestamp: String = row.get(2)?;

    Ok(StatusCheck {
        id: parse_uuid(&id)?,
        client_name,
        timestamp: parse_datetime(&timestamp)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Parse a UUID from string.
fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime<Utc> for SQLite storage.
///
/// Fixed-width microsecond RFC 3339 so text ordering matches time ordering.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime_is_fixed_width() {
        let whole = DateTime::parse_from_rfc3339("2024-06-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let fractional = DateTime::parse_from_rfc3339("2024-06-15T10:30:00.5Z")
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(format_datetime(&whole), "2024-06-15T10:30:00.000000Z");
        assert_eq!(format_datetime(&fractional), "2024-06-15T10:30:00.500000Z");
        assert!(format_datetime(&whole) < format_datetime(&fractional));
    }

    #[test]
    fn test_format_then_parse_preserves_microseconds() {
        let now = bloom_core::content::now_timestamp();
        let parsed = parse_datetime(&format_datetime(&now)).unwrap();
        assert_eq!(parsed, now);
    }

    #[test]
    fn test_parse_uuid_valid() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let result = parse_uuid(uuid_str);
        assert!(result.is_ok());
        assert_eq!(result.unwrap().to_string(), uuid_str);
    }

    #[test]
    fn test_parse_uuid_invalid() {
        let result = parse_uuid("not-a-uuid");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_datetime_valid() {
        let result = parse_datetime("2024-06-15T10:30:00Z");
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_datetime_invalid() {
        let result = parse_datetime("not-a-datetime");
        assert!(result.is_err());
    }

    #[test]
    fn test_row_to_gallery_item_null_description() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let item = conn
            .query_row(
                "SELECT '550e8400-e29b-41d4-a716-446655440000', 'Harvest', NULL, 'a.jpg', \
                 'farms', '2024-06-15T10:30:00.000000Z', 1",
                [],
                row_to_gallery_item,
            )
            .unwrap();

        assert_eq!(item.title, "Harvest");
        assert_eq!(item.description, "");
        assert!(item.is_active);
    }

    #[test]
    fn test_row_to_contact_message_bad_id() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let result = conn.query_row(
            "SELECT 'nope', 'A', 'a@x.com', NULL, 'hi', '2024-06-15T10:30:00.000000Z', 0",
            [],
            row_to_contact_message,
        );

        assert!(matches!(
            result,
            Err(rusqlite::Error::FromSqlConversionFailure(..))
        ));
    }
}
