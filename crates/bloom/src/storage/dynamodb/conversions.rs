//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use bloom_core::content::{ContactMessage, Event, GalleryItem, StatusCheck};
use bloom_core::storage::{Collection, RepositoryError};
use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use super::keys;

// ============================================================================
// Entity type constants
// ============================================================================

pub const ENTITY_TYPE_GALLERY_ITEM: &str = "GALLERY_ITEM";
pub const ENTITY_TYPE_EVENT: &str = "EVENT";
pub const ENTITY_TYPE_CONTACT_MESSAGE: &str = "CONTACT_MESSAGE";
pub const ENTITY_TYPE_STATUS_CHECK: &str = "STATUS_CHECK";

type Item = HashMap<String, AttributeValue>;

/// Starts an item with its keys and entity type.
fn keyed_item(collection: Collection, id: Uuid, entity_type: &str) -> Item {
    let mut item = HashMap::new();
    item.insert(
        "PK".to_string(),
        AttributeValue::S(keys::collection_pk(collection)),
    );
    item.insert(
        "SK".to_string(),
        AttributeValue::S(keys::record_sk(collection, id)),
    );
    item.insert(
        "entityType".to_string(),
        AttributeValue::S(entity_type.to_string()),
    );
    item.insert("id".to_string(), AttributeValue::S(id.to_string()));
    item
}

fn put_string(item: &mut Item, key: &str, value: &str) {
    item.insert(key.to_string(), AttributeValue::S(value.to_string()));
}

fn put_bool(item: &mut Item, key: &str, value: bool) {
    item.insert(key.to_string(), AttributeValue::Bool(value));
}

// ============================================================================
// Gallery conversions
// ============================================================================

/// Convert a GalleryItem to DynamoDB item.
pub fn gallery_item_to_item(gallery_item: &GalleryItem) -> Item {
    let mut item = keyed_item(
        Collection::Gallery,
        gallery_item.id,
        ENTITY_TYPE_GALLERY_ITEM,
    );
    put_string(&mut item, "title", &gallery_item.title);
    put_string(&mut item, "description", &gallery_item.description);
    put_string(&mut item, "image_url", &gallery_item.image_url);
    put_string(&mut item, "category", &gallery_item.category);
    put_string(
        &mut item,
        "created_at",
        &format_datetime(&gallery_item.created_at),
    );
    put_bool(&mut item, "is_active", gallery_item.is_active);
    item
}

/// Convert a DynamoDB item to GalleryItem.
pub fn item_to_gallery_item(item: &Item) -> Result<GalleryItem, RepositoryError> {
    Ok(GalleryItem {
        id: get_uuid(item, "id")?,
        title: get_string(item, "title")?,
        description: get_optional_string(item, "description").unwrap_or_default(),
        image_url: get_string(item, "image_url")?,
        category: get_optional_string(item, "category")
            .unwrap_or_else(|| GalleryItem::DEFAULT_CATEGORY.to_string()),
        created_at: get_datetime(item, "created_at")?,
        is_active: get_bool(item, "is_active").unwrap_or(true),
    })
}

// ============================================================================
// Event conversions
// ============================================================================

/// Convert an Event to DynamoDB item.
pub fn event_to_item(event: &Event) -> Item {
    let mut item = keyed_item(Collection::Events, event.id, ENTITY_TYPE_EVENT);
    put_string(&mut item, "title", &event.title);
    put_string(&mut item, "description", &event.description);
    put_string(&mut item, "date", &event.date);
    put_string(&mut item, "time", &event.time);
    put_string(&mut item, "location", &event.location);
    put_string(&mut item, "image_url", &event.image_url);
    put_string(&mut item, "category", &event.category);
    put_bool(&mut item, "is_featured", event.is_featured);
    put_string(&mut item, "created_at", &format_datetime(&event.created_at));
    put_bool(&mut item, "is_active", event.is_active);
    item
}

/// Convert a DynamoDB item to Event.
pub fn item_to_event(item: &Item) -> Result<Event, RepositoryError> {
    Ok(Event {
        id: get_uuid(item, "id")?,
        title: get_string(item, "title")?,
        description: get_string(item, "description")?,
        date: get_string(item, "date")?,
        time: get_string(item, "time")?,
        location: get_string(item, "location")?,
        image_url: get_optional_string(item, "image_url").unwrap_or_default(),
        category: get_optional_string(item, "category")
            .unwrap_or_else(|| Event::DEFAULT_CATEGORY.to_string()),
        is_featured: get_bool(item, "is_featured").unwrap_or(false),
        created_at: get_datetime(item, "created_at")?,
        is_active: get_bool(item, "is_active").unwrap_or(true),
    })
}

// ============================================================================
// Contact message conversions
// ============================================================================

/// Convert a ContactMessage to DynamoDB item.
pub fn contact_message_to_item(message: &ContactMessage) -> Item {
    let mut item = keyed_item(
        Collection::ContactMessages,
        message.id,
        ENTITY_TYPE_CONTACT_MESSAGE,
    );
    put_string(&mut item, "name", &message.name);
    put_string(&mut item, "email", &message.email);
    put_string(&mut item, "phone", &message.phone);
    put_string(&mut item, "message", &message.message);
    put_string(&mut item, "created_at", &format_datetime(&message.created_at));
    put_bool(&mut item, "is_read", message.is_read);
    item
}

/// Convert a DynamoDB item to ContactMessage.
pub fn item_to_contact_message(item: &Item) -> Result<ContactMessage, RepositoryError> {
    Ok(ContactMessage {
        id: get_uuid(item, "id")?,
        name: get_string(item, "name")?,
        email: get_string(item, "email")?,
        phone: get_optional_string(item, "phone").unwrap_or_default(),
        message: get_string(item, "message")?,
        created_at: get_datetime(item, "created_at")?,
        is_read: get_bool(item, "is_read").unwrap_or(false),
    })
}

// ============================================================================
// Status check conversions
// ============================================================================

/// Convert a StatusCheck to DynamoDB item.
pub fn status_check_to_item(check: &StatusCheck) -> Item {
    let mut item = keyed_item(
        Collection::StatusChecks,
        check.id,
        ENTITY_TYPE_STATUS_CHECK,
    );
    put_string(&mut item, "client_name", &check.client_name);
    put_string(&mut item, "timestamp", &format_datetime(&check.timestamp));
    item
}

/// Convert a DynamoDB item to StatusCheck.
pub fn item_to_status_check(item: &Item) -> Result<StatusCheck, RepositoryError> {
    Ok(StatusCheck {
        id: get_uuid(item, "id")?,
        client_name: get_string(item, "client_name")?,
        timestamp: get_datetime(item, "timestamp")?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn get_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

fn get_optional_string(item: &Item, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

fn get_bool(item: &Item, key: &str) -> Option<bool> {
    item.get(key).and_then(|v| v.as_bool().ok()).copied()
}

fn get_uuid(item: &Item, key: &str) -> Result<Uuid, RepositoryError> {
    let s = get_string(item, key)?;
    Uuid::parse_str(&s)
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid UUID {}: {}", key, e)))
}

fn get_datetime(item: &Item, key: &str) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}
