use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::deserialize_null_as_empty;

/// Returns the current UTC time rounded up to the next microsecond.
///
/// Every backend stores timestamps with microsecond precision, so records
/// are stamped at that precision to round-trip unchanged. Rounding up keeps
/// the stamp no earlier than any instant observed before the call.
pub fn now_timestamp() -> DateTime<Utc> {
    ceil_to_micros(Utc::now())
}

fn ceil_to_micros(instant: DateTime<Utc>) -> DateTime<Utc> {
    let truncated = instant.trunc_subsecs(6);
    if truncated < instant {
        truncated + Duration::microseconds(1)
    } else {
        truncated
    }
}

/// An image shown in the public gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: Uuid,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl GalleryItem {
    pub const DEFAULT_CATEGORY: &'static str = "general";

    /// Creates a new active gallery item in the default category.
    pub fn new(title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            image_url: image_url.into(),
            category: Self::DEFAULT_CATEGORY.to_string(),
            created_at: now_timestamp(),
            is_active: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets a specific ID (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets a specific creation time (useful for testing ordering).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// A scheduled event such as a workshop or exhibition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Event day, conventionally `YYYY-MM-DD`.
    pub date: String,
    /// Free-form time span, e.g. "09:00 AM - 4:00 PM".
    pub time: String,
    pub location: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub image_url: String,
    pub category: String,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Event {
    pub const DEFAULT_CATEGORY: &'static str = "workshop";

    /// Creates a new active, non-featured event in the default category.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            date: date.into(),
            time: time.into(),
            location: location.into(),
            image_url: String::new(),
            category: Self::DEFAULT_CATEGORY.to_string(),
            is_featured: false,
            created_at: now_timestamp(),
            is_active: true,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets a specific ID (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets a specific creation time (useful for testing ordering).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// A message submitted through the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

impl ContactMessage {
    /// Creates a new unread message.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            message: message.into(),
            created_at: now_timestamp(),
            is_read: false,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    /// Sets a specific creation time (useful for testing ordering).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// Write-only audit record of a client check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: Uuid,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_name: client_name.into(),
            timestamp: now_timestamp(),
        }
    }

    /// Sets a specific timestamp (useful for testing ordering).
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_item_defaults() {
        let item = GalleryItem::new("Harvest", "https://img.example/harvest.jpg");
        assert_eq!(item.category, "general");
        assert_eq!(item.description, "");
        assert!(item.is_active);
    }

    #[test]
    fn test_event_defaults() {
        let event = Event::new("Workshop", "Soil basics", "2025-09-15", "09:00", "Windhoek");
        assert_eq!(event.category, "workshop");
        assert_eq!(event.image_url, "");
        assert!(!event.is_featured);
        assert!(event.is_active);
    }

    #[test]
    fn test_contact_message_defaults() {
        let message = ContactMessage::new("A", "a@x.com", "hi");
        assert_eq!(message.phone, "");
        assert!(!message.is_read);
    }

    #[test]
    fn test_timestamps_have_microsecond_precision() {
        let ts = now_timestamp();
        assert_eq!(ts.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn test_ceil_to_micros_rounds_up_leftover_nanos() {
        let instant = DateTime::parse_from_rfc3339("2025-01-15T10:30:00.123456789Z")
            .unwrap()
            .with_timezone(&Utc);
        let expected = DateTime::parse_from_rfc3339("2025-01-15T10:30:00.123457Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(ceil_to_micros(instant), expected);
    }

    #[test]
    fn test_ceil_to_micros_keeps_exact_micros() {
        let instant = DateTime::parse_from_rfc3339("2025-01-15T10:30:00.999999Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(ceil_to_micros(instant), instant);
    }

    #[test]
    fn test_created_at_never_precedes_call_start() {
        for _ in 0..10_000 {
            let start = Utc::now();
            let item = GalleryItem::new("Harvest", "https://img.example/h.jpg");
            assert!(item.created_at >= start);
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = StatusCheck::new("probe");
        let b = StatusCheck::new("probe");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_null_optional_text_deserializes_as_empty() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440001",
            "name": "A",
            "email": "a@x.com",
            "phone": null,
            "message": "hi",
            "created_at": "2025-01-15T10:30:00.123456+00:00",
            "is_read": false
        }"#;
        let message: ContactMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.phone, "");
        assert_eq!(message.created_at.timestamp_subsec_micros(), 123_456);
    }
}
