use serde::{Deserialize, Serialize};

/// Plain confirmation body, e.g. `{"message": "Event deleted successfully"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Aggregate counters for the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStats {
    /// Active gallery items.
    pub gallery_count: u64,
    /// Active events.
    pub events_count: u64,
    /// All contact messages.
    pub messages_count: u64,
    pub unread_messages: u64,
}

/// Outcome of the seed operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedReport {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_items: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<usize>,
}

impl SeedReport {
    pub fn already_seeded() -> Self {
        Self {
            message: "Database already seeded".to_string(),
            gallery_items: None,
            events: None,
        }
    }

    pub fn seeded(gallery_items: usize, events: usize) -> Self {
        Self {
            message: "Database seeded successfully".to_string(),
            gallery_items: Some(gallery_items),
            events: Some(events),
        }
    }
}

/// SQL the operator runs to prepare a relational datastore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinitions {
    pub message: String,
    pub sql: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_seeded_omits_counts() {
        let json = serde_json::to_value(SeedReport::already_seeded()).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Database already seeded"}));
    }

    #[test]
    fn test_seeded_includes_counts() {
        let json = serde_json::to_value(SeedReport::seeded(8, 4)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "Database seeded successfully",
                "gallery_items": 8,
                "events": 4
            })
        );
    }

    #[test]
    fn test_admin_stats_field_names() {
        let json = serde_json::to_value(AdminStats::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "gallery_count": 0,
                "events_count": 0,
                "messages_count": 0,
                "unread_messages": 0
            })
        );
    }
}
