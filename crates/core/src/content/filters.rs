//! Equality filters and fixed sort orders for listing collections.
//!
//! Backends that cannot express a filter natively apply [`GalleryFilter::matches`]
//! and friends in process, then sort with the `sort_*` functions so every
//! backend returns the same order.

use super::types::{ContactMessage, Event, GalleryItem, StatusCheck};

/// Filter for listing gallery items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryFilter {
    pub category: Option<String>,
    pub active_only: bool,
}

impl GalleryFilter {
    /// Matches every gallery item, active or not.
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches active items only.
    pub fn active() -> Self {
        Self {
            category: None,
            active_only: true,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn matches(&self, item: &GalleryItem) -> bool {
        self.category.as_ref().is_none_or(|c| &item.category == c)
            && (!self.active_only || item.is_active)
    }
}

/// Filter for listing events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub category: Option<String>,
    pub featured_only: bool,
    pub active_only: bool,
}

impl EventFilter {
    /// Matches every event.
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches active events only.
    pub fn active() -> Self {
        Self {
            active_only: true,
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured_only = true;
        self
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.category.as_ref().is_none_or(|c| &event.category == c)
            && (!self.featured_only || event.is_featured)
            && (!self.active_only || event.is_active)
    }
}

/// Filter for listing contact messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactFilter {
    pub unread_only: bool,
}

impl ContactFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn unread() -> Self {
        Self { unread_only: true }
    }

    pub fn matches(&self, message: &ContactMessage) -> bool {
        !self.unread_only || !message.is_read
    }
}

/// Sorts gallery items newest first.
pub fn sort_gallery_items(items: &mut [GalleryItem]) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Sorts events by date ascending, oldest creation first within a day.
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
}

/// Sorts contact messages newest first.
pub fn sort_contact_messages(messages: &mut [ContactMessage]) {
    messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Sorts status checks oldest first.
pub fn sort_status_checks(checks: &mut [StatusCheck]) {
    checks.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    fn base_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn gallery_item(title: &str, category: &str, is_active: bool) -> GalleryItem {
        GalleryItem::new(title, "https://img.example/x.jpg")
            .with_category(category)
            .with_active(is_active)
    }

    #[test]
    fn test_gallery_filter_all_matches_everything() {
        let filter = GalleryFilter::all();
        assert!(filter.matches(&gallery_item("A", "farms", true)));
        assert!(filter.matches(&gallery_item("B", "projects", false)));
    }

    #[test]
    fn test_gallery_filter_active_excludes_inactive() {
        let filter = GalleryFilter::active();
        assert!(filter.matches(&gallery_item("A", "farms", true)));
        assert!(!filter.matches(&gallery_item("B", "farms", false)));
    }

    #[test]
    fn test_gallery_filter_category_and_active_combine() {
        let filter = GalleryFilter::active().with_category("farms");
        assert!(filter.matches(&gallery_item("A", "farms", true)));
        assert!(!filter.matches(&gallery_item("B", "projects", true)));
        assert!(!filter.matches(&gallery_item("C", "farms", false)));
    }

    #[test]
    fn test_event_filter_featured_only() {
        let featured = Event::new("A", "d", "2025-01-01", "t", "l").with_featured(true);
        let plain = Event::new("B", "d", "2025-01-01", "t", "l");
        let filter = EventFilter::active().featured();
        assert!(filter.matches(&featured));
        assert!(!filter.matches(&plain));
    }

    #[test]
    fn test_event_filter_category() {
        let seminar = Event::new("A", "d", "2025-01-01", "t", "l").with_category("seminar");
        let filter = EventFilter::all().with_category("seminar");
        assert!(filter.matches(&seminar));
        assert!(!EventFilter::all().with_category("workshop").matches(&seminar));
    }

    #[test]
    fn test_contact_filter_unread() {
        let unread = ContactMessage::new("A", "a@x.com", "hi");
        let read = ContactMessage::new("B", "b@x.com", "hi").with_read(true);
        assert!(ContactFilter::unread().matches(&unread));
        assert!(!ContactFilter::unread().matches(&read));
        assert!(ContactFilter::all().matches(&read));
    }

    #[test]
    fn test_sort_gallery_items_newest_first() {
        let t = base_time();
        let mut items = vec![
            gallery_item("old", "general", true).with_created_at(t),
            gallery_item("new", "general", true).with_created_at(t + Duration::hours(2)),
            gallery_item("mid", "general", true).with_created_at(t + Duration::hours(1)),
        ];
        sort_gallery_items(&mut items);
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_events_by_date_then_creation() {
        let t = base_time();
        let mut events = vec![
            Event::new("late", "d", "2025-11-20", "t", "l").with_created_at(t),
            Event::new("second", "d", "2025-08-28", "t", "l")
                .with_created_at(t + Duration::minutes(5)),
            Event::new("first", "d", "2025-08-28", "t", "l").with_created_at(t),
        ];
        sort_events(&mut events);
        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "late"]);
    }

    #[test]
    fn test_sort_contact_messages_newest_first() {
        let t = base_time();
        let mut messages = vec![
            ContactMessage::new("old", "a@x.com", "hi").with_created_at(t),
            ContactMessage::new("new", "b@x.com", "hi").with_created_at(t + Duration::days(1)),
        ];
        sort_contact_messages(&mut messages);
        assert_eq!(messages[0].name, "new");
    }

    #[test]
    fn test_sort_status_checks_oldest_first() {
        let t = base_time();
        let mut checks = vec![
            StatusCheck::new("second").with_timestamp(t + Duration::seconds(1)),
            StatusCheck::new("first").with_timestamp(t),
        ];
        sort_status_checks(&mut checks);
        assert_eq!(checks[0].client_name, "first");
    }
}
