//! Static fixture content for seeding an empty datastore.
//!
//! These functions have no side effects; every call produces fresh ids and
//! creation timestamps for the same literal content.

use super::types::{Event, GalleryItem};

/// (title, description, image_url, category)
const GALLERY_FIXTURES: [(&str, &str, &str, &str); 8] = [
    (
        "Vegetable Seeds Collection",
        "Premium quality vegetable seeds suited for Namibia's climate",
        "https://images.pexels.com/photos/3401479/pexels-photo-3401479.jpeg",
        "products",
    ),
    (
        "Irrigation System Installation",
        "Modern pivot irrigation system installed at a local farm",
        "https://images.unsplash.com/photo-1689349483530-bb7a0734d9fb",
        "projects",
    ),
    (
        "Farmer Training Workshop",
        "Practical training session with local farmers",
        "https://images.unsplash.com/photo-1746014929708-fcb859fd3185",
        "training",
    ),
    (
        "Corn Harvest Success",
        "Successful corn harvest from one of our partner farms",
        "https://images.pexels.com/photos/3307282/pexels-photo-3307282.jpeg",
        "success-stories",
    ),
    (
        "Soil Analysis Service",
        "Our team conducting comprehensive soil analysis",
        "https://images.unsplash.com/photo-1605000797499-95a51c5269ae",
        "services",
    ),
    (
        "Farm Consultancy Visit",
        "Expert consultation at a local agricultural project",
        "https://images.unsplash.com/photo-1744726010540-bf318d4a691f",
        "services",
    ),
    (
        "Green Fields of Namibia",
        "Beautiful farmland showing sustainable agricultural practices",
        "https://images.unsplash.com/photo-1741874299706-2b8e16839aaa",
        "farms",
    ),
    (
        "Sprinkler Irrigation",
        "Efficient water management with modern sprinkler systems",
        "https://images.unsplash.com/photo-1738598665698-7fd7af4b5e0c",
        "projects",
    ),
];

struct EventFixture {
    title: &'static str,
    description: &'static str,
    date: &'static str,
    time: &'static str,
    location: &'static str,
    image_url: &'static str,
    category: &'static str,
    is_featured: bool,
}

const EVENT_FIXTURES: [EventFixture; 4] = [
    EventFixture {
        title: "Farmer Training Workshop 2025",
        description: "Join us for an intensive 2-day workshop on modern farming techniques, \
                      soil management, and sustainable agriculture practices. Perfect for both \
                      new and experienced farmers.",
        date: "2025-09-15",
        time: "09:00 AM - 4:00 PM",
        location: "Windhoek Agricultural Center, Namibia",
        image_url: "https://images.unsplash.com/photo-1746014929708-fcb859fd3185",
        category: "workshop",
        is_featured: true,
    },
    EventFixture {
        title: "Irrigation Solutions Seminar",
        description: "Learn about the latest irrigation technologies and water conservation \
                      methods suitable for Namibia's climate. Includes hands-on demonstrations.",
        date: "2025-10-05",
        time: "10:00 AM - 2:00 PM",
        location: "Bloom Agriculture Office, Windhoek",
        image_url: "https://images.unsplash.com/photo-1689349483530-bb7a0734d9fb",
        category: "seminar",
        is_featured: true,
    },
    EventFixture {
        title: "Agricultural Products Exhibition",
        description: "Explore our complete range of seeds, fertilizers, and farming equipment. \
                      Meet our experts and get personalized recommendations for your farm.",
        date: "2025-11-20",
        time: "08:00 AM - 5:00 PM",
        location: "Namibia Trade Fair Grounds",
        image_url: "https://images.pexels.com/photos/3401479/pexels-photo-3401479.jpeg",
        category: "exhibition",
        is_featured: false,
    },
    EventFixture {
        title: "Soil Health Assessment Day",
        description: "Free soil testing and analysis for registered farmers. Learn how to \
                      improve your soil quality for better yields.",
        date: "2025-08-28",
        time: "07:00 AM - 12:00 PM",
        location: "Various locations across Namibia",
        image_url: "https://images.unsplash.com/photo-1605000797499-95a51c5269ae",
        category: "workshop",
        is_featured: false,
    },
];

/// Generate the gallery items inserted by the seed operation.
///
/// # Example
///
/// ```
/// use bloom_core::content::seed_gallery_items;
///
/// let items = seed_gallery_items();
/// assert_eq!(items.len(), 8);
/// assert!(items.iter().all(|item| item.is_active));
/// ```
pub fn seed_gallery_items() -> Vec<GalleryItem> {
    GALLERY_FIXTURES
        .iter()
        .map(|(title, description, image_url, category)| {
            GalleryItem::new(*title, *image_url)
                .with_description(*description)
                .with_category(*category)
        })
        .collect()
}

/// Generate the events inserted by the seed operation.
pub fn seed_events() -> Vec<Event> {
    EVENT_FIXTURES
        .iter()
        .map(|fixture| {
            Event::new(
                fixture.title,
                fixture.description,
                fixture.date,
                fixture.time,
                fixture.location,
            )
            .with_image_url(fixture.image_url)
            .with_category(fixture.category)
            .with_featured(fixture.is_featured)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::validation::{validate_event, validate_gallery_item};

    #[test]
    fn test_seed_gallery_items_are_valid() {
        let items = seed_gallery_items();
        assert_eq!(items.len(), 8);
        for item in &items {
            assert!(validate_gallery_item(item).is_ok(), "{}", item.title);
        }
    }

    #[test]
    fn test_seed_events_are_valid() {
        let events = seed_events();
        assert_eq!(events.len(), 4);
        for event in &events {
            assert!(validate_event(event).is_ok(), "{}", event.title);
        }
        assert_eq!(events.iter().filter(|e| e.is_featured).count(), 2);
    }

    #[test]
    fn test_seed_ids_are_fresh_per_call() {
        let first = seed_gallery_items();
        let second = seed_gallery_items();
        assert_ne!(first[0].id, second[0].id);
        assert_eq!(first[0].title, second[0].title);
    }

    #[test]
    fn test_seed_gallery_categories() {
        let items = seed_gallery_items();
        let services = items.iter().filter(|i| i.category == "services").count();
        let projects = items.iter().filter(|i| i.category == "projects").count();
        assert_eq!(services, 2);
        assert_eq!(projects, 2);
    }
}
