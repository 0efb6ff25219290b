mod error;
mod filters;
mod fixtures;
mod requests;
mod responses;
mod types;
mod validation;

pub use error::ContentError;
pub use filters::{
    sort_contact_messages, sort_events, sort_gallery_items, sort_status_checks, ContactFilter,
    EventFilter, GalleryFilter,
};
pub use fixtures::{seed_events, seed_gallery_items};
pub use requests::{
    CreateContactMessageRequest, CreateEventRequest, CreateGalleryItemRequest,
    CreateStatusCheckRequest, ListContactQuery, ListEventsQuery, ListGalleryQuery,
    UpdateEventRequest, UpdateGalleryItemRequest,
};
pub use responses::{AdminStats, MessageResponse, SeedReport, TableDefinitions};
pub use types::{now_timestamp, ContactMessage, Event, GalleryItem, StatusCheck};
pub use validation::{
    validate_contact_message, validate_event, validate_gallery_item, validate_status_check,
};
