use super::error::ContentError;
use super::types::{ContactMessage, Event, GalleryItem, StatusCheck};

fn require(field: &'static str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField { field });
    }
    Ok(())
}

/// Validates a gallery item before creation or update.
pub fn validate_gallery_item(item: &GalleryItem) -> Result<(), ContentError> {
    require("title", &item.title)?;
    require("image_url", &item.image_url)?;
    Ok(())
}

/// Validates an event before creation or update.
pub fn validate_event(event: &Event) -> Result<(), ContentError> {
    require("title", &event.title)?;
    require("description", &event.description)?;
    require("date", &event.date)?;
    require("time", &event.time)?;
    require("location", &event.location)?;
    Ok(())
}

/// Validates a contact message before creation.
pub fn validate_contact_message(message: &ContactMessage) -> Result<(), ContentError> {
    require("name", &message.name)?;
    require("email", &message.email)?;
    require("message", &message.message)?;
    Ok(())
}

pub fn validate_status_check(check: &StatusCheck) -> Result<(), ContentError> {
    require("client_name", &check.client_name)
}
