mod error;
mod http_mapping;
mod schema;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use schema::{
    Collection, CONTACT_MESSAGES_TABLE, EVENTS_TABLE, GALLERY_TABLE, STATUS_CHECKS_TABLE,
    TABLE_DEFINITIONS,
};
pub use traits::{ContactRepository, EventRepository, GalleryRepository, StatusRepository};
pub use types::parse_record_id;
