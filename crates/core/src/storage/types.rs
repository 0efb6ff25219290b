use uuid::Uuid;

use super::{RepositoryError, Result};

/// Parses a path id into a record id.
///
/// Ids are always UUIDs, so a string that does not parse cannot name any
/// stored record and is reported as `NotFound` for `entity_type`.
pub fn parse_record_id(entity_type: &'static str, raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| RepositoryError::NotFound {
        entity_type,
        id: raw.to_string(),
    })
}
