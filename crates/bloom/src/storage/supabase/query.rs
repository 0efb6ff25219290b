//! PostgREST query parameter builders.
//!
//! Pure functions producing the `(key, value)` pairs appended to a table URL.
//! Filters use the `column=eq.value` operator syntax and ordering uses
//! `order=column.direction`.

use bloom_core::content::{ContactFilter, EventFilter, GalleryFilter};
use uuid::Uuid;

pub type QueryParams = Vec<(&'static str, String)>;

/// URL of a table endpoint under the project's REST root.
pub fn table_url(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{table}", base_url.trim_end_matches('/'))
}

fn eq(value: impl std::fmt::Display) -> String {
    format!("eq.{value}")
}

/// Selects the single row with the given id.
pub fn by_id(id: Uuid) -> QueryParams {
    vec![("select", "*".to_string()), ("id", eq(id))]
}

/// Targets the row with the given id for PATCH or DELETE.
pub fn id_filter(id: Uuid) -> QueryParams {
    vec![("id", eq(id))]
}

pub fn gallery_list(filter: &GalleryFilter) -> QueryParams {
    let mut params = vec![("select", "*".to_string())];
    if let Some(category) = &filter.category {
        params.push(("category", eq(category)));
    }
    if filter.active_only {
        params.push(("is_active", eq(true)));
    }
    params.push(("order", "created_at.desc".to_string()));
    params
}

pub fn event_list(filter: &EventFilter) -> QueryParams {
    let mut params = vec![("select", "*".to_string())];
    if let Some(category) = &filter.category {
        params.push(("category", eq(category)));
    }
    if filter.featured_only {
        params.push(("is_featured", eq(true)));
    }
    if filter.active_only {
        params.push(("is_active", eq(true)));
    }
    params.push(("order", "date.asc,created_at.asc".to_string()));
    params
}

pub fn contact_list(filter: ContactFilter) -> QueryParams {
    let mut params = vec![("select", "*".to_string())];
    if filter.unread_only {
        params.push(("is_read", eq(false)));
    }
    params.push(("order", "created_at.desc".to_string()));
    params
}

pub fn status_list() -> QueryParams {
    vec![
        ("select", "*".to_string()),
        ("order", "timestamp.asc".to_string()),
    ]
}
