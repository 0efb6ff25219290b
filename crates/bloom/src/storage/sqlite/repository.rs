//! SQLite repository implementation.
//!
//! Implements the repository traits from `bloom_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use bloom_core::content::{
    ContactFilter, ContactMessage, Event, EventFilter, GalleryFilter, GalleryItem, StatusCheck,
};
use bloom_core::storage::{
    Collection, ContactRepository, EventRepository, GalleryRepository, RepositoryError, Result,
    StatusRepository,
};

use super::conversions::{
    format_datetime, row_to_contact_message, row_to_event, row_to_gallery_item,
    row_to_status_check,
};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema::{self, ListQuery};

const GALLERY_ITEM: &str = Collection::Gallery.entity_type();
const EVENT: &str = Collection::Events.entity_type();
const CONTACT_MESSAGE: &str = Collection::ContactMessages.entity_type();
const STATUS_CHECK: &str = Collection::StatusChecks.entity_type();

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Fails with `QueryReturnedNoRows` when a write touched nothing.
fn require_changed(rows: usize) -> std::result::Result<(), tokio_rusqlite::Error> {
    if rows == 0 {
        Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
    } else {
        Ok(())
    }
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for all collections.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Runs a list query and converts every row.
    async fn list<T, F>(
        &self,
        query: ListQuery,
        entity_type: &'static str,
        convert: F,
    ) -> Result<Vec<T>>
    where
        T: Send + 'static,
        F: Fn(&rusqlite::Row) -> rusqlite::Result<T> + Send + 'static,
    {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&query.sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params_from_iter(query.params.iter()), convert)
                    .map_err(wrap_err)?;

                let mut records = Vec::new();
                for row_result in rows {
                    records.push(row_result.map_err(wrap_err)?);
                }
                Ok(records)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, entity_type))
    }

    /// Fetches a single row by id, `None` when absent.
    async fn get_by_id<T, F>(
        &self,
        sql: &'static str,
        id: Uuid,
        entity_type: &'static str,
        convert: F,
    ) -> Result<Option<T>>
    where
        T: Send + 'static,
        F: Fn(&rusqlite::Row) -> rusqlite::Result<T> + Send + 'static,
    {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
                match stmt.query_row([&id_str], convert) {
                    Ok(record) => Ok(Some(record)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, entity_type, id.to_string()))
    }

    /// Executes a single-row statement keyed by id, `NotFound` when no row changed.
    async fn execute_by_id(
        &self,
        sql: &'static str,
        id: Uuid,
        entity_type: &'static str,
    ) -> Result<()> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn.execute(sql, [&id_str]).map_err(wrap_err)?;
                require_changed(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, entity_type, id.to_string()))
    }
}

// ============================================================================
// GalleryRepository implementation
// ============================================================================

#[async_trait]
impl GalleryRepository for SqliteRepository {
    async fn list_gallery_items(&self, filter: &GalleryFilter) -> Result<Vec<GalleryItem>> {
        self.list(
            schema::select_gallery_items(filter),
            GALLERY_ITEM,
            row_to_gallery_item,
        )
        .await
    }

    async fn get_gallery_item(&self, id: Uuid) -> Result<Option<GalleryItem>> {
        self.get_by_id(
            schema::SELECT_GALLERY_ITEM_BY_ID,
            id,
            GALLERY_ITEM,
            row_to_gallery_item,
        )
        .await
    }

    async fn create_gallery_item(&self, item: &GalleryItem) -> Result<()> {
        let item = item.clone();
        let item_id = item.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_GALLERY_ITEM,
                    rusqlite::params![
                        item.id.to_string(),
                        item.title,
                        item.description,
                        item.image_url,
                        item.category,
                        format_datetime(&item.created_at),
                        item.is_active
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, GALLERY_ITEM, item_id))
    }

    async fn update_gallery_item(&self, item: &GalleryItem) -> Result<()> {
        let item = item.clone();
        let item_id = item.id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_GALLERY_ITEM,
                        rusqlite::params![
                            item.id.to_string(),
                            item.title,
                            item.description,
                            item.image_url,
                            item.category,
                            item.is_active
                        ],
                    )
                    .map_err(wrap_err)?;
                require_changed(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, GALLERY_ITEM, item_id))
    }

    async fn delete_gallery_item(&self, id: Uuid) -> Result<()> {
        self.execute_by_id(schema::DELETE_GALLERY_ITEM, id, GALLERY_ITEM)
            .await
    }
}

// ============================================================================
// EventRepository implementation
// ============================================================================

#[async_trait]
impl EventRepository for SqliteRepository {
    async fn list_events(&self, filter: &EventFilter) -> Result<Vec<Event>> {
        self.list(schema::select_events(filter), EVENT, row_to_event)
            .await
    }

    async fn get_event(&self, id: Uuid) -> Result<Option<Event>> {
        self.get_by_id(schema::SELECT_EVENT_BY_ID, id, EVENT, row_to_event)
            .await
    }

    async fn create_event(&self, event: &Event) -> Result<()> {
        let event = event.clone();
        let event_id = event.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_EVENT,
                    rusqlite::params![
                        event.id.to_string(),
                        event.title,
                        event.description,
                        event.date,
                        event.time,
                        event.location,
                        event.image_url,
                        event.category,
                        event.is_featured,
                        format_datetime(&event.created_at),
                        event.is_active
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, EVENT, event_id))
    }

    async fn update_event(&self, event: &Event) -> Result<()> {
        let event = event.clone();
        let event_id = event.id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_EVENT,
                        rusqlite::params![
                            event.id.to_string(),
                            event.title,
                            event.description,
                            event.date,
                            event.time,
                            event.location,
                            event.image_url,
                            event.category,
                            event.is_featured,
                            event.is_active
                        ],
                    )
                    .map_err(wrap_err)?;
                require_changed(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, EVENT, event_id))
    }

    async fn delete_event(&self, id: Uuid) -> Result<()> {
        self.execute_by_id(schema::DELETE_EVENT, id, EVENT).await
    }
}

// ============================================================================
// ContactRepository implementation
// ============================================================================

#[async_trait]
impl ContactRepository for SqliteRepository {
    async fn list_contact_messages(&self, filter: ContactFilter) -> Result<Vec<ContactMessage>> {
        self.list(
            schema::select_contact_messages(filter),
            CONTACT_MESSAGE,
            row_to_contact_message,
        )
        .await
    }

    async fn get_contact_message(&self, id: Uuid) -> Result<Option<ContactMessage>> {
        self.get_by_id(
            schema::SELECT_CONTACT_MESSAGE_BY_ID,
            id,
            CONTACT_MESSAGE,
            row_to_contact_message,
        )
        .await
    }

    async fn create_contact_message(&self, message: &ContactMessage) -> Result<()> {
        let message = message.clone();
        let message_id = message.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_CONTACT_MESSAGE,
                    rusqlite::params![
                        message.id.to_string(),
                        message.name,
                        message.email,
                        message.phone,
                        message.message,
                        format_datetime(&message.created_at),
                        message.is_read
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, CONTACT_MESSAGE, message_id))
    }

    async fn mark_contact_message_read(&self, id: Uuid) -> Result<()> {
        self.execute_by_id(schema::MARK_CONTACT_MESSAGE_READ, id, CONTACT_MESSAGE)
            .await
    }

    async fn delete_contact_message(&self, id: Uuid) -> Result<()> {
        self.execute_by_id(schema::DELETE_CONTACT_MESSAGE, id, CONTACT_MESSAGE)
            .await
    }
}

// ============================================================================
// StatusRepository implementation
// ============================================================================

#[async_trait]
impl StatusRepository for SqliteRepository {
    async fn list_status_checks(&self) -> Result<Vec<StatusCheck>> {
        let query = ListQuery {
            sql: schema::SELECT_STATUS_CHECKS.to_string(),
            params: Vec::new(),
        };
        self.list(query, STATUS_CHECK, row_to_status_check).await
    }

    async fn create_status_check(&self, check: &StatusCheck) -> Result<()> {
        let id = check.id.to_string();
        let client_name = check.client_name.clone();
        let timestamp = format_datetime(&check.timestamp);
        let check_id = check.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_STATUS_CHECK,
                    rusqlite::params![id, client_name, timestamp],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, STATUS_CHECK, check_id))
    }
}
