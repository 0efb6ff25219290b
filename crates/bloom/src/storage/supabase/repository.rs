//! Supabase repository implementation.
//!
//! Implements the repository traits from `bloom_core::storage` against the
//! PostgREST API exposed by a Supabase project.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use bloom_core::content::{
    ContactFilter, ContactMessage, Event, EventFilter, GalleryFilter, GalleryItem, StatusCheck,
};
use bloom_core::storage::{
    Collection, ContactRepository, EventRepository, GalleryRepository, RepositoryError, Result,
    StatusRepository,
};

use super::error::{map_reqwest_error, map_status_error};
use super::query::{self, QueryParams};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// PostgREST-backed repository for a Supabase project.
pub struct SupabaseRepository {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseRepository {
    /// Creates a repository for the project at `url`, authenticating with `api_key`.
    pub fn new(url: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Builds an authenticated request against a collection's table.
    fn request(
        &self,
        method: Method,
        collection: Collection,
        params: &QueryParams,
    ) -> RequestBuilder {
        self.client
            .request(method, query::table_url(&self.base_url, collection.table_name()))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(params)
    }

    /// Sends a request, turning transport failures and non-success statuses into errors.
    async fn send(
        &self,
        request: RequestBuilder,
        collection: Collection,
        id: &str,
    ) -> Result<Response> {
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(
            table = collection.table_name(),
            %status,
            %body,
            "PostgREST request failed"
        );
        Err(map_status_error(status, &body, collection.entity_type(), id))
    }

    async fn rows<T: DeserializeOwned>(response: Response) -> Result<Vec<T>> {
        response.json::<Vec<T>>().await.map_err(map_reqwest_error)
    }

    async fn select<T: DeserializeOwned>(
        &self,
        collection: Collection,
        params: QueryParams,
    ) -> Result<Vec<T>> {
        let request = self.request(Method::GET, collection, &params);
        let response = self.send(request, collection, "").await?;
        Self::rows(response).await
    }

    async fn select_by_id<T: DeserializeOwned>(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<T>> {
        let rows = self.select(collection, query::by_id(id)).await?;
        Ok(rows.into_iter().next())
    }

    async fn insert<T: Serialize + Sync>(
        &self,
        collection: Collection,
        id: Uuid,
        record: &T,
    ) -> Result<()> {
        let request = self
            .request(Method::POST, collection, &Vec::new())
            .header("Prefer", "return=minimal")
            .json(record);
        self.send(request, collection, &id.to_string()).await?;
        Ok(())
    }

    /// Runs a PATCH or DELETE on one row; an empty representation means no row matched.
    async fn write_one<B: Serialize + Sync>(
        &self,
        method: Method,
        collection: Collection,
        id: Uuid,
        body: Option<&B>,
    ) -> Result<()> {
        let mut request = self
            .request(method, collection, &query::id_filter(id))
            .header("Prefer", "return=representation");
        if let Some(body) = body {
            request = request.json(body);
        }

        let id = id.to_string();
        let response = self.send(request, collection, &id).await?;
        let rows: Vec<serde_json::Value> = Self::rows(response).await?;
        if rows.is_empty() {
            return Err(RepositoryError::NotFound {
                entity_type: collection.entity_type(),
                id,
            });
        }
        Ok(())
    }

    async fn delete_one(&self, collection: Collection, id: Uuid) -> Result<()> {
        self.write_one::<()>(Method::DELETE, collection, id, None).await
    }
}

#[async_trait]
impl GalleryRepository for SupabaseRepository {
    async fn list_gallery_items(&self, filter: &GalleryFilter) -> Result<Vec<GalleryItem>> {
        self.select(Collection::Gallery, query::gallery_list(filter)).await
    }

    async fn get_gallery_item(&self, id: Uuid) -> Result<Option<GalleryItem>> {
        self.select_by_id(Collection::Gallery, id).await
    }

    async fn create_gallery_item(&self, item: &GalleryItem) -> Result<()> {
        self.insert(Collection::Gallery, item.id, item).await
    }

    async fn update_gallery_item(&self, item: &GalleryItem) -> Result<()> {
        self.write_one(Method::PATCH, Collection::Gallery, item.id, Some(item))
            .await
    }

    async fn delete_gallery_item(&self, id: Uuid) -> Result<()> {
        self.delete_one(Collection::Gallery, id).await
    }
}

#[async_trait]
impl EventRepository for SupabaseRepository {
    async fn list_events(&self, filter: &EventFilter) -> Result<Vec<Event>> {
        self.select(Collection::Events, query::event_list(filter)).await
    }

    async fn get_event(&self, id: Uuid) -> Result<Option<Event>> {
        self.select_by_id(Collection::Events, id).await
    }

    async fn create_event(&self, event: &Event) -> Result<()> {
        self.insert(Collection::Events, event.id, event).await
    }

    async fn update_event(&self, event: &Event) -> Result<()> {
        self.write_one(Method::PATCH, Collection::Events, event.id, Some(event))
            .await
    }

    async fn delete_event(&self, id: Uuid) -> Result<()> {
        self.delete_one(Collection::Events, id).await
    }
}

#[async_trait]
impl ContactRepository for SupabaseRepository {
    async fn list_contact_messages(&self, filter: ContactFilter) -> Result<Vec<ContactMessage>> {
        self.select(Collection::ContactMessages, query::contact_list(filter))
            .await
    }

    async fn get_contact_message(&self, id: Uuid) -> Result<Option<ContactMessage>> {
        self.select_by_id(Collection::ContactMessages, id).await
    }

    async fn create_contact_message(&self, message: &ContactMessage) -> Result<()> {
        self.insert(Collection::ContactMessages, message.id, message)
            .await
    }

    async fn mark_contact_message_read(&self, id: Uuid) -> Result<()> {
        let body = serde_json::json!({ "is_read": true });
        self.write_one(Method::PATCH, Collection::ContactMessages, id, Some(&body))
            .await
    }

    async fn delete_contact_message(&self, id: Uuid) -> Result<()> {
        self.delete_one(Collection::ContactMessages, id).await
    }
}

#[async_trait]
impl StatusRepository for SupabaseRepository {
    async fn list_status_checks(&self) -> Result<Vec<StatusCheck>> {
        self.select(Collection::StatusChecks, query::status_list())
            .await
    }

    async fn create_status_check(&self, check: &StatusCheck) -> Result<()> {
        self.insert(Collection::StatusChecks, check.id, check).await
    }
}
