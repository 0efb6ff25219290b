//! DynamoDB repository implementation.
//!
//! Implements the repository traits from `bloom_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

use bloom_core::content::{
    sort_contact_messages, sort_events, sort_gallery_items, sort_status_checks, ContactFilter,
    ContactMessage, Event, EventFilter, GalleryFilter, GalleryItem, StatusCheck,
};
use bloom_core::storage::{
    Collection, ContactRepository, EventRepository, GalleryRepository, Result, StatusRepository,
};

use super::conversions::{
    contact_message_to_item, event_to_item, gallery_item_to_item, item_to_contact_message,
    item_to_event, item_to_gallery_item, item_to_status_check, status_check_to_item,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
    map_replace_item_error, map_update_item_error,
};
use super::filters::{
    contact_filter_expression, event_filter_expression, gallery_filter_expression,
    FilterExpression,
};
use super::keys;

type Item = HashMap<String, AttributeValue>;

/// DynamoDB-based repository implementation.
///
/// Provides async access to DynamoDB storage for all collections.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from environment configuration.
    ///
    /// Uses AWS SDK default credential chain and region.
    pub async fn from_env(table_name: &str) -> Result<Self> {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);

        Ok(Self::new(client, table_name))
    }

    /// Reads every item of a collection's partition that passes the filter.
    ///
    /// Follows `LastEvaluatedKey` until the partition is exhausted.
    async fn query_collection(
        &self,
        collection: Collection,
        filter: FilterExpression,
    ) -> Result<Vec<Item>> {
        let mut values = filter.values.clone();
        values.insert(
            ":pk".to_string(),
            AttributeValue::S(keys::collection_pk(collection)),
        );

        let mut items = Vec::new();
        let mut start_key = None;
        loop {
            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("PK = :pk")
                .set_filter_expression(filter.expression.clone())
                .set_expression_attribute_names(filter.names())
                .set_expression_attribute_values(Some(values.clone()))
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_query_error)?;

            items.extend(result.items.unwrap_or_default());
            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(items)
    }

    async fn get_record(&self, collection: Collection, id: Uuid) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::collection_pk(collection)))
            .key("SK", AttributeValue::S(keys::record_sk(collection, id)))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, collection.entity_type(), id.to_string()))?;

        Ok(result.item)
    }

    async fn create_record(&self, collection: Collection, id: Uuid, item: Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(PK)")
            .send()
            .await
            .map_err(|e| map_put_item_error(e, collection.entity_type(), id.to_string()))?;

        Ok(())
    }

    async fn replace_record(&self, collection: Collection, id: Uuid, item: Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_exists(PK)")
            .send()
            .await
            .map_err(|e| map_replace_item_error(e, collection.entity_type(), id.to_string()))?;

        Ok(())
    }

    async fn delete_record(&self, collection: Collection, id: Uuid) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::collection_pk(collection)))
            .key("SK", AttributeValue::S(keys::record_sk(collection, id)))
            .condition_expression("attribute_exists(PK)")
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, collection.entity_type(), id.to_string()))?;

        Ok(())
    }
}

// ============================================================================
// GalleryRepository implementation
// ============================================================================

#[async_trait]
impl GalleryRepository for DynamoDbRepository {
    async fn list_gallery_items(&self, filter: &GalleryFilter) -> Result<Vec<GalleryItem>> {
        let items = self
            .query_collection(Collection::Gallery, gallery_filter_expression(filter))
            .await?;
        let mut gallery: Vec<GalleryItem> = items
            .iter()
            .map(item_to_gallery_item)
            .collect::<Result<_>>()?;
        sort_gallery_items(&mut gallery);
        Ok(gallery)
    }

    async fn get_gallery_item(&self, id: Uuid) -> Result<Option<GalleryItem>> {
        match self.get_record(Collection::Gallery, id).await? {
            Some(item) => Ok(Some(item_to_gallery_item(&item)?)),
            None => Ok(None),
        }
    }

    async fn create_gallery_item(&self, item: &GalleryItem) -> Result<()> {
        self.create_record(Collection::Gallery, item.id, gallery_item_to_item(item))
            .await
    }

    async fn update_gallery_item(&self, item: &GalleryItem) -> Result<()> {
        self.replace_record(Collection::Gallery, item.id, gallery_item_to_item(item))
            .await
    }

    async fn delete_gallery_item(&self, id: Uuid) -> Result<()> {
        self.delete_record(Collection::Gallery, id).await
    }
}

// ============================================================================
// EventRepository implementation
// ============================================================================

#[async_trait]
impl EventRepository for DynamoDbRepository {
    async fn list_events(&self, filter: &EventFilter) -> Result<Vec<Event>> {
        let items = self
            .query_collection(Collection::Events, event_filter_expression(filter))
            .await?;
        let mut events: Vec<Event> = items.iter().map(item_to_event).collect::<Result<_>>()?;
        sort_events(&mut events);
        Ok(events)
    }

    async fn get_event(&self, id: Uuid) -> Result<Option<Event>> {
        match self.get_record(Collection::Events, id).await? {
            Some(item) => Ok(Some(item_to_event(&item)?)),
            None => Ok(None),
        }
    }

    async fn create_event(&self, event: &Event) -> Result<()> {
        self.create_record(Collection::Events, event.id, event_to_item(event))
            .await
    }

    async fn update_event(&self, event: &Event) -> Result<()> {
        self.replace_record(Collection::Events, event.id, event_to_item(event))
            .await
    }

    async fn delete_event(&self, id: Uuid) -> Result<()> {
        self.delete_record(Collection::Events, id).await
    }
}

// ============================================================================
// ContactRepository implementation
// ============================================================================

#[async_trait]
impl ContactRepository for DynamoDbRepository {
    async fn list_contact_messages(&self, filter: ContactFilter) -> Result<Vec<ContactMessage>> {
        let items = self
            .query_collection(
                Collection::ContactMessages,
                contact_filter_expression(filter),
            )
            .await?;
        let mut messages: Vec<ContactMessage> = items
            .iter()
            .map(item_to_contact_message)
            .collect::<Result<_>>()?;
        sort_contact_messages(&mut messages);
        Ok(messages)
    }

    async fn get_contact_message(&self, id: Uuid) -> Result<Option<ContactMessage>> {
        match self.get_record(Collection::ContactMessages, id).await? {
            Some(item) => Ok(Some(item_to_contact_message(&item)?)),
            None => Ok(None),
        }
    }

    async fn create_contact_message(&self, message: &ContactMessage) -> Result<()> {
        self.create_record(
            Collection::ContactMessages,
            message.id,
            contact_message_to_item(message),
        )
        .await
    }

    async fn mark_contact_message_read(&self, id: Uuid) -> Result<()> {
        let collection = Collection::ContactMessages;

        self.client
            .update_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::collection_pk(collection)))
            .key("SK", AttributeValue::S(keys::record_sk(collection, id)))
            .update_expression("SET is_read = :read")
            .expression_attribute_values(":read", AttributeValue::Bool(true))
            .condition_expression("attribute_exists(PK)")
            .send()
            .await
            .map_err(|e| map_update_item_error(e, collection.entity_type(), id.to_string()))?;

        Ok(())
    }

    async fn delete_contact_message(&self, id: Uuid) -> Result<()> {
        self.delete_record(Collection::ContactMessages, id).await
    }
}

// ============================================================================
// StatusRepository implementation
// ============================================================================

#[async_trait]
impl StatusRepository for DynamoDbRepository {
    async fn list_status_checks(&self) -> Result<Vec<StatusCheck>> {
        let items = self
            .query_collection(Collection::StatusChecks, FilterExpression::default())
            .await?;
        let mut checks: Vec<StatusCheck> = items
            .iter()
            .map(item_to_status_check)
            .collect::<Result<_>>()?;
        sort_status_checks(&mut checks);
        Ok(checks)
    }

    async fn create_status_check(&self, check: &StatusCheck) -> Result<()> {
        self.create_record(
            Collection::StatusChecks,
            check.id,
            status_check_to_item(check),
        )
        .await
    }
}
