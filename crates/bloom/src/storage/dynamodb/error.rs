//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `bloom_core::storage`.
//! Transport failures (dispatch, timeout) become `ConnectionFailed`; a failed
//! conditional check becomes `AlreadyExists` on create and `NotFound` elsewhere.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use bloom_core::storage::RepositoryError;

/// Returns `ConnectionFailed` when the request never reached DynamoDB.
fn transport_failure<E, R>(err: &SdkError<E, R>) -> Option<RepositoryError> {
    match err {
        SdkError::DispatchFailure(_) => Some(RepositoryError::ConnectionFailed(
            "Could not reach DynamoDB".to_string(),
        )),
        SdkError::TimeoutError(_) => Some(RepositoryError::ConnectionFailed(
            "DynamoDB request timed out".to_string(),
        )),
        _ => None,
    }
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    if let Some(connection) = transport_failure(&err) {
        return connection;
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => RepositoryError::NotFound {
            entity_type,
            id: id.into(),
        },
        GetItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    if let Some(connection) = transport_failure(&err) {
        return connection;
    }
    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        QueryError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        QueryError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        QueryError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("Query failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
///
/// `condition_failed` is the error reported when the write's condition
/// expression rejected it.
fn map_put_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    condition_failed: RepositoryError,
) -> RepositoryError {
    if let Some(connection) = transport_failure(&err) {
        return connection;
    }
    match err.into_service_error() {
        PutItemError::ConditionalCheckFailedException(_) => condition_failed,
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a PutItem error from a create (`attribute_not_exists`) to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    map_put_error(
        err,
        RepositoryError::AlreadyExists {
            entity_type,
            id: id.into(),
        },
    )
}

/// Map a PutItem error from a replace (`attribute_exists`) to RepositoryError.
pub fn map_replace_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    map_put_error(
        err,
        RepositoryError::NotFound {
            entity_type,
            id: id.into(),
        },
    )
}

/// Map an UpdateItem SDK error to RepositoryError.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    if let Some(connection) = transport_failure(&err) {
        return connection;
    }
    match err.into_service_error() {
        UpdateItemError::ConditionalCheckFailedException(_) => RepositoryError::NotFound {
            entity_type,
            id: id.into(),
        },
        UpdateItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        UpdateItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        UpdateItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        UpdateItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        UpdateItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        UpdateItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("UpdateItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    if let Some(connection) = transport_failure(&err) {
        return connection;
    }
    match err.into_service_error() {
        DeleteItemError::ConditionalCheckFailedException(_) => RepositoryError::NotFound {
            entity_type,
            id: id.into(),
        },
        DeleteItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        DeleteItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        DeleteItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        DeleteItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("DeleteItem failed: {:?}", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::error::{
        ConditionalCheckFailedException, ResourceNotFoundException,
    };

    fn conditional_check_failed() -> ConditionalCheckFailedException {
        ConditionalCheckFailedException::builder()
            .message("The conditional request failed")
            .build()
    }

    #[test]
    fn test_put_condition_failure_maps_to_already_exists() {
        let err = SdkError::service_error(
            PutItemError::ConditionalCheckFailedException(conditional_check_failed()),
            (),
        );

        let result = map_put_item_error(err, "Gallery item", "abc-123");

        assert_eq!(
            result,
            RepositoryError::AlreadyExists {
                entity_type: "Gallery item",
                id: "abc-123".to_string(),
            }
        );
    }

    #[test]
    fn test_replace_condition_failure_maps_to_not_found() {
        let err = SdkError::service_error(
            PutItemError::ConditionalCheckFailedException(conditional_check_failed()),
            (),
        );

        let result = map_replace_item_error(err, "Event", "abc-123");

        assert!(matches!(
            result,
            RepositoryError::NotFound {
                entity_type: "Event",
                ..
            }
        ));
    }

    #[test]
    fn test_update_condition_failure_maps_to_not_found() {
        let err = SdkError::service_error(
            UpdateItemError::ConditionalCheckFailedException(conditional_check_failed()),
            (),
        );

        let result = map_update_item_error(err, "Message", "abc-123");

        assert!(matches!(result, RepositoryError::NotFound { .. }));
    }

    #[test]
    fn test_delete_condition_failure_maps_to_not_found() {
        let err = SdkError::service_error(
            DeleteItemError::ConditionalCheckFailedException(conditional_check_failed()),
            (),
        );

        let result = map_delete_item_error(err, "Gallery item", "abc-123");

        assert!(matches!(result, RepositoryError::NotFound { .. }));
    }

    #[test]
    fn test_query_missing_table_maps_to_query_failed() {
        let err = SdkError::service_error(
            QueryError::ResourceNotFoundException(
                ResourceNotFoundException::builder()
                    .message("Requested resource not found")
                    .build(),
            ),
            (),
        );

        let result = map_query_error(err);

        assert_eq!(
            result,
            RepositoryError::QueryFailed("Table not found".to_string())
        );
    }
}
