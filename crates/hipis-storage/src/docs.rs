use aws_sdk_s3::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::objects;

/// Load one JSON document. Returns the deserialized value and its ETag.
pub async fn load<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<(T, String), StorageError> {
    let output = objects::get_object(client, bucket, key).await?;
    let value: T = serde_json::from_slice(&output.body)?;
    let etag = output.etag.unwrap_or_default();
    Ok((value, etag))
}

/// Save one JSON document. Returns the new ETag.
pub async fn save<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(client, bucket, key, body).await
}

/// Save with ETag optimistic locking, for read-modify-write counter updates.
/// A lost race surfaces as `PreconditionFailed`; there is no retry here.
pub async fn save_if_match<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
    expected_etag: &str,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object_if_match(client, bucket, key, body, expected_etag).await
}

/// Load every document under a collection prefix. Listing order is key
/// order; callers sort by their own fields.
pub async fn load_all<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = objects::list_objects(client, bucket, prefix).await?;

    let mut values = Vec::with_capacity(keys.len());
    for key in &keys {
        let output = objects::get_object(client, bucket, key).await?;
        values.push(serde_json::from_slice(&output.body)?);
    }

    Ok(values)
}
