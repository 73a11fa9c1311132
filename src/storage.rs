use std::future::Future;
use std::time::Duration;

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use chrono::{DateTime, Utc};

use crate::{StorageError, StorageResult};

/// Size and modification time of an object. Either may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectSummary {
    pub size_bytes: Option<i64>,
    pub last_modified: Option<DateTime<Utc>>,
}

pub trait ObjectStore {
    fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> impl Future<Output = StorageResult<()>> + Send;

    fn head_metadata(
        &self,
        bucket: &str,
        key: &str,
    ) -> impl Future<Output = StorageResult<ObjectSummary>> + Send;

    fn presigned_get_url(
        &self,
        bucket: &str,
        key: &str,
        ttl_secs: u64,
    ) -> impl Future<Output = StorageResult<String>> + Send;
}

impl<T: ObjectStore> ObjectStore for &T {
    fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> impl Future<Output = StorageResult<()>> + Send {
        (**self).put(bucket, key, body, content_type)
    }

    fn head_metadata(
        &self,
        bucket: &str,
        key: &str,
    ) -> impl Future<Output = StorageResult<ObjectSummary>> + Send {
        (**self).head_metadata(bucket, key)
    }

    fn presigned_get_url(
        &self,
        bucket: &str,
        key: &str,
        ttl_secs: u64,
    ) -> impl Future<Output = StorageResult<String>> + Send {
        (**self).presigned_get_url(bucket, key, ttl_secs)
    }
}

pub struct S3Store {
    client: Client,
}

impl S3Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ObjectStore for S3Store {
    async fn put(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str) -> StorageResult<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::Put(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }

    async fn head_metadata(&self, bucket: &str, key: &str) -> StorageResult<ObjectSummary> {
        let head = self
            .client
            .head_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Head(DisplayErrorContext(&e).to_string()))?;

        Ok(ObjectSummary {
            size_bytes: head.content_length(),
            last_modified: head
                .last_modified()
                .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos())),
        })
    }

    async fn presigned_get_url(&self, bucket: &str, key: &str, ttl_secs: u64) -> StorageResult<String> {
        let presigning = PresigningConfig::expires_in(Duration::from_secs(ttl_secs))
            .map_err(|e| StorageError::Presign(e.to_string()))?;

        let request = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| StorageError::Presign(DisplayErrorContext(&e).to_string()))?;

        Ok(request.uri().to_string())
    }
}
