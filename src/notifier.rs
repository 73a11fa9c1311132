use aws_lambda_events::event::s3::{S3Event, S3EventRecord};
use tracing::{error, info, warn};

use crate::message::{decode_object_key, error_message, link_unavailable_message, upload_message};
use crate::slack::ChatSink;
use crate::storage::{ObjectStore, ObjectSummary};
use crate::{HandlerResponse, NotifierConfig, NotifierResult};

/// Bucket and raw (still percent-encoded) key of one S3 change record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageRecord {
    pub bucket: Option<String>,
    pub key: Option<String>,
}

impl StorageRecord {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: Some(bucket.into()),
            key: Some(key.into()),
        }
    }

    pub fn from_event(event: &S3Event) -> Vec<Self> {
        event.records.iter().map(Self::from).collect()
    }
}

impl From<&S3EventRecord> for StorageRecord {
    fn from(record: &S3EventRecord) -> Self {
        Self {
            bucket: record.s3.bucket.name.clone(),
            key: record.s3.object.key.clone(),
        }
    }
}

/// Announces new report objects in Slack.
pub struct UploadNotifier<S, C> {
    config: NotifierConfig,
    store: S,
    chat: C,
}

impl<S, C> UploadNotifier<S, C>
where
    S: ObjectStore,
    C: ChatSink,
{
    pub fn new(config: NotifierConfig, store: S, chat: C) -> Self {
        Self { config, store, chat }
    }

    /// Process every record in order.
    ///
    /// Never fails: a failure that escapes a record stops the loop, is reported
    /// to the chat channel on a best-effort basis, and turns into a 500.
    pub async fn handle(&self, records: &[StorageRecord]) -> HandlerResponse {
        match self.process_all(records).await {
            Ok(()) => HandlerResponse::ok("Slack notification(s) processed."),
            Err(e) => {
                error!(error = %e, "error processing S3 event");
                if let Err(send_err) = self.chat.post(&error_message(&e.to_string())).await {
                    error!(error = %send_err, "failed to send error message to Slack");
                }
                HandlerResponse::error(format!("Error: {e}"))
            }
        }
    }

    async fn process_all(&self, records: &[StorageRecord]) -> NotifierResult<()> {
        for record in records {
            let (Some(bucket), Some(raw_key)) = (record.bucket.as_deref(), record.key.as_deref())
            else {
                warn!("bucket name or object key missing from S3 event record");
                continue;
            };
            if bucket.is_empty() || raw_key.is_empty() {
                warn!("bucket name or object key missing from S3 event record");
                continue;
            }

            self.process_record(bucket, &decode_object_key(raw_key)).await?;
        }
        Ok(())
    }

    async fn process_record(&self, bucket: &str, key: &str) -> NotifierResult<()> {
        info!(%bucket, %key, "processing object");

        if !key.starts_with(&self.config.key_prefix) {
            info!(%key, prefix = %self.config.key_prefix, "object outside prefix, skipping");
            return Ok(());
        }

        let summary = match self.store.head_metadata(bucket, key).await {
            Ok(summary) => summary,
            Err(e) => {
                error!(%bucket, %key, error = %e, "failed to read object metadata");
                ObjectSummary::default()
            }
        };

        let payload = match self
            .store
            .presigned_get_url(bucket, key, self.config.presigned_url_expiration)
            .await
        {
            Ok(url) => upload_message(bucket, key, &summary, &url, self.config.expiration_hours()),
            Err(e) => {
                error!(%bucket, %key, error = %e, "failed to generate presigned URL");
                link_unavailable_message(bucket, key)
            }
        };

        let status = self.chat.post(&payload).await?;
        if status >= 300 {
            error!(status, "Slack rejected the message");
        }

        Ok(())
    }
}
