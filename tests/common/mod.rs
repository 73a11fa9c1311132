#![allow(dead_code)]

use std::sync::Mutex;

use aws_weekly_report::feed::{FeedEntry, FeedFetch, FeedSource};
use aws_weekly_report::slack::ChatSink;
use aws_weekly_report::storage::{ObjectStore, ObjectSummary};
use aws_weekly_report::translate::Translator;
use aws_weekly_report::{ChatError, FeedError, StorageError, StorageResult, TranslateError};
use serde_json::Value;

pub struct StaticFeed {
    pub entries: Vec<FeedEntry>,
    pub malformed: bool,
}

impl StaticFeed {
    pub fn new(entries: Vec<FeedEntry>) -> Self {
        Self {
            entries,
            malformed: false,
        }
    }
}

impl FeedSource for StaticFeed {
    async fn fetch(&self, _url: &str) -> Result<FeedFetch, FeedError> {
        Ok(FeedFetch {
            entries: self.entries.clone(),
            malformed: self.malformed,
        })
    }
}

/// Feed whose server answers 503.
pub struct UnavailableFeed;

impl FeedSource for UnavailableFeed {
    async fn fetch(&self, _url: &str) -> Result<FeedFetch, FeedError> {
        Err(FeedError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
    }
}

pub fn entry(title: &str, link: &str, published: &str) -> FeedEntry {
    FeedEntry {
        title: title.to_string(),
        link: link.to_string(),
        published_raw: Some(published.to_string()),
    }
}

pub struct EchoTranslator;

impl Translator for EchoTranslator {
    async fn translate(&self, text: &str, _: &str, _: &str) -> Result<String, TranslateError> {
        Ok(text.to_string())
    }
}

pub struct FailingTranslator;

impl Translator for FailingTranslator {
    async fn translate(&self, _: &str, _: &str, _: &str) -> Result<String, TranslateError> {
        Err(TranslateError::Api("service unavailable".to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct PutCall {
    pub bucket: String,
    pub key: String,
    pub body: String,
    pub content_type: String,
}

#[derive(Default)]
pub struct MemoryStore {
    pub puts: Mutex<Vec<PutCall>>,
    pub fail_put: bool,
    pub summary: Option<ObjectSummary>,
    pub presigned: Option<String>,
}

impl ObjectStore for MemoryStore {
    async fn put(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str) -> StorageResult<()> {
        if self.fail_put {
            return Err(StorageError::Put("AccessDenied".to_string()));
        }
        self.puts.lock().unwrap().push(PutCall {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body: String::from_utf8(body).unwrap(),
            content_type: content_type.to_string(),
        });
        Ok(())
    }

    async fn head_metadata(&self, _bucket: &str, _key: &str) -> StorageResult<ObjectSummary> {
        self.summary.ok_or_else(|| StorageError::Head("NotFound".to_string()))
    }

    async fn presigned_get_url(&self, bucket: &str, key: &str, ttl_secs: u64) -> StorageResult<String> {
        match &self.presigned {
            Some(base) => Ok(format!("{base}/{bucket}/{key}?X-Amz-Expires={ttl_secs}")),
            None => Err(StorageError::Presign("no credentials".to_string())),
        }
    }
}

/// Records every payload; `fail_after` makes the n-th and later posts error.
#[derive(Default)]
pub struct RecordingChat {
    pub posts: Mutex<Vec<Value>>,
    pub status: u16,
    pub fail_after: Option<usize>,
    pub fail_always: bool,
}

impl RecordingChat {
    pub fn ok() -> Self {
        Self {
            status: 200,
            ..Default::default()
        }
    }

    pub fn posts(&self) -> Vec<Value> {
        self.posts.lock().unwrap().clone()
    }
}

impl ChatSink for RecordingChat {
    async fn post(&self, payload: &Value) -> Result<u16, ChatError> {
        let mut posts = self.posts.lock().unwrap();
        let attempt = posts.len();
        posts.push(payload.clone());

        if self.fail_always || self.fail_after.is_some_and(|n| attempt >= n) {
            return Err(ChatError::Encode("unserializable payload".to_string()));
        }
        Ok(self.status)
    }
}
