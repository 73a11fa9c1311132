#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} is not a valid number: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Translate API error: {0}")]
    Api(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("PutObject failed: {0}")]
    Put(String),

    #[error("HeadObject failed: {0}")]
    Head(String),

    #[error("Presigning failed: {0}")]
    Presign(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Webhook request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Payload encoding error: {0}")]
    Encode(String),
}

/// Failures that escape a single S3 record and end the notifier invocation.
#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error("Chat delivery error: {0}")]
    Chat(#[from] ChatError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type StorageResult<T> = Result<T, StorageError>;
pub type NotifierResult<T> = Result<T, NotifierError>;
