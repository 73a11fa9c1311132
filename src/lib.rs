pub mod bucket;
pub mod config;
pub mod error;
pub mod feed;
pub mod generator;
pub mod message;
pub mod notifier;
pub mod published;
pub mod report;
pub mod response;
pub mod slack;
pub mod storage;
pub mod telemetry;
pub mod translate;
pub mod week;

pub use config::{GeneratorConfig, NotifierConfig};
pub use error::*;
pub use generator::ReportGenerator;
pub use notifier::{StorageRecord, UploadNotifier};
pub use response::HandlerResponse;
