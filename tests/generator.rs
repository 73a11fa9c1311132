mod common;

use aws_weekly_report::week::jst;
use aws_weekly_report::{GeneratorConfig, ReportGenerator};
use chrono::{DateTime, FixedOffset, TimeZone};
use common::{entry, EchoTranslator, FailingTranslator, MemoryStore, StaticFeed, UnavailableFeed};

fn config() -> GeneratorConfig {
    GeneratorConfig {
        feed_url: "https://aws.amazon.com/new/feed/".to_string(),
        bucket: "weekly-reports".to_string(),
        key_prefix: "reports/".to_string(),
    }
}

/// Wednesday 2024-01-10, so the target week is 2024-01-01..2024-01-07.
fn now() -> DateTime<FixedOffset> {
    jst().with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap()
}

fn week_feed() -> StaticFeed {
    StaticFeed::new(vec![
        entry("Amazon EC2 monday", "https://e/mon", "Mon, 01 Jan 2024 03:00:00 +0000"),
        entry("Amazon S3 wednesday", "https://e/wed", "Wed, 03 Jan 2024 03:00:00 GMT"),
        entry("AWS Lambda sunday", "https://e/sun", "Sun, 07 Jan 2024 03:00:00 +0000"),
        entry("Next week item", "https://e/next", "Mon, 08 Jan 2024 03:00:00 +0000"),
    ])
}

#[tokio::test]
async fn run_reports_uploaded_location() {
    let store = MemoryStore::default();
    let generator = ReportGenerator::new(config(), week_feed(), EchoTranslator, store);

    let response = generator.run(&now()).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.body,
        "Report generated and uploaded to s3://weekly-reports/reports/20240101-20240107-aws-weekly-update-report.md"
    );
}

#[tokio::test]
async fn report_content_and_placement() {
    let store = MemoryStore::default();
    let generator = ReportGenerator::new(config(), week_feed(), EchoTranslator, &store);

    generator.run(&now()).await;

    let puts = store.puts.lock().unwrap();
    assert_eq!(puts.len(), 1);
    let put = &puts[0];
    assert_eq!(put.bucket, "weekly-reports");
    assert_eq!(put.key, "reports/20240101-20240107-aws-weekly-update-report.md");
    assert_eq!(put.content_type, "text/markdown; charset=utf-8");

    let expected = "\
# AWS 週次更新レポート（2024年01月01日～2024年01月07日）- 日付順

## 2024年1月7日

- [**AWS Lambda sunday**](https://e/sun)

## 2024年1月3日

- [**Amazon S3 wednesday**](https://e/wed)

## 2024年1月1日

- [**Amazon EC2 monday**](https://e/mon)
";
    assert_eq!(put.body, expected);
    assert!(!put.body.contains("https://e/next"));
}

#[tokio::test]
async fn translation_outage_still_uploads() {
    let store = MemoryStore::default();
    let generator = ReportGenerator::new(config(), week_feed(), FailingTranslator, &store);

    let response = generator.run(&now()).await;

    assert!(response.is_success());
    let puts = store.puts.lock().unwrap();
    assert!(puts[0].body.contains("- [**Amazon S3 wednesday**](https://e/wed)"));
}

#[tokio::test]
async fn quiet_week_writes_nothing() {
    let store = MemoryStore::default();
    let feed = StaticFeed::new(vec![entry(
        "Old news",
        "https://e/old",
        "Mon, 02 Jan 2023 03:04:05 GMT",
    )]);
    let generator = ReportGenerator::new(config(), feed, EchoTranslator, &store);

    let response = generator.run(&now()).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "No new entries found for the last week.");
    assert!(store.puts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_feed_is_an_error() {
    let store = MemoryStore::default();
    let feed = StaticFeed {
        entries: Vec::new(),
        malformed: true,
    };
    let generator = ReportGenerator::new(config(), feed, EchoTranslator, &store);

    let response = generator.run(&now()).await;

    assert_eq!(response.status_code, 500);
    assert_eq!(response.body, "Failed to retrieve RSS feed entries");
    assert!(store.puts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn upload_failure_is_reported() {
    let store = MemoryStore {
        fail_put: true,
        ..Default::default()
    };
    let generator = ReportGenerator::new(config(), week_feed(), EchoTranslator, store);

    let response = generator.run(&now()).await;

    assert_eq!(response.status_code, 500);
    assert!(response.body.starts_with("Error uploading to S3:"));
    assert!(response.body.contains("AccessDenied"));
}

#[tokio::test]
async fn feed_outage_is_an_error_and_writes_nothing() {
    let store = MemoryStore::default();
    let generator = ReportGenerator::new(config(), UnavailableFeed, EchoTranslator, &store);

    let response = generator.run(&now()).await;

    assert_eq!(response.status_code, 500);
    assert!(response.body.starts_with("Failed to fetch RSS feed: "));
    assert!(response.body.contains("503"));
    assert!(store.puts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_feed_with_entries_still_uploads() {
    let store = MemoryStore::default();
    let feed = StaticFeed {
        malformed: true,
        ..week_feed()
    };
    let generator = ReportGenerator::new(config(), feed, EchoTranslator, &store);

    let response = generator.run(&now()).await;

    assert_eq!(response.status_code, 200);
    let puts = store.puts.lock().unwrap();
    assert_eq!(puts.len(), 1);
    assert!(puts[0].body.contains("- [**AWS Lambda sunday**](https://e/sun)"));
}
