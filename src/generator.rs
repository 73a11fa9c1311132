use chrono::{DateTime, TimeZone};
use tracing::{error, info, warn};

use crate::bucket::bucket_entries;
use crate::feed::FeedSource;
use crate::report::{render_report, report_key, CONTENT_TYPE};
use crate::storage::ObjectStore;
use crate::translate::Translator;
use crate::week::WeekWindow;
use crate::{GeneratorConfig, HandlerResponse};

/// Builds last week's report from the feed and uploads it.
pub struct ReportGenerator<F, T, S> {
    config: GeneratorConfig,
    feed: F,
    translator: T,
    store: S,
}

impl<F, T, S> ReportGenerator<F, T, S>
where
    F: FeedSource,
    T: Translator,
    S: ObjectStore,
{
    pub fn new(config: GeneratorConfig, feed: F, translator: T, store: S) -> Self {
        Self {
            config,
            feed,
            translator,
            store,
        }
    }

    pub async fn run<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> HandlerResponse {
        let window = WeekWindow::previous(now);
        info!(week = %window.slash_range(), "target week");

        info!(url = %self.config.feed_url, "fetching RSS feed");
        let fetch = match self.feed.fetch(&self.config.feed_url).await {
            Ok(fetch) => fetch,
            Err(e) => {
                error!(error = %e, "failed to fetch RSS feed");
                return HandlerResponse::error(format!("Failed to fetch RSS feed: {e}"));
            }
        };

        if fetch.malformed {
            warn!("RSS feed may be malformed");
        }
        if fetch.entries.is_empty() {
            error!("no entries retrieved from RSS feed");
            return HandlerResponse::error("Failed to retrieve RSS feed entries");
        }
        info!(entries = fetch.entries.len(), "processing feed entries");

        let buckets = bucket_entries(&fetch.entries, &window);
        if buckets.is_empty() {
            info!("no entries published last week");
            return HandlerResponse::ok("No new entries found for the last week.");
        }
        info!(matched = buckets.matched, days = buckets.days.len(), "rendering report");

        let key = report_key(&self.config.key_prefix, &window);
        let content = render_report(&buckets, &window, &self.translator).await;

        let bucket = &self.config.bucket;
        if let Err(e) = self
            .store
            .put(bucket, &key, content.into_bytes(), CONTENT_TYPE)
            .await
        {
            error!(%bucket, %key, error = %e, "failed to upload report");
            return HandlerResponse::error(format!("Error uploading to S3: {e}"));
        }

        info!(%bucket, %key, "report uploaded");
        HandlerResponse::ok(format!("Report generated and uploaded to s3://{bucket}/{key}"))
    }
}
