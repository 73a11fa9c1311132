use std::future::Future;

use reqwest::Client;
use rss::{Channel, Item};
use tracing::warn;

use crate::FeedError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub published_raw: Option<String>,
}

/// Result of one feed download. `malformed` is set when the document could not
/// be parsed cleanly; whatever entries were recoverable are still returned.
#[derive(Debug, Default)]
pub struct FeedFetch {
    pub entries: Vec<FeedEntry>,
    pub malformed: bool,
}

pub trait FeedSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FeedFetch, FeedError>> + Send;
}

pub struct RssFeed {
    client: Client,
}

impl RssFeed {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl FeedSource for RssFeed {
    async fn fetch(&self, url: &str) -> Result<FeedFetch, FeedError> {
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(FeedError::Status(resp.status()));
        }
        let content = resp.bytes().await?;

        Ok(parse_channel(&content[..]))
    }
}

pub fn parse_channel(content: &[u8]) -> FeedFetch {
    let channel = match Channel::read_from(content) {
        Ok(channel) => channel,
        Err(e) => {
            warn!(error = %e, "RSS document could not be parsed");
            return FeedFetch {
                entries: Vec::new(),
                malformed: true,
            };
        }
    };

    let mut fetch = FeedFetch::default();
    for item in channel.items() {
        match entry_from_item(item) {
            Some(entry) => fetch.entries.push(entry),
            None => fetch.malformed = true,
        }
    }

    fetch
}

fn entry_from_item(item: &Item) -> Option<FeedEntry> {
    Some(FeedEntry {
        title: item.title()?.trim().to_string(),
        link: item.link()?.trim().to_string(),
        published_raw: item.pub_date().map(str::to_string),
    })
}
