use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::feed::FeedEntry;
use crate::published::parse_published;
use crate::week::WeekWindow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub title: String,
    pub link: String,
    pub published: DateTime<FixedOffset>,
}

/// Entries of the target week keyed by their JST calendar date.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DayBuckets {
    pub days: BTreeMap<NaiveDate, Vec<ParsedEntry>>,
    pub matched: usize,
}

impl DayBuckets {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Keep the entries published inside `window` and group them by day.
///
/// Entries without a date, with an unparsable date, or outside the window are
/// dropped silently.
pub fn bucket_entries(entries: &[FeedEntry], window: &WeekWindow) -> DayBuckets {
    let mut buckets = DayBuckets::default();

    for entry in entries {
        let Some(raw) = entry.published_raw.as_deref() else {
            continue;
        };
        let Some(published) = parse_published(raw) else {
            continue;
        };
        if !window.contains(&published) {
            continue;
        }

        buckets
            .days
            .entry(published.date_naive())
            .or_default()
            .push(ParsedEntry {
                title: entry.title.clone(),
                link: entry.link.clone(),
                published,
            });
        buckets.matched += 1;
    }

    buckets
}
