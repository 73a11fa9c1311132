use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::week::jst;

const OFFSET_FORMAT: &str = "%d %b %Y %H:%M:%S %z";
const GMT_FORMAT: &str = "%d %b %Y %H:%M:%S GMT";

/// Drop a leading `Mon, ` so only the date fields decide the day.
fn strip_weekday(raw: &str) -> Option<&str> {
    let (day, rest) = raw.split_once(", ")?;
    if day.len() == 3 && day.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(rest.trim_start())
    } else {
        None
    }
}

/// Parse a feed `pubDate` into JST.
///
/// Accepts the RFC 822 style with a numeric offset (`+0000`) and the same
/// layout with a literal `GMT`. The weekday name is required but not checked
/// against the date. Anything else yields `None` and the entry should be
/// skipped.
pub fn parse_published(raw: &str) -> Option<DateTime<FixedOffset>> {
    let rest = strip_weekday(raw.trim())?;

    if let Ok(dt) = DateTime::parse_from_str(rest, OFFSET_FORMAT) {
        return Some(dt.with_timezone(&jst()));
    }

    NaiveDateTime::parse_from_str(rest, GMT_FORMAT)
        .ok()
        .map(|naive| naive.and_utc().with_timezone(&jst()))
}
