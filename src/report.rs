use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::bucket::{DayBuckets, ParsedEntry};
use crate::translate::{Translator, SOURCE_LANGUAGE, TARGET_LANGUAGE};
use crate::week::WeekWindow;

pub const CONTENT_TYPE: &str = "text/markdown; charset=utf-8";
const FILE_SUFFIX: &str = "aws-weekly-update-report.md";
const TITLE_DATE_FORMAT: &str = "%Y年%m月%d日";

/// `{prefix}{start}-{end}-aws-weekly-update-report.md`, with a `/` inserted
/// after a prefix that lacks one.
pub fn report_key(prefix: &str, window: &WeekWindow) -> String {
    let file_name = format!("{}-{FILE_SUFFIX}", window.compact_range());
    if prefix.is_empty() || prefix.ends_with('/') {
        format!("{prefix}{file_name}")
    } else {
        format!("{prefix}/{file_name}")
    }
}

pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '*' | '_' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn day_heading(date: NaiveDate) -> String {
    format!("## {}年{}月{}日", date.year(), date.month(), date.day())
}

async fn translated_title<T: Translator>(translator: &T, title: &str) -> String {
    match translator.translate(title, SOURCE_LANGUAGE, TARGET_LANGUAGE).await {
        Ok(translated) => translated,
        Err(e) => {
            warn!(title, error = %e, "translation failed, keeping original title");
            title.to_string()
        }
    }
}

/// Render the weekly Markdown report.
///
/// Days run newest first; entries within a day are ordered by their original
/// English title.
pub async fn render_report<T: Translator>(
    buckets: &DayBuckets,
    window: &WeekWindow,
    translator: &T,
) -> String {
    let mut doc = String::new();

    doc.push_str(&format!(
        "# AWS 週次更新レポート（{}～{}）- 日付順\n\n",
        window.start.format(TITLE_DATE_FORMAT),
        window.end.format(TITLE_DATE_FORMAT),
    ));

    for (date, entries) in buckets.days.iter().rev() {
        doc.push_str(&day_heading(*date));
        doc.push_str("\n\n");

        let mut sorted: Vec<&ParsedEntry> = entries.iter().collect();
        sorted.sort_by(|a, b| a.title.cmp(&b.title));

        for entry in sorted {
            let title = translated_title(translator, &entry.title).await;
            doc.push_str(&format!("- [**{}**]({})\n", escape_markdown(&title), entry.link));
        }
        doc.push('\n');
    }

    let trimmed = doc.trim_end_matches('\n').len();
    doc.truncate(trimmed);
    doc.push('\n');
    doc
}
