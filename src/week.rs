use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone};

const JST_OFFSET_SECS: i32 = 9 * 60 * 60;

/// The fixed UTC+9 offset every date in this crate is anchored to.
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).expect("UTC+9 is within the valid offset range")
}

/// Monday..Sunday of the calendar week before the one containing "now", in JST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    pub fn previous<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let today = now.with_timezone(&jst()).date_naive();
        let days_since_monday = i64::from(today.weekday().num_days_from_monday());

        let end = today - Duration::days(days_since_monday + 1);
        let start = end - Duration::days(6);

        Self { start, end }
    }

    pub fn offset(&self) -> FixedOffset {
        jst()
    }

    /// Calendar-date containment, inclusive at both ends, after conversion to JST.
    pub fn contains<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> bool {
        let date = at.with_timezone(&self.offset()).date_naive();
        self.start <= date && date <= self.end
    }

    /// `20240101-20240107`, used in the report object key.
    pub fn compact_range(&self) -> String {
        format!("{}-{}", self.start.format("%Y%m%d"), self.end.format("%Y%m%d"))
    }

    pub fn slash_range(&self) -> String {
        format!("{} - {}", self.start.format("%Y/%m/%d"), self.end.format("%Y/%m/%d"))
    }
}
