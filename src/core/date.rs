use anyhow::Context;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// "Fri Dec 20 2019"
const CALENDAR_DAY: &[BorrowedFormatItem<'static>] =
    format_description!("[weekday repr:short] [month repr:short] [day] [year]");

/// Picker display format, "20 December, 2019".
const DISPLAY_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[day] [month repr:long], [year]");

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Normalized day representation used for start-date membership checks.
pub fn calendar_day(date: Date) -> anyhow::Result<String> {
    date.format(CALENDAR_DAY)
        .with_context(|| format!("Failed to format {date} as a calendar day"))
}

pub fn parse_calendar_day(day: &str) -> anyhow::Result<Date> {
    Date::parse(day, CALENDAR_DAY).with_context(|| format!("Invalid calendar day {day:?}"))
}

pub fn display_date(date: Date) -> anyhow::Result<String> {
    date.format(DISPLAY_DATE)
        .with_context(|| format!("Failed to format {date} for display"))
}

pub fn parse_iso_date(input: &str) -> anyhow::Result<Date> {
    Date::parse(input.trim(), ISO_DATE)
        .with_context(|| format!("Expected a date like 2019-12-20, got {input:?}"))
}
