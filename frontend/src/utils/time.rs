use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::fmt::Display;

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Value for `<input type="date">`.
pub fn date_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// `Jan 5, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Jan 5, 2024, 10:30 AM`
pub fn format_date_time<Tz>(value: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value.format("%b %-d, %Y, %I:%M %p").to_string()
}
