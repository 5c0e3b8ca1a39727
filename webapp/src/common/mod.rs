pub mod context;
pub mod scroll;
pub mod style;
pub mod theme;

use chrono::{DateTime, Datelike, Local};

// blog dates arrive as rfc3339 strings; anything else is shown as sent
pub fn short_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_owned(),
    }
}

pub fn current_year() -> i32 {
    Local::now().year()
}
