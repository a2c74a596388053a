//! Date display helpers.
//!
//! Every date shown or compared is the calendar day written in the leading
//! `YYYY-MM-DD` of the API timestamp, with no timezone shift. Under `csr` that
//! day is rendered through the browser's `toLocaleDateString` (as a local
//! date, so the user's offset cannot move it); native builds and tests render
//! it as US-style `M/D/YYYY`. The overdue check reads the same day, so the
//! "Due" label and the `Overdue` marker always agree.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::Date;
use time::macros::format_description;

use crate::net::types::{Task, TaskStatus};

pub const NEVER: &str = "Never";
pub const NO_DUE_DATE: &str = "No due date";

/// Calendar date from the leading `YYYY-MM-DD` of an ISO 8601 timestamp.
pub fn parse_date(raw: &str) -> Option<Date> {
    let day = raw.trim().get(..10)?;
    Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
}

fn us_short_date(date: Date) -> String {
    date.format(format_description!("[month padding:none]/[day padding:none]/[year]"))
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(feature = "csr")]
fn locale_short_date(date: Date) -> String {
    let Ok(year) = u32::try_from(date.year()) else {
        return us_short_date(date);
    };
    let month = i32::from(u8::from(date.month())) - 1;
    let local = js_sys::Date::new_with_year_month_day(year, month, i32::from(date.day()));
    let locale = web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "en-US".to_owned());
    String::from(local.to_locale_date_string(&locale, &wasm_bindgen::JsValue::UNDEFINED))
}

#[cfg(not(feature = "csr"))]
fn locale_short_date(date: Date) -> String {
    us_short_date(date)
}

/// Locale short date for `raw`; unparseable input is shown as-is.
pub fn short_date(raw: &str) -> String {
    parse_date(raw).map_or_else(|| raw.to_owned(), locale_short_date)
}

/// [`short_date`], or `missing` when there is no date.
pub fn date_or(raw: Option<&str>, missing: &str) -> String {
    raw.map_or_else(|| missing.to_owned(), short_date)
}

/// Today's local calendar date, when the environment can tell.
pub fn today() -> Option<Date> {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        let month = u8::try_from(now.get_month() + 1).ok()?;
        let day = u8::try_from(now.get_date()).ok()?;
        let year = i32::try_from(now.get_full_year()).ok()?;
        Date::from_calendar_date(year, time::Month::try_from(month).ok()?, day).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        Some(time::OffsetDateTime::now_utc().date())
    }
}

/// A task is overdue when its due date is strictly before `today` and it is
/// not completed. Tasks without a parseable due date never are.
pub fn is_overdue(task: &Task, today: Date) -> bool {
    task.status != TaskStatus::Completed
        && task.due_date.as_deref().and_then(parse_date).is_some_and(|due| due < today)
}

/// Estimated effort label, e.g. `8h` or `2.5h`.
pub fn hours_label(hours: f64) -> String {
    format!("{hours}h")
}
