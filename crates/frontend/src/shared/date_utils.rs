//! Utilities for order timestamps and calendar dates
//!
//! All conversions go through [`LocalZone`] so the viewer's time zone can be
//! replaced by a fixed offset in tests.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use wasm_bindgen::JsValue;

/// Display pattern: `05 Mar 2024, 02:07 pm`
const ORDER_TIMESTAMP_FORMAT: &str = "%d %b %Y, %I:%M %P";

/// Time zone used to turn instants into local calendar dates and clock times
pub trait LocalZone {
    /// UTC offset in effect at `instant`
    fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset;

    fn local_time(&self, instant: &DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.offset_at(instant))
    }

    fn local_date(&self, instant: &DateTime<Utc>) -> NaiveDate {
        self.local_time(instant).date_naive()
    }
}

impl LocalZone for FixedOffset {
    fn offset_at(&self, _instant: &DateTime<Utc>) -> FixedOffset {
        *self
    }
}

/// The viewer's zone as reported by the browser, DST-aware per instant
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserZone;

impl LocalZone for BrowserZone {
    fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset {
        let date = js_sys::Date::new(&JsValue::from_f64(instant.timestamp_millis() as f64));
        // getTimezoneOffset() is minutes behind UTC
        let east_minutes = -(date.get_timezone_offset() as i32);
        FixedOffset::east_opt(east_minutes * 60).unwrap_or_else(|| Utc.fix())
    }
}

/// Format a raw order timestamp for the table; unparseable text is shown as is
pub fn format_order_timestamp(raw: &str, zone: &impl LocalZone) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(parsed) => zone
            .local_time(&parsed.with_timezone(&Utc))
            .format(ORDER_TIMESTAMP_FORMAT)
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Parse the value of an `<input type="date">` (`YYYY-MM-DD`); empty means no date
pub fn parse_filter_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Inverse of [`parse_filter_date`], for reflecting the filter back into the input
pub fn filter_date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
