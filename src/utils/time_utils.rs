use chrono::{DateTime, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    pub const DETAILED_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
}

/// Convert Unix epoch seconds (possibly fractional, as some exports write
/// `1325412060.0`) to whole milliseconds. `None` when the instant is not
/// representable as a UTC date.
pub fn epoch_sec_to_ms(epoch_sec: f64) -> Option<i64> {
    let ms = (epoch_sec * TimeUtils::MS_IN_S as f64).round();
    if !ms.is_finite() || ms < i64::MIN as f64 || ms >= i64::MAX as f64 {
        return None;
    }
    let ms = ms as i64;
    DateTime::<Utc>::from_timestamp_millis(ms).map(|_| ms)
}

pub fn days_to_ms(days: i64) -> i64 {
    days * TimeUtils::MS_IN_D
}

/// Used for display purposes (axis labels, status bar). Out-of-range values
/// render as an empty string rather than panicking.
pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    epoch_ms_to_utc_with_format(epoch_ms, TimeUtils::STANDARD_TIME_FORMAT)
}

pub fn epoch_ms_to_utc_with_format(epoch_ms: i64, format: &str) -> String {
    match DateTime::<Utc>::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format(format).to_string(),
        None => String::new(),
    }
}

pub fn utc_now_as_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}
