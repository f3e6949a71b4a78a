use chrono::{DateTime, Local};
use std::time::{Instant, SystemTime};

/// Format the current time as H:MM:SS (24-hour format) in local time
pub fn format_current_time() -> String {
    format_time(SystemTime::now())
}

/// Format a SystemTime as H:MM:SS (24-hour format) in local time
pub fn format_time(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    // %-H drops the leading zero from the hour
    datetime.format("%-H:%M:%S").to_string()
}

/// Milliseconds elapsed since `start`, saturating at u64::MAX
pub fn elapsed_millis(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
