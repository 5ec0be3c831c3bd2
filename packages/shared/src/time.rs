use chrono::{DateTime, FixedOffset, Utc};

/// Get the current time in JST
pub fn jst_now() -> DateTime<FixedOffset> {
    let jst_offset = FixedOffset::east_opt(9 * 3600).unwrap(); // JST is UTC+9
    Utc::now().with_timezone(&jst_offset)
}

/// Get current Unix timestamp in JST (milliseconds)
pub fn get_jst_timestamp() -> i64 {
    jst_now().timestamp_millis()
}

/// Convert a Unix timestamp in milliseconds to an RFC 3339 string in JST
pub fn timestamp_to_jst_rfc3339(millis: i64) -> String {
    let jst_offset = FixedOffset::east_opt(9 * 3600).unwrap(); // JST is UTC+9
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(dt) => dt.with_timezone(&jst_offset).to_rfc3339(),
        None => millis.to_string(),
    }
}
