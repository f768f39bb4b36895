use chrono::{DateTime, Utc};

pub fn now_u64() -> u64 {
    now_i64() as u64
}

pub fn now_i64() -> i64 {
    Utc::now().timestamp()
}

/// RFC 3339 rendering of a unix timestamp, for log lines.
pub fn unix_ts_to_rfc3339(unix_ts: u64) -> String {
    i64::try_from(unix_ts)
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| unix_ts.to_string())
}
