use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::time::Duration;

/// Process start, pinned by `main` before the server binds.
pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub fn uptime() -> Duration {
    Utc::now()
        .signed_duration_since(*START_TIME)
        .to_std()
        .unwrap_or_default()
}
