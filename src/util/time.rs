use chrono::{DateTime, Utc};

/// Get the current time. The core itself never reads a clock; operations
/// take their timestamps from the caller, and this is a convenience for
/// callers (and our tests) that want "now".
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
