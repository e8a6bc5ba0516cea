/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a fresh receipt identifier: a random 128-bit value rendered
/// as 32 lowercase hex characters (UUID v4, simple form).
pub fn receipt_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Normalize a username for lookup and storage: trimmed, lowercase.
pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}
