/// Minutes elapsed since an RFC 3339 timestamp, or `None` if it does not parse.
///
/// Used by the kitchen view to bucket orders into urgency levels.
pub fn minutes_since(rfc3339: &str) -> Option<i64> {
    let then = chrono::DateTime::parse_from_rfc3339(rfc3339).ok()?;
    let diff = chrono::Utc::now().signed_duration_since(then);
    Some(diff.num_minutes())
}
