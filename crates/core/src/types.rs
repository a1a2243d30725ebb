use chrono::SubsecRound;

/// Questions and answers are keyed by time-ordered UUIDs.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh entity id.
pub fn new_id() -> EntityId {
    uuid::Uuid::now_v7()
}

/// Current time at microsecond precision, the resolution PostgreSQL keeps.
///
/// Truncating here means a value compares the same before and after a
/// round-trip through the store.
pub fn now() -> Timestamp {
    chrono::Utc::now().trunc_subsecs(6)
}
