//! Record types for the intake pipeline.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Payload decoded from the request body.
///
/// Ephemeral: exists only for the duration of one invocation. Field
/// constraints are enforced separately by [`crate::check_record`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingRecord {
    /// Age bracket selected by the submitter.
    pub age: i32,

    /// Seven-digit answer string.
    pub answer: String,

    /// Result bucket.
    pub result: i32,
}

/// Record shape written to the store.
///
/// Created once per successful invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    /// Nanoseconds since the Unix epoch, assigned at persist time.
    /// Doubles as the unique key of the item.
    pub timestamp: i64,
    pub age: i32,
    pub answer: String,
    pub result: i32,
}

impl StoredRecord {
    /// Copy the incoming fields verbatim and attach the write timestamp.
    pub fn stamp(record: &IncomingRecord, timestamp: i64) -> Self {
        Self {
            timestamp,
            age: record.age,
            answer: record.answer.clone(),
            result: record.result,
        }
    }
}

/// Current wall-clock time in nanoseconds since the Unix epoch.
///
/// Saturates at `i64::MAX` once the nanosecond count no longer fits (year
/// 2262).
pub fn now_nanos() -> i64 {
    Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX)
}
