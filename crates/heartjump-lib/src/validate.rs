//! Field constraints for incoming records.

use crate::record::IncomingRecord;

/// Check an incoming record against the intake constraints.
///
/// All of the following must hold:
///
/// - `age` is in the inclusive range 1..=5
/// - `result` is in the inclusive range 0..=4
/// - `answer` is exactly seven ASCII digits, with no sign or whitespace
///
/// Returns a bare boolean with no reason code; callers reject on `false`
/// without field-level diagnostics.
pub fn check_record(record: &IncomingRecord) -> bool {
    if !(1..=5).contains(&record.age) {
        return false;
    }

    if !(0..=4).contains(&record.result) {
        return false;
    }

    if record.answer.len() != 7 {
        return false;
    }

    record.answer.bytes().all(|b| b.is_ascii_digit())
}
