use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Identifier of a stored record.
///
/// Optimistic inserts mint a `Provisional` id (wall-clock milliseconds)
/// before the backend has seen the record; the canonical refetch replaces the
/// whole record with one carrying the `Confirmed` id the backend assigned.
/// The two variants never compare equal, so a provisional record cannot be
/// mistaken for its confirmed successor across a refetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum RecordId {
    Provisional(i64),
    Confirmed(i64),
}

impl RecordId {
    /// Mints a provisional id from the wall clock, millisecond precision.
    #[must_use]
    pub fn provisional() -> Self {
        RecordId::Provisional(Utc::now().timestamp_millis())
    }

    #[must_use]
    pub fn is_provisional(&self) -> bool {
        matches!(self, RecordId::Provisional(_))
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        match self {
            RecordId::Provisional(v) | RecordId::Confirmed(v) => *v,
        }
    }
}

// Anything read off the wire is canonical.
impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Confirmed(id)
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.value()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Provisional(v) => write!(f, "{v}*"),
            RecordId::Confirmed(v) => write!(f, "{v}"),
        }
    }
}
