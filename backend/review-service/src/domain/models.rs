use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a map dataset. Selects the dataset's relation partition,
/// it is never used as a row filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapId(i64);

impl MapId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for MapId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Marker for values returned by review queries.
///
/// Every query variant returns something callers can log and hand to
/// a serializer without knowing the concrete variant.
pub trait ReviewQueryMapper: Serialize + fmt::Debug + Send + Sync {}

/// Review progress for one map: how many relations are reviewable and how
/// many still need a reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewableStatistics {
    total_count: u64,
    remaining_count: u64,
}

impl ReviewableStatistics {
    pub fn new(total_count: u64, remaining_count: u64) -> Self {
        Self {
            total_count,
            remaining_count,
        }
    }

    /// Relations tagged `type=review`
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Relations tagged `hoot:review:needs=yes`
    pub fn remaining_count(&self) -> u64 {
        self.remaining_count
    }

    /// Both counts come from independent predicates, so remaining can exceed
    /// total on non-conforming data; this saturates at zero.
    pub fn reviewed_count(&self) -> u64 {
        self.total_count.saturating_sub(self.remaining_count)
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_count == 0
    }
}

impl ReviewQueryMapper for ReviewableStatistics {}
