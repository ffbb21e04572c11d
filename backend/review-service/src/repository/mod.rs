mod partition;
mod query_base;
mod statistics;
mod tags;
mod r#trait;

pub use partition::{RelationPartition, RELATION_TABLE_PREFIX};
pub use query_base::ReviewableQueryBase;
pub use r#trait::ReviewableQuery;
pub use statistics::{begin_snapshot, execute_in_snapshot, ReviewableStatisticsQuery};
pub use tags::{TagPredicate, NEEDS_REVIEW, REVIEWABLE};
