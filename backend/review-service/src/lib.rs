//! Review progress statistics for conflation-review maps
//!
//! Counts how many relations of a map are reviewable and how many still need
//! a reviewer, reading the map's own `current_relations_<map id>` table.

pub mod config;
pub mod domain;
pub mod error;
mod metrics;
pub mod repository;

pub use domain::models::{MapId, ReviewQueryMapper, ReviewableStatistics};
pub use error::{ReviewError, ReviewErrorKind, ReviewResult};
pub use repository::{
    begin_snapshot, execute_in_snapshot, ReviewableQuery, ReviewableStatisticsQuery,
};
