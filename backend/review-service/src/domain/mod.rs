pub mod models;

pub use models::{MapId, ReviewQueryMapper, ReviewableStatistics};
