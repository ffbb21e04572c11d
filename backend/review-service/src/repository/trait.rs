use async_trait::async_trait;

use crate::domain::models::ReviewQueryMapper;
use crate::error::ReviewResult;

/// Read-only query against a map's review data.
///
/// Each variant runs its own statements and returns its own result type;
/// variants are picked by constructing the concrete query.
#[async_trait]
pub trait ReviewableQuery: Send {
    type Output: ReviewQueryMapper;

    /// Short name used in logs and metric labels
    fn name(&self) -> &'static str;

    async fn execute(&mut self) -> ReviewResult<Self::Output>;
}
