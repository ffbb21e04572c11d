use async_trait::async_trait;
use sqlx::{Connection, PgConnection, Postgres, Transaction};
use std::time::Instant;
use tracing::{debug, error, instrument};

use super::partition::RelationPartition;
use super::query_base::ReviewableQueryBase;
use super::r#trait::ReviewableQuery;
use super::tags::{TagPredicate, NEEDS_REVIEW, REVIEWABLE};
use crate::domain::models::{MapId, ReviewableStatistics};
use crate::error::ReviewResult;
use crate::metrics::record_query;

/// Total and remaining reviewable relation counts for one map
pub struct ReviewableStatisticsQuery<'c> {
    base: ReviewableQueryBase<'c>,
}

impl<'c> ReviewableStatisticsQuery<'c> {
    pub fn new(connection: &'c mut PgConnection, map_id: MapId) -> Self {
        Self {
            base: ReviewableQueryBase::new(connection, map_id),
        }
    }

    pub fn map_id(&self) -> MapId {
        self.base.map_id()
    }

    async fn count_matching(
        &mut self,
        partition: &RelationPartition,
        predicate: TagPredicate,
    ) -> ReviewResult<u64> {
        let sql = predicate.count_sql(partition);
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(predicate.key)
            .bind(predicate.value)
            .fetch_one(self.base.connection())
            .await?;

        // COUNT(*) is never negative
        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn total_reviewables_count(
        &mut self,
        partition: &RelationPartition,
    ) -> ReviewResult<u64> {
        self.count_matching(partition, REVIEWABLE).await
    }

    async fn remaining_reviewables_count(
        &mut self,
        partition: &RelationPartition,
    ) -> ReviewResult<u64> {
        self.count_matching(partition, NEEDS_REVIEW).await
    }

    #[instrument(skip(self), fields(map_id = %self.base.map_id()))]
    async fn run(&mut self) -> ReviewResult<ReviewableStatistics> {
        let map_id = self.base.map_id();
        let partition = RelationPartition::resolve(self.base.connection(), map_id).await?;

        let total_count = self.total_reviewables_count(&partition).await?;
        let remaining_count = self.remaining_reviewables_count(&partition).await?;

        debug!(
            table = %partition.table_name(),
            total_count,
            remaining_count,
            "Computed reviewable statistics"
        );

        Ok(ReviewableStatistics::new(total_count, remaining_count))
    }
}

#[async_trait]
impl<'c> ReviewableQuery for ReviewableStatisticsQuery<'c> {
    type Output = ReviewableStatistics;

    fn name(&self) -> &'static str {
        "reviewable_statistics"
    }

    async fn execute(&mut self) -> ReviewResult<ReviewableStatistics> {
        let start = Instant::now();
        let result = self.run().await;

        match &result {
            Ok(_) => record_query(self.name(), start.elapsed(), Ok(())),
            Err(e) => {
                error!(
                    map_id = %self.base.map_id(),
                    kind = e.kind().as_str(),
                    error = %e,
                    "Reviewable statistics query failed"
                );
                record_query(self.name(), start.elapsed(), Err(e.kind()));
            }
        }

        result
    }
}

/// Open a `REPEATABLE READ, READ ONLY` transaction on the caller's
/// connection. Every statement run through it sees the snapshot taken by
/// its first query; dropping it without commit rolls back.
pub async fn begin_snapshot(
    connection: &mut PgConnection,
) -> ReviewResult<Transaction<'_, Postgres>> {
    let mut tx = connection.begin().await?;

    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;

    Ok(tx)
}

/// Run the statistics query with both counts taken from one snapshot.
pub async fn execute_in_snapshot(
    connection: &mut PgConnection,
    map_id: MapId,
) -> ReviewResult<ReviewableStatistics> {
    let mut tx = begin_snapshot(connection).await?;

    let stats = ReviewableStatisticsQuery::new(&mut tx, map_id)
        .execute()
        .await?;

    tx.commit().await?;
    Ok(stats)
}
