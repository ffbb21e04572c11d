//! Per-map relation partitions
//!
//! Every map keeps its relations in its own `current_relations_<map id>`
//! table. The table name is derived from the numeric id and checked against
//! the catalog before any statement interpolates it.

use sqlx::PgConnection;
use tracing::debug;

use crate::domain::models::MapId;
use crate::error::{ReviewError, ReviewResult};

pub const RELATION_TABLE_PREFIX: &str = "current_relations";

/// Catalog lookup of a table visible on the search path. Works on servers
/// where `to_regclass` only accepts `cstring`.
const PARTITION_EXISTS_SQL: &str = r#"
    SELECT EXISTS (
        SELECT 1
        FROM pg_catalog.pg_class c
        JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace
        WHERE c.relname = $1
          AND c.relkind IN ('r', 'p', 'v', 'm', 'f')
          AND n.nspname = ANY(current_schemas(false))
    )
    "#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationPartition {
    map_id: MapId,
    table: String,
}

impl RelationPartition {
    /// Derive the partition name without touching the database.
    ///
    /// Map ids are positive; anything else never names a partition.
    pub fn for_map(map_id: MapId) -> ReviewResult<Self> {
        if map_id.get() <= 0 {
            return Err(ReviewError::MissingPartition { map_id });
        }

        Ok(Self {
            map_id,
            table: format!("{}_{}", RELATION_TABLE_PREFIX, map_id.get()),
        })
    }

    /// Derive the partition name and confirm the table exists.
    pub async fn resolve(conn: &mut PgConnection, map_id: MapId) -> ReviewResult<Self> {
        let partition = Self::for_map(map_id)?;

        let exists: bool = sqlx::query_scalar(PARTITION_EXISTS_SQL)
            .bind(&partition.table)
            .fetch_one(conn)
            .await?;

        if !exists {
            debug!(map_id = %map_id, table = %partition.table, "Relation partition not found");
            return Err(ReviewError::MissingPartition { map_id });
        }

        Ok(partition)
    }

    pub fn map_id(&self) -> MapId {
        self.map_id
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Table name as a quoted SQL identifier
    pub fn quoted_table(&self) -> String {
        format!("\"{}\"", self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReviewErrorKind;

    #[test]
    fn test_partition_name_from_map_id() {
        let partition = RelationPartition::for_map(MapId::new(1234)).unwrap();
        assert_eq!(partition.table_name(), "current_relations_1234");
        assert_eq!(partition.quoted_table(), "\"current_relations_1234\"");
        assert_eq!(partition.map_id(), MapId::new(1234));
    }

    #[test]
    fn test_existence_check_uses_catalog_tables() {
        assert!(PARTITION_EXISTS_SQL.contains("pg_catalog.pg_class"));
        assert!(PARTITION_EXISTS_SQL.contains("current_schemas(false)"));
        assert!(!PARTITION_EXISTS_SQL.contains("to_regclass"));
    }

    #[test]
    fn test_non_positive_map_id_has_no_partition() {
        for id in [0, -1, i64::MIN] {
            let err = RelationPartition::for_map(MapId::new(id)).unwrap_err();
            assert_eq!(err.kind(), ReviewErrorKind::Schema);
        }
    }
}
