use super::partition::RelationPartition;

/// Equality test on a single key of the hstore `tags` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPredicate {
    pub key: &'static str,
    pub value: &'static str,
}

/// Relations that take part in the review workflow
pub const REVIEWABLE: TagPredicate = TagPredicate {
    key: "type",
    value: "review",
};

/// Relations still waiting for a reviewer
pub const NEEDS_REVIEW: TagPredicate = TagPredicate {
    key: "hoot:review:needs",
    value: "yes",
};

impl TagPredicate {
    /// Count statement for this predicate against one partition.
    ///
    /// Key and value are bound as `$1` and `$2`; only the partition
    /// identifier is interpolated.
    pub fn count_sql(&self, partition: &RelationPartition) -> String {
        format!(
            "SELECT COUNT(*) FROM {} WHERE tags -> $1::text = $2::text",
            partition.quoted_table()
        )
    }
}
