//! Prometheus metrics for review queries
//!
//! Tracks query latency by outcome and failures by error kind

use prometheus::{register_histogram_vec, register_int_counter_vec, HistogramVec, IntCounterVec};
use std::time::Duration;

use crate::error::ReviewErrorKind;

lazy_static::lazy_static! {
    /// Time spent executing a review query
    static ref REVIEW_QUERY_DURATION: HistogramVec = register_histogram_vec!(
        "review_query_duration_seconds",
        "Review query execution time",
        &["query", "outcome"],
        vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0]
    ).expect("Prometheus metrics registration should succeed at startup");

    /// Review query failures by error kind
    static ref REVIEW_QUERY_ERRORS: IntCounterVec = register_int_counter_vec!(
        "review_query_errors_total",
        "Review query failures",
        &["query", "kind"]
    ).expect("Prometheus metrics registration should succeed at startup");
}

/// Record one query execution
pub(crate) fn record_query(query: &str, elapsed: Duration, outcome: Result<(), ReviewErrorKind>) {
    let label = match outcome {
        Ok(()) => "ok",
        Err(_) => "error",
    };

    REVIEW_QUERY_DURATION
        .with_label_values(&[query, label])
        .observe(elapsed.as_secs_f64());

    if let Err(kind) = outcome {
        REVIEW_QUERY_ERRORS
            .with_label_values(&[query, kind.as_str()])
            .inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_query_counts_errors_by_kind() {
        let before = REVIEW_QUERY_ERRORS
            .with_label_values(&["metrics_test", "schema"])
            .get();

        record_query("metrics_test", Duration::from_millis(3), Ok(()));
        record_query(
            "metrics_test",
            Duration::from_millis(1),
            Err(ReviewErrorKind::Schema),
        );

        let after = REVIEW_QUERY_ERRORS
            .with_label_values(&["metrics_test", "schema"])
            .get();
        assert_eq!(after, before + 1);

        let observed = REVIEW_QUERY_DURATION
            .with_label_values(&["metrics_test", "ok"])
            .get_sample_count();
        assert!(observed >= 1);
    }
}
