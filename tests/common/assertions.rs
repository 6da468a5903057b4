//! Domain-specific assertion macros for logwizzy harnesses.
//!
//! These add context-rich failure messages that make it clear which group
//! diverged and how.

// ---------------------------------------------------------------------------
// Group assertions
// ---------------------------------------------------------------------------

/// Assert that an aggregator holds a group with the expected count and
/// severity.
///
/// ```rust
/// assert_group!(agg, "disk full", 3, Severity::Error);
/// ```
#[macro_export]
macro_rules! assert_group {
    ($agg:expr, $message:expr, $count:expr, $severity:expr) => {{
        let agg: &logwizzy_core::Aggregator = &$agg;
        let message: &str = $message;
        match agg.get(message) {
            Some(group) => {
                assert_eq!(
                    (group.count(), group.severity()),
                    ($count, $severity),
                    "assert_group! failed for {:?}: (count, severity) mismatch",
                    message
                );
                assert_eq!(
                    group.count(),
                    group.occurrences().len(),
                    "assert_group! failed for {:?}: count and occurrences diverged",
                    message
                );
            }
            None => panic!(
                "assert_group! failed: no group for {:?}.\n  Groups: {:?}",
                message,
                agg.groups().map(|g| g.sample()).collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert that every group in a ranked sequence satisfies a predicate.
///
/// ```rust
/// assert_groups_all(&ranked, |g| g.severity().is_error());
/// ```
pub fn assert_groups_all(
    groups: &[logwizzy_core::MessageGroup],
    pred: impl Fn(&logwizzy_core::MessageGroup) -> bool,
) {
    let failing: Vec<&str> = groups.iter().filter(|&g| !pred(g)).map(|g| g.sample()).collect();
    if !failing.is_empty() {
        panic!(
            "assert_groups_all failed: {} of {} groups did not satisfy predicate: {:?}",
            failing.len(),
            groups.len(),
            failing
        );
    }
}

// ---------------------------------------------------------------------------
// Ranking invariant helpers
// ---------------------------------------------------------------------------

/// Assert that `ranked` is sorted according to `ranker` with no two groups
/// comparing equal.
pub fn assert_strictly_ordered(ranker: &logwizzy_core::Ranker, ranked: &[logwizzy_core::MessageGroup]) {
    for pair in ranked.windows(2) {
        assert_eq!(
            ranker.compare(&pair[0], &pair[1]),
            std::cmp::Ordering::Less,
            "groups out of order: {:?} before {:?}",
            pair[0].sample(),
            pair[1].sample()
        );
    }
}
