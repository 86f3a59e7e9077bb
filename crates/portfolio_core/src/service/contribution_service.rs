//! Contribution calendar aggregation.
//!
//! # Responsibility
//! - Bucket a raw daily activity series into Sunday-aligned weeks.
//! - Map raw counts to discrete intensity levels.
//! - Carry source-supplied totals through to the aggregate.
//!
//! # Invariants
//! - Every produced week holds exactly seven days; weeks are
//!   contiguous and calendar-ordered.
//! - Concatenating all weeks' days yields a gap-free, duplicate-free
//!   date range containing the input range.
//! - An empty series aggregates to the zero-state, never an error.

use crate::model::contribution::{
    ContributionDay, ContributionWeek, GitHubContributions, DAYS_PER_WEEK, MAX_INTENSITY_LEVEL,
};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use std::collections::BTreeMap;

/// One raw observation from the activity source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawActivityDay {
    pub date: NaiveDate,
    pub count: u32,
}

/// Raw input to aggregation: the day series plus the totals only the
/// source can know (categorical sub-counts, distinct repositories,
/// account creation instant).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawActivitySeries {
    pub days: Vec<RawActivityDay>,
    pub commits: u32,
    pub pull_requests: u32,
    pub issues: u32,
    pub repositories_contributed_to: u32,
    pub account_created_at: DateTime<Utc>,
}

/// Maps a raw daily count onto the `0..=4` intensity scale.
///
/// Fixed breakpoints: 0 -> 0, 1..=2 -> 1, 3..=5 -> 2, 6..=9 -> 3 and
/// 10+ saturates at 4. The breakpoints only shape the visualization;
/// totals never depend on them.
pub fn intensity_level(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=9 => 3,
        _ => MAX_INTENSITY_LEVEL,
    }
}

/// Aggregates a raw series into the calendar-plus-totals record.
///
/// Total contributions is the sum of raw counts; the categorical
/// sub-counts and repository count pass through unchanged, and the
/// account age is formatted against the current instant.
pub fn aggregate(series: &RawActivitySeries) -> GitHubContributions {
    aggregate_at(series, Utc::now())
}

/// Aggregation with an explicit "now", for deterministic callers.
pub fn aggregate_at(series: &RawActivitySeries, now: DateTime<Utc>) -> GitHubContributions {
    let counts = merge_counts(&series.days);
    let total_contributions = counts.values().sum();

    GitHubContributions {
        total_contributions,
        commits: series.commits,
        pull_requests: series.pull_requests,
        issues: series.issues,
        repositories_contributed_to: series.repositories_contributed_to,
        weeks: build_weeks(&counts),
        account_age: format_account_age(series.account_created_at, now),
    }
}

/// Folds raw observations into one count per calendar date.
///
/// Duplicate dates in the input are summed rather than rejected; the
/// calendar must never show the same date twice.
fn merge_counts(days: &[RawActivityDay]) -> BTreeMap<NaiveDate, u32> {
    let mut counts = BTreeMap::new();
    for day in days {
        *counts.entry(day.date).or_insert(0) += day.count;
    }
    counts
}

/// Buckets the merged series into Sunday-first seven-day weeks.
///
/// The covered range is widened to the preceding Sunday and the
/// following Saturday; padding days and interior gaps carry real
/// calendar dates with zero counts, so the produced weeks are always
/// well-formed and contiguous.
fn build_weeks(counts: &BTreeMap<NaiveDate, u32>) -> Vec<ContributionWeek> {
    let (Some((&first, _)), Some((&last, _))) =
        (counts.first_key_value(), counts.last_key_value())
    else {
        // Zero weeks is the documented empty-series shape.
        return Vec::new();
    };

    let start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));
    let end = last + Duration::days(i64::from(6 - last.weekday().num_days_from_sunday()));

    let mut weeks = Vec::new();
    let mut current = Vec::with_capacity(DAYS_PER_WEEK);
    let mut date = start;
    while date <= end {
        let day = match counts.get(&date) {
            Some(&count) => ContributionDay {
                date,
                count,
                level: intensity_level(count),
            },
            None => ContributionDay::blank(date),
        };
        current.push(day);
        if current.len() == DAYS_PER_WEEK {
            weeks.push(ContributionWeek {
                days: std::mem::take(&mut current),
            });
        }
        date = date + Duration::days(1);
    }

    debug_assert!(current.is_empty(), "range must cover whole weeks");
    weeks
}

/// Formats an account age like `3y 4mo`, `5mo` or `12d`.
///
/// Uses 365-day years and 30-day months; precision below one day is
/// ignored. A creation instant in the future reads as `0d`.
pub fn format_account_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - created_at).num_days().max(0);
    let years = days / 365;
    let months = (days % 365) / 30;

    if years > 0 {
        if months > 0 {
            format!("{years}y {months}mo")
        } else {
            format!("{years}y")
        }
    } else if months > 0 {
        format!("{months}mo")
    } else {
        format!("{days}d")
    }
}

#[cfg(test)]
mod tests {
    use super::{format_account_age, intensity_level};
    use crate::model::contribution::MAX_INTENSITY_LEVEL;
    use chrono::{TimeZone, Utc};

    #[test]
    fn level_breakpoints_are_monotonic_and_saturating() {
        assert_eq!(intensity_level(0), 0);
        assert_eq!(intensity_level(1), 1);
        assert_eq!(intensity_level(2), 1);
        assert_eq!(intensity_level(3), 2);
        assert_eq!(intensity_level(5), 2);
        assert_eq!(intensity_level(6), 3);
        assert_eq!(intensity_level(9), 3);
        assert_eq!(intensity_level(10), MAX_INTENSITY_LEVEL);
        assert_eq!(intensity_level(u32::MAX), MAX_INTENSITY_LEVEL);

        let mut previous = 0;
        for count in 0..=32 {
            let level = intensity_level(count);
            assert!(level >= previous, "level dropped at count {count}");
            previous = level;
        }
    }

    #[test]
    fn account_age_uses_compact_units() {
        let created = Utc.with_ymd_and_hms(2022, 3, 1, 0, 0, 0).unwrap();

        let now = Utc.with_ymd_and_hms(2026, 8, 25, 0, 0, 0).unwrap();
        assert_eq!(format_account_age(created, now), "4y 5mo");

        let now = Utc.with_ymd_and_hms(2022, 8, 1, 0, 0, 0).unwrap();
        assert_eq!(format_account_age(created, now), "5mo");

        let now = Utc.with_ymd_and_hms(2022, 3, 13, 0, 0, 0).unwrap();
        assert_eq!(format_account_age(created, now), "12d");

        // Future creation instants clamp to zero days.
        let now = Utc.with_ymd_and_hms(2022, 2, 1, 0, 0, 0).unwrap();
        assert_eq!(format_account_age(created, now), "0d");
    }
}
