use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use portfolio_core::{
    aggregate_at, GitHubContributions, RawActivityDay, RawActivitySeries, DAYS_PER_WEEK,
    MAX_INTENSITY_LEVEL,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn series(days: Vec<RawActivityDay>) -> RawActivitySeries {
    RawActivitySeries {
        days,
        commits: 10,
        pull_requests: 4,
        issues: 2,
        repositories_contributed_to: 3,
        account_created_at: Utc.with_ymd_and_hms(2020, 5, 1, 0, 0, 0).unwrap(),
    }
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap()
}

#[test]
fn empty_series_aggregates_to_zero_state_totals() {
    let result = aggregate_at(&series(Vec::new()), now());

    assert_eq!(result.total_contributions, 0);
    assert!(result.weeks.is_empty());
    // Source-supplied totals still pass through.
    assert_eq!(result.commits, 10);
    assert_eq!(result.repositories_contributed_to, 3);
}

#[test]
fn empty_constructor_is_the_zero_state() {
    let empty = GitHubContributions::empty();
    assert_eq!(empty.total_contributions, 0);
    assert!(empty.weeks.is_empty());
}

#[test]
fn zero_sum_series_has_all_levels_zero() {
    let days = (0..14)
        .map(|offset| RawActivityDay {
            date: date(2026, 1, 4) + Duration::days(offset),
            count: 0,
        })
        .collect();
    let result = aggregate_at(&series(days), now());

    assert_eq!(result.total_contributions, 0);
    for week in &result.weeks {
        for day in &week.days {
            assert_eq!(day.level, 0);
            assert_eq!(day.count, 0);
        }
    }
}

#[test]
fn maximum_count_day_saturates_at_top_level() {
    let days = vec![
        RawActivityDay { date: date(2026, 1, 4), count: 1 },
        RawActivityDay { date: date(2026, 1, 5), count: 37 },
        RawActivityDay { date: date(2026, 1, 6), count: 4 },
    ];
    let result = aggregate_at(&series(days), now());

    let peak = result
        .weeks
        .iter()
        .flat_map(|w| &w.days)
        .find(|d| d.date == date(2026, 1, 5))
        .unwrap();
    assert_eq!(peak.level, MAX_INTENSITY_LEVEL);
    assert_eq!(result.total_contributions, 42);
}

#[test]
fn every_week_has_exactly_seven_sunday_first_days() {
    // 2026-01-07 is a Wednesday; alignment must pad both ends.
    let days = (0..17)
        .map(|offset| RawActivityDay {
            date: date(2026, 1, 7) + Duration::days(offset),
            count: (offset % 3) as u32,
        })
        .collect();
    let result = aggregate_at(&series(days), now());

    assert!(!result.weeks.is_empty());
    for week in &result.weeks {
        assert_eq!(week.days.len(), DAYS_PER_WEEK);
        assert_eq!(week.days[0].date.weekday(), Weekday::Sun);
        assert_eq!(week.days[6].date.weekday(), Weekday::Sat);
    }
}

#[test]
fn concatenated_weeks_form_a_contiguous_duplicate_free_range() {
    let first = date(2026, 2, 10);
    let days: Vec<RawActivityDay> = (0..23)
        .map(|offset| RawActivityDay {
            date: first + Duration::days(offset),
            count: offset as u32,
        })
        .collect();
    let last = days.last().unwrap().date;
    let result = aggregate_at(&series(days), now());

    let flat: Vec<NaiveDate> = result
        .weeks
        .iter()
        .flat_map(|w| w.days.iter().map(|d| d.date))
        .collect();

    for pair in flat.windows(2) {
        assert_eq!(pair[1] - pair[0], Duration::days(1), "gap or duplicate date");
    }
    // The padded range contains the whole input range.
    assert!(flat.first().unwrap() <= &first);
    assert!(flat.last().unwrap() >= &last);
    // Padding days carry no activity.
    for day in result.weeks.iter().flat_map(|w| &w.days) {
        if day.date < first || day.date > last {
            assert_eq!(day.count, 0);
            assert_eq!(day.level, 0);
        }
    }
}

#[test]
fn interior_gaps_are_filled_with_blank_days() {
    let days = vec![
        RawActivityDay { date: date(2026, 3, 2), count: 5 },
        RawActivityDay { date: date(2026, 3, 9), count: 7 },
    ];
    let result = aggregate_at(&series(days), now());

    let flat: Vec<_> = result.weeks.iter().flat_map(|w| &w.days).collect();
    let gap_day = flat.iter().find(|d| d.date == date(2026, 3, 5)).unwrap();
    assert_eq!(gap_day.count, 0);
    assert_eq!(gap_day.level, 0);
    assert_eq!(result.total_contributions, 12);
}

#[test]
fn duplicate_dates_are_summed_not_duplicated() {
    let days = vec![
        RawActivityDay { date: date(2026, 4, 1), count: 2 },
        RawActivityDay { date: date(2026, 4, 1), count: 3 },
    ];
    let result = aggregate_at(&series(days), now());

    let flat: Vec<_> = result.weeks.iter().flat_map(|w| &w.days).collect();
    let merged: Vec<_> = flat.iter().filter(|d| d.date == date(2026, 4, 1)).collect();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].count, 5);
    assert_eq!(result.total_contributions, 5);
}

#[test]
fn unsorted_input_still_produces_calendar_order() {
    let days = vec![
        RawActivityDay { date: date(2026, 5, 14), count: 1 },
        RawActivityDay { date: date(2026, 5, 10), count: 2 },
        RawActivityDay { date: date(2026, 5, 12), count: 3 },
    ];
    let result = aggregate_at(&series(days), now());

    let flat: Vec<NaiveDate> = result
        .weeks
        .iter()
        .flat_map(|w| w.days.iter().map(|d| d.date))
        .collect();
    let mut sorted = flat.clone();
    sorted.sort();
    assert_eq!(flat, sorted);
}

#[test]
fn account_age_is_formatted_from_creation_instant() {
    let result = aggregate_at(&series(Vec::new()), now());
    // 2020-05-01 to 2026-08-25 is 6 years and a few months.
    assert!(result.account_age.starts_with("6y"));
}
