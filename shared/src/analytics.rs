//! Pure client-side analytics over navigation and activity records.
//!
//! Everything here is stateless and recomputed on every input change: pages
//! feed raw fetched records plus the current filter state in, and render
//! whatever comes out. No function touches the network or the DOM.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SharedError};
use crate::models::activity::ActivitySample;
use crate::models::feedback::Feedback;
use crate::models::navigation::NavigationEntry;

/// Tracker pages that never count towards usage aggregates
pub const EXCLUDED_PAGES: [&str; 3] = ["/pbr/home2", "/pbr/ghana", "/pbr/overview"];

/// Path prefix the tracker puts on every recorded page
pub const PAGE_PREFIX: &str = "/pbr/";

/// Inclusive calendar-day range; construction rejects reversed bounds so a
/// bad range never reaches the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(SharedError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range from a pair of date-picker strings ("%Y-%m-%d"). An
    /// incomplete or unparsable pair means no range; a reversed pair is
    /// an error.
    pub fn from_inputs(start: &str, end: &str) -> Result<Option<Self>> {
        let start = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d").ok();
        let end = NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d").ok();
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end).map(Some),
            _ => Ok(None),
        }
    }

    /// Closed-interval membership, both ends inclusive
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Quick-pick ranges offered next to the custom date inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePreset {
    ThisWeek,
    LastWeek,
    LastMonth,
}

impl RangePreset {
    /// Key used as the option value in range selectors
    pub fn key(&self) -> &'static str {
        match self {
            RangePreset::ThisWeek => "this-week",
            RangePreset::LastWeek => "last-week",
            RangePreset::LastMonth => "last-month",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "this-week" => Some(RangePreset::ThisWeek),
            "last-week" => Some(RangePreset::LastWeek),
            "last-month" => Some(RangePreset::LastMonth),
            _ => None,
        }
    }

    /// Resolves the preset against a concrete "today". Weeks start on
    /// Monday; last-month runs from one calendar month before today to the
    /// last day of the previous month.
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        let monday = today.week(Weekday::Mon).first_day();
        match self {
            RangePreset::ThisWeek => DateRange {
                start: monday,
                end: today,
            },
            RangePreset::LastWeek => DateRange {
                start: monday - Duration::days(7),
                end: monday - Duration::days(1),
            },
            RangePreset::LastMonth => {
                let start = today.checked_sub_months(Months::new(1)).unwrap_or(today);
                let end = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
                    .and_then(|first| first.pred_opt())
                    .unwrap_or(today);
                DateRange { start, end }
            }
        }
    }
}

/// Visits and total seconds for one normalized page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageStat {
    pub page: String,
    pub visits: u64,
    pub total_time: f64,
}

/// One day of the time-spent trend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub total_time: f64,
}

/// A gap between two recorded activity days
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdlePeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: i64,
}

/// Normalizes a raw tracker path to a page name. Excluded pages and pages
/// that are empty after cleanup map to `None`. Only the first prefix and
/// the first residual slash are removed, matching how the paths were
/// always displayed.
pub fn normalize_page(page: &str) -> Option<String> {
    if EXCLUDED_PAGES.contains(&page) {
        return None;
    }
    let cleaned = page.replacen(PAGE_PREFIX, "", 1).replacen('/', "", 1);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Cleanup and filter pass over raw navigation entries: drops excluded
/// pages, normalizes the rest, drops entries left with an empty page, and
/// keeps only visits inside the range when one is set.
pub fn clean_entries(entries: &[NavigationEntry], range: Option<&DateRange>) -> Vec<NavigationEntry> {
    entries
        .iter()
        .filter_map(|entry| {
            let page = normalize_page(&entry.page)?;
            if let Some(range) = range {
                if !range.contains(entry.visit_date()) {
                    return None;
                }
            }
            Some(NavigationEntry {
                page,
                timestamp: entry.timestamp,
                time_spent: entry.time_spent,
            })
        })
        .collect()
}

/// Case-insensitive page-name search over cleaned entries
pub fn search_entries(entries: &[NavigationEntry], query: &str) -> Vec<NavigationEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|entry| entry.page.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Groups cleaned entries by page, counting visits and summing seconds.
/// Ranked by descending visit count with the page name as tie-break, so
/// the ranking does not depend on input order.
pub fn page_stats(entries: &[NavigationEntry]) -> Vec<PageStat> {
    let mut grouped: BTreeMap<&str, (u64, f64)> = BTreeMap::new();
    for entry in entries {
        let slot = grouped.entry(entry.page.as_str()).or_insert((0, 0.0));
        slot.0 += 1;
        slot.1 += entry.time_spent;
    }
    let mut stats: Vec<PageStat> = grouped
        .into_iter()
        .map(|(page, (visits, total_time))| PageStat {
            page: page.to_string(),
            visits,
            total_time,
        })
        .collect();
    // Entries arrive page-sorted from the BTreeMap; the stable sort keeps
    // that order inside equal visit counts
    stats.sort_by(|a, b| b.visits.cmp(&a.visits));
    stats
}

/// Most-visited slice of a ranked stat list
pub fn top_pages(stats: &[PageStat], count: usize) -> Vec<PageStat> {
    stats.iter().take(count).cloned().collect()
}

/// Least-visited slice of a ranked stat list, ascending by visit count
pub fn least_pages(stats: &[PageStat], count: usize) -> Vec<PageStat> {
    let from = stats.len().saturating_sub(count);
    stats[from..].iter().rev().cloned().collect()
}

/// Sums seconds per calendar day, chronologically sorted for charting
pub fn daily_trend(entries: &[NavigationEntry]) -> Vec<TrendPoint> {
    let mut grouped: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for entry in entries {
        *grouped.entry(entry.visit_date()).or_insert(0.0) += entry.time_spent;
    }
    grouped
        .into_iter()
        .map(|(date, total_time)| TrendPoint { date, total_time })
        .collect()
}

/// Range filter over per-day activity samples, both ends inclusive
pub fn filter_samples(samples: &[ActivitySample], range: Option<&DateRange>) -> Vec<ActivitySample> {
    samples
        .iter()
        .filter(|sample| range.map_or(true, |r| r.contains(sample.date)))
        .copied()
        .collect()
}

/// Finds the gaps in a set of activity days. Dates are deduplicated and
/// sorted first; every consecutive pair more than one day apart yields one
/// idle period covering the days in between.
pub fn idle_periods(dates: &[NaiveDate]) -> Vec<IdlePeriod> {
    let mut sorted: Vec<NaiveDate> = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut periods = Vec::new();
    for pair in sorted.windows(2) {
        let gap = (pair[1] - pair[0]).num_days();
        if gap > 1 {
            if let (Some(start), Some(end)) = (pair[0].succ_opt(), pair[1].pred_opt()) {
                periods.push(IdlePeriod {
                    start,
                    end,
                    days: gap - 1,
                });
            }
        }
    }
    periods
}

/// Mean star rating; `None` for an empty list
pub fn average_rating(items: &[Feedback]) -> Option<f64> {
    if items.is_empty() {
        return None;
    }
    let sum: f64 = items.iter().map(|item| item.rating).sum();
    Some(sum / items.len() as f64)
}

/// Renders seconds as "2d 5h 13m", the format used by the company report
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as i64;
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    format!("{}d {}h {}m", days, hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;
    use test_log::test;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn ts(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(&format!("{y:04}-{m:02}-{d:02}T12:00:00+00:00"))
            .expect("valid timestamp")
    }

    fn entry(page: &str, day: u32, seconds: f64) -> NavigationEntry {
        NavigationEntry {
            page: page.to_string(),
            timestamp: ts(2024, 3, day),
            time_spent: seconds,
        }
    }

    #[test]
    fn test_date_range_rejects_reversed_bounds() {
        let result = DateRange::new(date(2024, 3, 10), date(2024, 3, 1));
        assert!(matches!(
            result,
            Err(SharedError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_date_range_allows_single_day() {
        let range = DateRange::new(date(2024, 3, 10), date(2024, 3, 10)).expect("valid range");
        assert!(range.contains(date(2024, 3, 10)));
        assert!(!range.contains(date(2024, 3, 11)));
    }

    #[test_case("", "", None; "both empty")]
    #[test_case("2024-03-01", "", None; "end missing")]
    #[test_case("not-a-date", "2024-03-10", None; "unparsable start")]
    #[test_case("2024-03-01", "2024-03-10", Some(((2024, 3, 1), (2024, 3, 10))); "both valid")]
    #[test_case(" 2024-03-01 ", "2024-03-10", Some(((2024, 3, 1), (2024, 3, 10))); "whitespace trimmed")]
    fn test_date_range_from_inputs(
        start: &str,
        end: &str,
        expected: Option<((i32, u32, u32), (i32, u32, u32))>,
    ) {
        let range = DateRange::from_inputs(start, end).expect("never an error here");
        let expected = expected.map(|((sy, sm, sd), (ey, em, ed))| DateRange {
            start: date(sy, sm, sd),
            end: date(ey, em, ed),
        });
        assert_eq!(range, expected);
    }

    #[test]
    fn test_date_range_from_inputs_rejects_reversed_pair() {
        let result = DateRange::from_inputs("2024-03-10", "2024-03-01");
        assert!(matches!(result, Err(SharedError::InvalidDateRange { .. })));
    }

    #[test_case("/pbr/home2", None; "excluded page is dropped")]
    #[test_case("/pbr/ghana", None; "second excluded page is dropped")]
    #[test_case("/pbr/overview", None; "third excluded page is dropped")]
    #[test_case("/pbr/", None; "prefix only leaves nothing")]
    #[test_case("/pbr/dashboard", Some("dashboard"); "prefix stripped")]
    #[test_case("/pbr/reports/daily", Some("reportsdaily"); "one residual slash removed")]
    #[test_case("/other/page", Some("other/page"); "unknown prefix loses only the first slash")]
    fn test_normalize_page(raw: &str, expected: Option<&str>) {
        assert_eq!(normalize_page(raw), expected.map(|s| s.to_string()));
    }

    #[test]
    fn test_clean_entries_apply_exclusions_and_range() {
        let entries = vec![
            entry("/pbr/home2", 5, 10.0),
            entry("/pbr/dashboard", 5, 20.0),
            entry("/pbr/dashboard", 1, 30.0),
            entry("/pbr/", 5, 40.0),
        ];
        let range = DateRange::new(date(2024, 3, 4), date(2024, 3, 6)).expect("valid range");
        let cleaned = clean_entries(&entries, Some(&range));
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].page, "dashboard");
        assert_eq!(cleaned[0].time_spent, 20.0);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let entries = vec![
            entry("/pbr/a", 4, 1.0),
            entry("/pbr/b", 5, 1.0),
            entry("/pbr/c", 6, 1.0),
            entry("/pbr/d", 7, 1.0),
        ];
        let range = DateRange::new(date(2024, 3, 4), date(2024, 3, 6)).expect("valid range");
        let cleaned = clean_entries(&entries, Some(&range));
        let pages: Vec<&str> = cleaned.iter().map(|e| e.page.as_str()).collect();
        assert_eq!(pages, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_input_yields_empty_aggregates() {
        let cleaned = clean_entries(&[], None);
        assert_eq!(cleaned.len(), 0);
        assert_eq!(page_stats(&cleaned).len(), 0);
        assert_eq!(daily_trend(&cleaned).len(), 0);
    }

    #[test]
    fn test_page_stats_ranked_by_visits_desc() {
        let entries = vec![
            entry("/pbr/alpha", 1, 10.0),
            entry("/pbr/beta", 1, 20.0),
            entry("/pbr/beta", 2, 30.0),
            entry("/pbr/gamma", 1, 5.0),
            entry("/pbr/beta", 3, 10.0),
            entry("/pbr/gamma", 2, 5.0),
        ];
        let stats = page_stats(&clean_entries(&entries, None));
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].page, "beta");
        assert_eq!(stats[0].visits, 3);
        assert_eq!(stats[0].total_time, 60.0);
        assert_eq!(stats[1].page, "gamma");
        assert_eq!(stats[2].page, "alpha");
    }

    #[test]
    fn test_page_stats_tie_break_is_alphabetical() {
        let entries = vec![
            entry("/pbr/zebra", 1, 1.0),
            entry("/pbr/apple", 1, 1.0),
            entry("/pbr/mango", 1, 1.0),
        ];
        let stats = page_stats(&clean_entries(&entries, None));
        let pages: Vec<&str> = stats.iter().map(|s| s.page.as_str()).collect();
        assert_eq!(pages, vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_top_and_least_slices() {
        let entries = vec![
            entry("/pbr/a", 1, 1.0),
            entry("/pbr/a", 2, 1.0),
            entry("/pbr/a", 3, 1.0),
            entry("/pbr/b", 1, 1.0),
            entry("/pbr/b", 2, 1.0),
            entry("/pbr/c", 1, 1.0),
            entry("/pbr/d", 1, 1.0),
        ];
        let stats = page_stats(&clean_entries(&entries, None));

        let top = top_pages(&stats, 3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].page, "a");
        assert_eq!(top[1].page, "b");

        let least = least_pages(&stats, 3);
        assert_eq!(least.len(), 3);
        // Ascending: the single-visit pages first, d before c reversed out
        // of the ranked tail
        assert_eq!(least[0].visits, 1);
        assert!(least[2].visits >= least[0].visits);
    }

    #[test]
    fn test_slices_shorter_than_requested() {
        let entries = vec![entry("/pbr/only", 1, 1.0)];
        let stats = page_stats(&clean_entries(&entries, None));
        assert_eq!(top_pages(&stats, 3).len(), 1);
        assert_eq!(least_pages(&stats, 3).len(), 1);
    }

    #[test]
    fn test_daily_trend_groups_and_sorts() {
        let entries = vec![
            entry("/pbr/a", 7, 10.0),
            entry("/pbr/b", 5, 20.0),
            entry("/pbr/a", 5, 30.0),
            entry("/pbr/b", 6, 40.0),
        ];
        let trend = daily_trend(&clean_entries(&entries, None));
        assert_eq!(trend.len(), 3);
        assert_eq!(trend[0].date, date(2024, 3, 5));
        assert_eq!(trend[0].total_time, 50.0);
        assert_eq!(trend[1].date, date(2024, 3, 6));
        assert_eq!(trend[2].date, date(2024, 3, 7));
    }

    #[test]
    fn test_idle_periods_single_gap() {
        let d1 = date(2024, 3, 1);
        let dates = vec![d1, date(2024, 3, 2), date(2024, 3, 6)];
        let periods = idle_periods(&dates);
        assert_eq!(periods.len(), 1);
        assert_eq!(
            periods[0],
            IdlePeriod {
                start: date(2024, 3, 3),
                end: date(2024, 3, 5),
                days: 3,
            }
        );
    }

    #[test]
    fn test_idle_periods_contiguous_dates_yield_none() {
        let dates = vec![
            date(2024, 3, 1),
            date(2024, 3, 2),
            date(2024, 3, 3),
            date(2024, 3, 4),
        ];
        assert_eq!(idle_periods(&dates).len(), 0);
    }

    #[test]
    fn test_idle_periods_single_date_yields_none() {
        assert_eq!(idle_periods(&[date(2024, 3, 1)]).len(), 0);
        assert_eq!(idle_periods(&[]).len(), 0);
    }

    #[test]
    fn test_idle_periods_ignore_duplicates_and_order() {
        let dates = vec![
            date(2024, 3, 6),
            date(2024, 3, 1),
            date(2024, 3, 1),
            date(2024, 3, 2),
        ];
        let periods = idle_periods(&dates);
        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].days, 3);
    }

    #[test]
    fn test_filter_samples_inclusive() {
        let samples = vec![
            ActivitySample { date: date(2024, 3, 1), time_spent: 10.0 },
            ActivitySample { date: date(2024, 3, 5), time_spent: 20.0 },
            ActivitySample { date: date(2024, 3, 9), time_spent: 30.0 },
        ];
        let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 5)).expect("valid range");
        let filtered = filter_samples(&samples, Some(&range));
        assert_eq!(filtered.len(), 2);
        assert_eq!(filter_samples(&samples, None).len(), 3);
    }

    #[test]
    fn test_this_week_starts_monday() {
        // 2024-03-06 is a Wednesday
        let range = RangePreset::ThisWeek.resolve(date(2024, 3, 6));
        assert_eq!(range.start, date(2024, 3, 4));
        assert_eq!(range.end, date(2024, 3, 6));

        // A Monday is its own week start
        let range = RangePreset::ThisWeek.resolve(date(2024, 3, 4));
        assert_eq!(range.start, date(2024, 3, 4));
        assert_eq!(range.end, date(2024, 3, 4));
    }

    #[test]
    fn test_last_week_is_previous_monday_to_sunday() {
        let range = RangePreset::LastWeek.resolve(date(2024, 3, 6));
        assert_eq!(range.start, date(2024, 2, 26));
        assert_eq!(range.end, date(2024, 3, 3));
    }

    #[test]
    fn test_last_month_ends_on_previous_month_end() {
        let range = RangePreset::LastMonth.resolve(date(2024, 3, 15));
        assert_eq!(range.start, date(2024, 2, 15));
        assert_eq!(range.end, date(2024, 2, 29));

        let range = RangePreset::LastMonth.resolve(date(2024, 1, 1));
        assert_eq!(range.start, date(2023, 12, 1));
        assert_eq!(range.end, date(2023, 12, 31));
    }

    #[test]
    fn test_preset_keys_round_trip() {
        for preset in [
            RangePreset::ThisWeek,
            RangePreset::LastWeek,
            RangePreset::LastMonth,
        ] {
            assert_eq!(RangePreset::from_key(preset.key()), Some(preset));
        }
        assert_eq!(RangePreset::from_key("custom"), None);
    }

    #[test]
    fn test_search_entries_case_insensitive() {
        let entries = clean_entries(
            &[
                entry("/pbr/Dashboard", 1, 1.0),
                entry("/pbr/reports", 1, 1.0),
            ],
            None,
        );
        let hits = search_entries(&entries, "DASH");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].page, "Dashboard");
        assert_eq!(search_entries(&entries, "  ").len(), 2);
    }

    #[test]
    fn test_average_rating() {
        let feedback: Vec<Feedback> = [4.0, 5.0, 3.0]
            .iter()
            .enumerate()
            .map(|(i, rating)| Feedback {
                id: format!("f{i}"),
                email: SafeEmail().fake(),
                rating: *rating,
                comment: "ok".to_string(),
                created_at: None,
            })
            .collect();
        assert_eq!(average_rating(&feedback), Some(4.0));
        assert_eq!(average_rating(&[]), None);
    }

    #[test_case(0.0, "0d 0h 0m"; "zero")]
    #[test_case(3599.0, "0d 0h 59m"; "just under an hour")]
    #[test_case(90061.0, "1d 1h 1m"; "over a day")]
    #[test_case(-5.0, "0d 0h 0m"; "negative clamps to zero")]
    fn test_format_duration(seconds: f64, expected: &str) {
        assert_eq!(format_duration(seconds), expected);
    }

    proptest! {
        #[test]
        fn prop_excluded_pages_never_surface(
            raw in proptest::collection::vec(
                (
                    prop::sample::select(vec![
                        "/pbr/home2", "/pbr/ghana", "/pbr/overview",
                        "/pbr/", "/pbr/dashboard", "/pbr/reports", "/pbr/settings",
                    ]),
                    1u32..28,
                    0u32..600,
                ),
                0..40,
            )
        ) {
            let entries: Vec<NavigationEntry> = raw
                .iter()
                .map(|(page, day, secs)| entry(page, *day, f64::from(*secs)))
                .collect();
            let stats = page_stats(&clean_entries(&entries, None));
            for stat in &stats {
                prop_assert!(!stat.page.is_empty());
                prop_assert!(!stat.page.contains("home2"));
                prop_assert!(!stat.page.contains("ghana"));
                prop_assert!(!stat.page.contains("overview"));
            }
        }

        #[test]
        fn prop_aggregation_is_order_independent(
            raw in proptest::collection::vec(
                (
                    prop::sample::select(vec![
                        "/pbr/dashboard", "/pbr/reports", "/pbr/settings", "/pbr/profile",
                    ]),
                    1u32..28,
                    0u32..600,
                ),
                0..40,
            )
        ) {
            let entries: Vec<NavigationEntry> = raw
                .iter()
                .map(|(page, day, secs)| entry(page, *day, f64::from(*secs)))
                .collect();
            let mut reversed = entries.clone();
            reversed.reverse();

            let forward = page_stats(&clean_entries(&entries, None));
            let backward = page_stats(&clean_entries(&reversed, None));
            prop_assert_eq!(forward, backward);

            let trend_forward = daily_trend(&clean_entries(&entries, None));
            let trend_backward = daily_trend(&clean_entries(&reversed, None));
            prop_assert_eq!(trend_forward, trend_backward);
        }
    }
}
