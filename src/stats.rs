use crate::models::{
    ActivityItem, DashboardSummary, Habit, HabitLog, HeatmapCell, MonthlyProgress, WeeklyCompletion,
};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

pub const HEATMAP_WINDOW_DAYS: usize = 30;
pub const RECENT_ACTIVITY_LIMIT: usize = 10;
pub const WEEKLY_WINDOWS: usize = 4;

/// Calendar-day key of a raw log date: the first 10 characters, accepted only
/// when they parse as `YYYY-MM-DD`. Anything else means the record is skipped
/// by the aggregations.
pub fn day_key(date: &str) -> Option<&str> {
    let key = date.get(..10)?;
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()?;
    Some(key)
}

/// Counts logs per calendar day. Sparse: only days that actually have logs
/// appear, so every value is at least 1. Malformed dates are dropped.
pub fn bucket_by_day(logs: &[HabitLog]) -> BTreeMap<String, u32> {
    let mut buckets = BTreeMap::new();
    for log in logs {
        if let Some(key) = day_key(&log.date) {
            *buckets.entry(key.to_string()).or_insert(0) += 1;
        }
    }
    buckets
}

fn logged_days(logs: &[HabitLog]) -> BTreeSet<String> {
    logs.iter()
        .filter_map(|log| day_key(&log.date))
        .map(str::to_string)
        .collect()
}

/// Consecutive days with at least one log, counted backward from `today`.
/// A day without a log ends the walk immediately, so a run that stopped
/// yesterday scores 0. The day set is finite, which bounds the walk.
pub fn current_streak(logs: &[HabitLog], today: NaiveDate) -> u32 {
    let days = logged_days(logs);
    let mut streak = 0;
    let mut cursor = today;
    while days.contains(&date_key(cursor)) {
        streak += 1;
        cursor -= Duration::days(1);
    }
    streak
}

/// Fixed window of per-day cells ending at `today` inclusive, oldest first.
/// Always exactly `window_days` cells regardless of data sparsity.
pub fn heatmap(logs: &[HabitLog], today: NaiveDate, window_days: usize) -> Vec<HeatmapCell> {
    let buckets = bucket_by_day(logs);
    let mut cells = Vec::with_capacity(window_days);
    for offset in (0..window_days).rev() {
        let date = date_key(today - Duration::days(offset as i64));
        let count = buckets.get(&date).copied().unwrap_or(0);
        cells.push(HeatmapCell {
            level: heat_level(count),
            date,
            count,
        });
    }
    cells
}

fn heat_level(count: u32) -> u8 {
    match count {
        0 => 0,
        1 => 1,
        2 => 2,
        3 => 3,
        _ => 4,
    }
}

/// Most recent logs first, resolved to habit names, truncated to `limit`.
/// ISO-8601 strings order lexicographically, and the sort is stable, so
/// same-date logs keep their input order. A log whose habit was deleted
/// resolves to "Habit #<id>".
pub fn recent_activity(logs: &[HabitLog], habits: &[Habit], limit: usize) -> Vec<ActivityItem> {
    let mut ordered: Vec<&HabitLog> = logs.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));
    ordered
        .into_iter()
        .take(limit)
        .map(|log| {
            let habit_name = habits
                .iter()
                .find(|habit| habit.id == log.habit_id)
                .map(|habit| habit.name.clone())
                .unwrap_or_else(|| format!("Habit #{}", log.habit_id));
            ActivityItem {
                habit_name,
                when: log.date.clone(),
            }
        })
        .collect()
}

/// Rounds `completed_days / total_days` to a whole percent, clamped to 0..=100.
pub fn monthly_progress(completed_days: u32, total_days: u32) -> MonthlyProgress {
    let percent = if total_days == 0 {
        0
    } else {
        let ratio = f64::from(completed_days) / f64::from(total_days) * 100.0;
        ratio.round().clamp(0.0, 100.0) as u8
    };
    MonthlyProgress {
        percent,
        completed_days,
        total_days,
    }
}

/// Adherence per calendar week, oldest first, for the `weeks` windows ending
/// with the week that contains `today`. A day with any number of logs counts
/// once toward the 7.
pub fn weekly_completion(logs: &[HabitLog], today: NaiveDate, weeks: usize) -> Vec<WeeklyCompletion> {
    let days = logged_days(logs);
    let current_week_start = week_start(today);
    let mut windows = Vec::with_capacity(weeks);

    for offset in (0..weeks).rev() {
        let start = current_week_start - Duration::weeks(offset as i64);
        let end = start + Duration::days(6);

        let mut days_completed = 0u8;
        for day_offset in 0..7 {
            if days.contains(&date_key(start + Duration::days(day_offset))) {
                days_completed += 1;
            }
        }

        windows.push(WeeklyCompletion {
            week: week_label(start),
            start_date: start.to_string(),
            end_date: end.to_string(),
            days_completed,
            percent: (f64::from(days_completed) / 7.0 * 100.0).round() as u8,
        });
    }

    windows
}

/// Headline dashboard numbers. `completed_today` counts log entries, not
/// distinct habits, so logging two habits today yields 2.
pub fn dashboard_summary(habits: &[Habit], logs: &[HabitLog], today: NaiveDate) -> DashboardSummary {
    let today_key = date_key(today);
    let completed_today = logs
        .iter()
        .filter(|log| day_key(&log.date) == Some(today_key.as_str()))
        .count();

    DashboardSummary {
        total_habits: habits.len(),
        completed_today,
        current_streak: current_streak(logs, today),
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(id: u64, habit_id: u64, date: &str) -> HabitLog {
        HabitLog {
            id,
            habit_id,
            user_id: 1,
            date: date.to_string(),
        }
    }

    fn habit(id: u64, name: &str) -> Habit {
        Habit {
            id,
            user_id: 1,
            name: name.to_string(),
            description: None,
            created_at: "2026-01-01T00:00:00".to_string(),
        }
    }

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn bucket_counts_per_day_and_skips_malformed() {
        let logs = vec![
            log(1, 1, "2024-01-01T08:00"),
            log(2, 1, "2024-01-01T20:00"),
            log(3, 2, "2024-01-02"),
            log(4, 2, ""),
            log(5, 2, "not-a-date!"),
            log(6, 2, "2024-13-40T09:00"),
        ];

        let buckets = bucket_by_day(&logs);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets.get("2024-01-01"), Some(&2));
        assert_eq!(buckets.get("2024-01-02"), Some(&1));
    }

    #[test]
    fn streak_counts_contiguous_run_ending_today() {
        let today = day(2026, 1, 5);
        let logs = vec![
            log(1, 1, "2026-01-05T07:30"),
            log(2, 1, "2026-01-04"),
            log(3, 1, "2026-01-03"),
            // gap on the 2nd, this one must not count
            log(4, 1, "2026-01-01"),
        ];

        assert_eq!(current_streak(&logs, today), 3);
    }

    #[test]
    fn streak_is_zero_without_a_log_today() {
        let today = day(2026, 1, 5);
        let logs = vec![
            log(1, 1, "2026-01-04"),
            log(2, 1, "2026-01-03"),
            log(3, 1, "2026-01-02"),
        ];

        assert_eq!(current_streak(&logs, today), 0);
    }

    #[test]
    fn streak_on_empty_logs_is_zero() {
        assert_eq!(current_streak(&[], day(2026, 1, 5)), 0);
    }

    #[test]
    fn heatmap_has_exactly_window_days_cells_ending_today() {
        let today = day(2026, 1, 31);
        let logs = vec![log(1, 1, "2026-01-31"), log(2, 1, "2026-01-10T12:00")];

        let cells = heatmap(&logs, today, 30);
        assert_eq!(cells.len(), 30);
        assert_eq!(cells[0].date, "2026-01-02");
        assert_eq!(cells[29].date, "2026-01-31");
        assert_eq!(cells[29].count, 1);
        assert_eq!(cells[29].level, 1);
    }

    #[test]
    fn heatmap_level_saturates_at_four() {
        let today = day(2026, 1, 5);
        let logs = vec![
            log(1, 1, "2026-01-05"),
            log(2, 1, "2026-01-05"),
            log(3, 1, "2026-01-05"),
            log(4, 1, "2026-01-05"),
            log(5, 1, "2026-01-05"),
        ];

        let cells = heatmap(&logs, today, 1);
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].count, 5);
        assert_eq!(cells[0].level, 4);
    }

    #[test]
    fn duplicate_same_day_logs_bucket_to_two_and_level_two() {
        let logs = vec![log(1, 1, "2024-01-01T08:00"), log(2, 1, "2024-01-01T20:00")];

        let buckets = bucket_by_day(&logs);
        assert_eq!(buckets.get("2024-01-01"), Some(&2));

        let cells = heatmap(&logs, day(2024, 1, 1), 1);
        assert_eq!(cells[0].level, 2);
    }

    #[test]
    fn recent_activity_sorts_descending_and_truncates() {
        let habits = vec![habit(1, "Run")];
        let mut logs = Vec::new();
        for i in 0..15u64 {
            logs.push(log(i + 1, 1, &format!("2026-01-{:02}", i + 1)));
        }

        let items = recent_activity(&logs, &habits, 10);
        assert_eq!(items.len(), 10);
        assert_eq!(items[0].when, "2026-01-15");
        assert_eq!(items[9].when, "2026-01-06");
        assert!(items.iter().all(|item| item.habit_name == "Run"));
    }

    #[test]
    fn recent_activity_keeps_input_order_on_equal_dates() {
        let habits = vec![habit(1, "Run"), habit(2, "Read")];
        let logs = vec![log(1, 1, "2026-01-05"), log(2, 2, "2026-01-05")];

        let items = recent_activity(&logs, &habits, 10);
        assert_eq!(items[0].habit_name, "Run");
        assert_eq!(items[1].habit_name, "Read");
    }

    #[test]
    fn recent_activity_labels_unknown_habits_by_id() {
        let habits = vec![habit(1, "Run")];
        let logs = vec![log(1, 5, "2026-01-05")];

        let items = recent_activity(&logs, &habits, 10);
        assert_eq!(items[0].habit_name, "Habit #5");
    }

    #[test]
    fn monthly_progress_rounds_and_clamps() {
        assert_eq!(monthly_progress(1, 3).percent, 33);
        assert_eq!(monthly_progress(2, 3).percent, 67);
        assert_eq!(monthly_progress(7, 7).percent, 100);
        assert_eq!(monthly_progress(9, 7).percent, 100);
        assert_eq!(monthly_progress(0, 0).percent, 0);
    }

    #[test]
    fn weekly_completion_on_empty_logs_is_all_zero() {
        let windows = weekly_completion(&[], day(2026, 1, 5), 4);
        assert_eq!(windows.len(), 4);
        assert!(windows.iter().all(|w| w.percent == 0 && w.days_completed == 0));
    }

    #[test]
    fn weekly_completion_counts_distinct_days_once() {
        // 2026-01-05 is a Monday, so the current window is Jan 5..=Jan 11.
        let today = day(2026, 1, 5);
        let logs = vec![
            log(1, 1, "2026-01-05T06:00"),
            log(2, 2, "2026-01-05T22:00"),
            // previous week: three distinct days
            log(3, 1, "2026-01-02"),
            log(4, 1, "2026-01-01"),
            log(5, 1, "2025-12-29"),
        ];

        let windows = weekly_completion(&logs, today, 4);
        assert_eq!(windows.len(), 4);

        let current = &windows[3];
        assert_eq!(current.start_date, "2026-01-05");
        assert_eq!(current.end_date, "2026-01-11");
        assert_eq!(current.days_completed, 1);
        assert_eq!(current.percent, 14);

        let previous = &windows[2];
        assert_eq!(previous.days_completed, 3);
        assert_eq!(previous.percent, 43);
    }

    #[test]
    fn dashboard_summary_counts_log_entries_today() {
        let today = day(2026, 1, 5);
        let habits = vec![habit(1, "Run"), habit(2, "Read"), habit(3, "Stretch")];
        let logs = vec![
            log(1, 1, "2026-01-05T06:00"),
            log(2, 2, "2026-01-05T07:00"),
            log(3, 1, "2026-01-04"),
        ];

        let summary = dashboard_summary(&habits, &logs, today);
        assert_eq!(summary.total_habits, 3);
        assert_eq!(summary.completed_today, 2);
        assert_eq!(summary.current_streak, 2);
    }

    #[test]
    fn day_key_rejects_short_and_invalid_prefixes() {
        assert_eq!(day_key("2026-01-05"), Some("2026-01-05"));
        assert_eq!(day_key("2026-01-05T23:59:59"), Some("2026-01-05"));
        assert_eq!(day_key("2026-1-5"), None);
        assert_eq!(day_key("2026-02-30"), None);
        assert_eq!(day_key(""), None);
    }
}
