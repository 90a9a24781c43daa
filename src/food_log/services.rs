use time::Date;

use super::{
    dto::{DailyReport, ScoredEntry},
    repo::LogEntry,
};
use crate::scoring::{aggregate_daily, calorie_goal, BiometricProfile, HealthGoal};

pub fn build_daily_report(
    day: Date,
    goal: HealthGoal,
    profile: &BiometricProfile,
    entries: Vec<LogEntry>,
) -> DailyReport {
    let nutrients: Vec<_> = entries.iter().map(LogEntry::nutrients).collect();
    let summary = aggregate_daily(
        nutrients.iter().zip(entries.iter().map(|e| e.servings)),
        profile,
        goal,
    );

    let item_count = summary.item_count();
    let items = entries
        .into_iter()
        .zip(summary.item_scores)
        .map(|(entry, score)| ScoredEntry { entry, score })
        .collect();

    DailyReport {
        date: day,
        goal,
        calorie_goal: calorie_goal(profile, goal),
        daily_score: Some(summary.daily_score).filter(|s| !s.is_nan()),
        item_count,
        totals: summary.totals,
        items,
    }
}
