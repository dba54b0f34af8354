//! Viewing streaks over distinct calendar days

use chrono::NaiveDate;
use dailyverse_core::StreakInfo;
use std::collections::BTreeSet;

/// Streak summary for a set of days with at least one viewed poem.
///
/// The current streak counts back from today, or from yesterday when nothing
/// was viewed yet today. Any older last view means the streak is broken.
pub fn compute_streak(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> StreakInfo {
    let Some(&last) = days.iter().next_back() else {
        return StreakInfo::empty();
    };

    let start = if days.contains(&today) {
        Some(today)
    } else {
        today.pred_opt().filter(|yesterday| days.contains(yesterday))
    };

    let mut current = 0;
    let mut cursor = start;
    while let Some(day) = cursor {
        if !days.contains(&day) {
            break;
        }
        current += 1;
        cursor = day.pred_opt();
    }

    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;
    for &day in days {
        run = match prev {
            Some(p) if p.succ_opt() == Some(day) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }

    StreakInfo {
        current_streak: current,
        longest_streak: longest,
        total_days_with_poems: days.len(),
        last_viewed_date: Some(last),
    }
}
