use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCompletions {
    pub date: NaiveDate,
    pub count: u32,
}

/// One participant's completion on one day. The client joins these with
/// the habit's participant colors to color shared-habit day cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantCompletion {
    pub date: NaiveDate,
    pub user_id: Uuid,
}

/// Payload of `GET /stats/habits/:id?days=N`. Streaks are server-computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitStats {
    pub habit_id: Uuid,
    pub total_completions: u32,
    pub current_streak: u32,
    /// Completions outside the schedule (off-day or over the weekly goal)
    #[serde(default)]
    pub above_norm_count: u32,
    #[serde(default)]
    pub daily_completions: Vec<DailyCompletions>,
    #[serde(default)]
    pub participant_completions: Vec<ParticipantCompletion>,
    pub period_days: u32,
}

impl HabitStats {
    /// Dates with at least one completion, for the calendar projector
    pub fn completed_dates(&self) -> std::collections::BTreeSet<NaiveDate> {
        self.daily_completions
            .iter()
            .filter(|d| d.count > 0)
            .map(|d| d.date)
            .collect()
    }
}

/// Payload of `GET /stats/yearly?year=N&habit_id=ID`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyReport {
    /// Years the user has any data for, for the year selector
    pub years: Vec<i32>,
    pub completed_dates: Vec<NaiveDate>,
}

impl YearlyReport {
    pub fn completed_dates(&self) -> std::collections::BTreeSet<NaiveDate> {
        self.completed_dates.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yearly_report_dates_collect_into_a_set() {
        let report = YearlyReport {
            years: vec![2023, 2024],
            completed_dates: vec![
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            ],
        };
        let set = report.completed_dates();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()));
    }
}
