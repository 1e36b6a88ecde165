use std::collections::BTreeSet;

use super::CalendarError;

/// When a habit is expected to be done within a week
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    /// Fixed ISO weekdays (1 = Monday .. 7 = Sunday)
    Weekdays(BTreeSet<u8>),
    /// N completions per calendar week, on any days
    WeeklyGoal(u8),
    /// Neither mode set; every day counts
    Unrestricted,
}

impl Schedule {
    pub fn weekdays<I: IntoIterator<Item = u8>>(days: I) -> Result<Self, CalendarError> {
        let days: BTreeSet<u8> = days.into_iter().collect();
        if let Some(&value) = days.iter().find(|d| !(1..=7).contains(*d)) {
            return Err(CalendarError::WeekdayOutOfRange { value });
        }
        Ok(Schedule::Weekdays(days))
    }

    pub fn weekly_goal(goal: u8) -> Result<Self, CalendarError> {
        if !(1..=7).contains(&goal) {
            return Err(CalendarError::WeeklyGoalOutOfRange { value: goal });
        }
        Ok(Schedule::WeeklyGoal(goal))
    }

    /// Resolve the schedule from the two optional habit fields. They are
    /// mutually exclusive by convention; when both are present anyway the
    /// weekly goal wins.
    pub fn from_habit(
        days_of_week: Option<&[u8]>,
        weekly_goal_days: Option<u8>,
    ) -> Result<Self, CalendarError> {
        match (days_of_week, weekly_goal_days) {
            (_, Some(goal)) => Self::weekly_goal(goal),
            (Some(days), None) => Self::weekdays(days.iter().copied()),
            (None, None) => Ok(Schedule::Unrestricted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_range_enforced() {
        assert!(Schedule::weekdays([1, 3, 5]).is_ok());
        assert_eq!(
            Schedule::weekdays([0]),
            Err(CalendarError::WeekdayOutOfRange { value: 0 })
        );
        assert_eq!(
            Schedule::weekdays([8]),
            Err(CalendarError::WeekdayOutOfRange { value: 8 })
        );
    }

    #[test]
    fn weekly_goal_range_enforced() {
        assert!(Schedule::weekly_goal(1).is_ok());
        assert!(Schedule::weekly_goal(7).is_ok());
        assert_eq!(
            Schedule::weekly_goal(0),
            Err(CalendarError::WeeklyGoalOutOfRange { value: 0 })
        );
        assert_eq!(
            Schedule::weekly_goal(8),
            Err(CalendarError::WeeklyGoalOutOfRange { value: 8 })
        );
    }

    #[test]
    fn weekly_goal_wins_when_both_are_set() {
        let schedule = Schedule::from_habit(Some(&[1, 2]), Some(3)).unwrap();
        assert_eq!(schedule, Schedule::WeeklyGoal(3));
    }

    #[test]
    fn neither_mode_is_unrestricted() {
        assert_eq!(
            Schedule::from_habit(None, None).unwrap(),
            Schedule::Unrestricted
        );
    }
}
