use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    api::error::ValidationError,
    model::{Participant, ValidateModel},
    types::Uuid,
};

pub const HABIT_NAME_MAX_LEN: usize = 64;

/// Display palette for habits and shared-habit participants. Accepted
/// participants on the same habit each hold a distinct entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitColor {
    Gray,
    Silver,
    Gold,
    Emerald,
    Sapphire,
    Ruby,
}

impl HabitColor {
    pub const PALETTE: [HabitColor; 6] = [
        HabitColor::Gray,
        HabitColor::Silver,
        HabitColor::Gold,
        HabitColor::Emerald,
        HabitColor::Sapphire,
        HabitColor::Ruby,
    ];

    pub const fn css_hex(&self) -> &'static str {
        use HabitColor::*;
        match self {
            Gray => "#9e9e9e",
            Silver => "#c0c0c0",
            Gold => "#ffd700",
            Emerald => "#2ecc71",
            Sapphire => "#2563eb",
            Ruby => "#e0115f",
        }
    }
}

impl Default for HabitColor {
    fn default() -> Self {
        HabitColor::Gold
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_shared: bool,
    pub created_by: Uuid,
    #[serde(default)]
    pub color: HabitColor,
    /// ISO weekdays, 1 = Monday .. 7 = Sunday. Mutually exclusive with
    /// `weekly_goal_days` by client convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<u8>>,
    /// N completions per calendar week, 1..=7
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_goal_days: Option<u8>,
    #[serde(default)]
    pub reminder_enabled: bool,
    /// "HH:MM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
    #[serde(default)]
    pub participants: Vec<Participant>,
    /// Completion dates for the current calendar week, for the card strip
    #[serde(default)]
    pub current_week_completions: Vec<NaiveDate>,
    /// Server-computed; the client only displays it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_streak: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn validate_name(name: &str, errors: &mut Vec<String>) {
    if name.trim().is_empty() {
        errors.push("Habit name must not be empty".to_string());
    }
    if name.len() > HABIT_NAME_MAX_LEN {
        errors.push(format!(
            "Habit name must be at most {HABIT_NAME_MAX_LEN} characters"
        ));
    }
}

fn validate_schedule(
    days_of_week: Option<&[u8]>,
    weekly_goal_days: Option<u8>,
    errors: &mut Vec<String>,
) {
    if days_of_week.is_some() && weekly_goal_days.is_some() {
        errors.push("A habit uses either fixed weekdays or a weekly goal, not both".to_string());
    }
    if let Some(days) = days_of_week {
        for &day in days {
            if !(1..=7).contains(&day) {
                errors.push(format!("Weekday {day} is out of range 1..=7"));
            }
        }
    }
    if let Some(goal) = weekly_goal_days {
        if !(1..=7).contains(&goal) {
            errors.push(format!("Weekly goal {goal} is out of range 1..=7"));
        }
    }
}

fn validate_reminder_time(reminder_time: Option<&str>, errors: &mut Vec<String>) {
    if let Some(time) = reminder_time {
        if NaiveTime::parse_from_str(time, "%H:%M").is_err() {
            errors.push(format!("Reminder time {time:?} is not HH:MM"));
        }
    }
}

fn collect(errors: Vec<String>) -> Result<(), ValidationError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            error_messages: errors,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHabit {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_shared: bool,
    /// Friends invited on creation of a shared habit
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participant_ids: Vec<Uuid>,
    #[serde(default)]
    pub color: HabitColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_goal_days: Option<u8>,
    #[serde(default)]
    pub reminder_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
}

impl ValidateModel for NewHabit {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        validate_name(&self.name, &mut errors);
        validate_schedule(
            self.days_of_week.as_deref(),
            self.weekly_goal_days,
            &mut errors,
        );
        validate_reminder_time(self.reminder_time.as_deref(), &mut errors);
        collect(errors)
    }
}

/// Edit payload; absent fields are left unchanged by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateHabit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<HabitColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_goal_days: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
}

impl ValidateModel for UpdateHabit {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        if let Some(name) = self.name.as_deref() {
            validate_name(name, &mut errors);
        }
        validate_schedule(
            self.days_of_week.as_deref(),
            self.weekly_goal_days,
            &mut errors,
        );
        validate_reminder_time(self.reminder_time.as_deref(), &mut errors);
        collect(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_new_habit() -> NewHabit {
        NewHabit {
            name: "Morning run".to_string(),
            description: None,
            is_shared: false,
            participant_ids: Vec::new(),
            color: HabitColor::Emerald,
            days_of_week: Some(vec![1, 3, 5]),
            weekly_goal_days: None,
            reminder_enabled: false,
            reminder_time: None,
        }
    }

    #[test]
    fn valid_habit_passes() {
        assert!(valid_new_habit().validate().is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        let mut habit = valid_new_habit();
        habit.name = "   ".to_string();
        let err = habit.validate().unwrap_err();
        assert!(err.error_messages.iter().any(|m| m.contains("name")));
    }

    #[test]
    fn both_schedule_modes_rejected() {
        let mut habit = valid_new_habit();
        habit.weekly_goal_days = Some(3);
        assert!(habit.validate().is_err());
    }

    #[test]
    fn weekday_out_of_range_rejected() {
        let mut habit = valid_new_habit();
        habit.days_of_week = Some(vec![0, 1]);
        assert!(habit.validate().is_err());

        let mut habit = valid_new_habit();
        habit.days_of_week = Some(vec![8]);
        assert!(habit.validate().is_err());
    }

    #[test]
    fn weekly_goal_range_checked() {
        let mut habit = valid_new_habit();
        habit.days_of_week = None;
        habit.weekly_goal_days = Some(0);
        assert!(habit.validate().is_err());

        habit.weekly_goal_days = Some(7);
        assert!(habit.validate().is_ok());
    }

    #[test]
    fn reminder_time_must_be_hh_mm() {
        let mut habit = valid_new_habit();
        habit.reminder_time = Some("9am".to_string());
        assert!(habit.validate().is_err());

        habit.reminder_time = Some("09:30".to_string());
        assert!(habit.validate().is_ok());
    }

    #[test]
    fn color_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&HabitColor::Sapphire).unwrap(),
            "\"sapphire\""
        );
        let color: HabitColor = serde_json::from_str("\"ruby\"").unwrap();
        assert_eq!(color, HabitColor::Ruby);
    }
}
