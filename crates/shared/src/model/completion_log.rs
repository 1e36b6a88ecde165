use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    api::error::ValidationError,
    model::ValidateModel,
    types::Uuid,
};

pub const COMPLETION_NOTES_MAX_LEN: usize = 256;

/// A (habit, user, date) fact; at most one per day per user per habit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionLog {
    pub id: Uuid,
    pub habit_id: Uuid,
    pub user_id: Uuid,
    pub completed_on: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompleteHabit {
    /// Omitted means "today" as decided by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CompleteHabit {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            notes: None,
        }
    }
}

impl ValidateModel for CompleteHabit {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.notes.as_deref() {
            Some(notes) if notes.len() > COMPLETION_NOTES_MAX_LEN => Err(ValidationError {
                error_messages: vec![format!(
                    "Notes must be at most {COMPLETION_NOTES_MAX_LEN} characters"
                )],
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlong_notes_rejected() {
        let payload = CompleteHabit {
            date: None,
            notes: Some("x".repeat(COMPLETION_NOTES_MAX_LEN + 1)),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn date_serializes_as_iso() {
        let payload = CompleteHabit::for_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, "{\"date\":\"2024-01-02\"}");
    }
}
