use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    api::error::ValidationError,
    model::{HabitColor, ValidateModel},
    types::Uuid,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantStatus {
    Pending,
    Accepted,
}

/// A user's membership in a shared habit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: Uuid,
    pub status: ParticipantStatus,
    /// Assigned on acceptance; unique per habit among accepted participants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<HabitColor>,
    pub joined_at: DateTime<Utc>,
}

impl Participant {
    pub fn is_accepted(&self) -> bool {
        self.status == ParticipantStatus::Accepted
    }
}

/// Palette entries not held by any accepted participant. The color picker
/// shown on invitation accept is restricted to this set.
pub fn available_colors(participants: &[Participant]) -> Vec<HabitColor> {
    HabitColor::PALETTE
        .iter()
        .copied()
        .filter(|color| {
            !participants
                .iter()
                .any(|p| p.is_accepted() && p.color == Some(*color))
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcceptInvitation {
    /// Omitted lets the server pick the first free color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<HabitColor>,
}

impl ValidateModel for AcceptInvitation {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(status: ParticipantStatus, color: Option<HabitColor>) -> Participant {
        Participant {
            user_id: Uuid::new_v4(),
            status,
            color,
            joined_at: Utc::now(),
        }
    }

    #[test]
    fn accepted_colors_are_excluded() {
        let participants = vec![
            participant(ParticipantStatus::Accepted, Some(HabitColor::Gold)),
            participant(ParticipantStatus::Accepted, Some(HabitColor::Ruby)),
        ];
        let available = available_colors(&participants);
        assert_eq!(available.len(), 4);
        assert!(!available.contains(&HabitColor::Gold));
        assert!(!available.contains(&HabitColor::Ruby));
    }

    #[test]
    fn pending_participants_do_not_reserve_colors() {
        let participants = vec![participant(
            ParticipantStatus::Pending,
            Some(HabitColor::Gold),
        )];
        assert_eq!(available_colors(&participants), HabitColor::PALETTE.to_vec());
    }

    #[test]
    fn empty_habit_offers_full_palette() {
        assert_eq!(available_colors(&[]), HabitColor::PALETTE.to_vec());
    }
}
