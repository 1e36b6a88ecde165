use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    TotalDays,
    FriendsCount,
    Streak,
    HabitInvites,
}

impl AchievementKind {
    pub const ALL: [AchievementKind; 4] = [
        AchievementKind::TotalDays,
        AchievementKind::FriendsCount,
        AchievementKind::Streak,
        AchievementKind::HabitInvites,
    ];

    /// Thresholds for tiers 1..=3, in tier order
    pub const fn tier_thresholds(&self) -> [u32; 3] {
        use AchievementKind::*;
        match self {
            TotalDays => [7, 14, 21],
            FriendsCount => [3, 7, 10],
            Streak => [5, 15, 30],
            HabitInvites => [1, 3, 5],
        }
    }

    pub const fn title(&self) -> &'static str {
        use AchievementKind::*;
        match self {
            TotalDays => "Complete a habit regularly",
            FriendsCount => "Invite friends",
            Streak => "Keep a streak going",
            HabitInvites => "Share habits with friends",
        }
    }
}

/// One earned tier of `GET /achievements/my`, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAchievement {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: AchievementKind,
    pub tier: u8,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&AchievementKind::FriendsCount).unwrap(),
            "\"friends_count\""
        );
        let parsed: AchievementKind = serde_json::from_str("\"habit_invites\"").unwrap();
        assert_eq!(parsed, AchievementKind::HabitInvites);
    }

    #[test]
    fn achievement_row_uses_the_type_field() {
        let json = r#"{
            "id": "6f0b6a4e-9f80-4f0f-9e1d-0c6a1c6f4e1a",
            "type": "streak",
            "tier": 2,
            "created_at": "2024-01-01T10:00:00Z"
        }"#;
        let row: UserAchievement = serde_json::from_str(json).unwrap();
        assert_eq!(row.kind, AchievementKind::Streak);
        assert_eq!(row.tier, 2);
    }

    #[test]
    fn thresholds_ascend_within_a_kind() {
        for kind in AchievementKind::ALL {
            let [a, b, c] = kind.tier_thresholds();
            assert!(a < b && b < c, "{kind:?}");
        }
    }
}
