use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::{AchievementKind, FriendSummary},
    types::Uuid,
};

/// What happened; the server may grow new types, so deserialization
/// never fails on an unrecognised one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedEventType {
    Invited,
    Joined,
    Declined,
    Left,
    Completed,
    Removed,
    Achievement,
    #[serde(other)]
    Unknown,
}

/// Habit reference embedded in a feed event; just enough to render a
/// line of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedHabitRef {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedAchievementRef {
    #[serde(rename = "type")]
    pub kind: AchievementKind,
    pub tier: u8,
}

/// One entry of `GET /feed`, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEvent {
    pub id: Uuid,
    pub event_type: FeedEventType,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habit: Option<FeedHabitRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<FriendSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement: Option<FeedAchievementRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&FeedEventType::Completed).unwrap(),
            "\"completed\""
        );
        let parsed: FeedEventType = serde_json::from_str("\"joined\"").unwrap();
        assert_eq!(parsed, FeedEventType::Joined);
    }

    #[test]
    fn unrecognised_event_type_falls_back_to_unknown() {
        let parsed: FeedEventType = serde_json::from_str("\"poked\"").unwrap();
        assert_eq!(parsed, FeedEventType::Unknown);
    }

    #[test]
    fn bare_event_deserializes_without_optional_refs() {
        let json = r#"{
            "id": "6f0b6a4e-9f80-4f0f-9e1d-0c6a1c6f4e1a",
            "event_type": "left",
            "created_at": "2024-01-01T10:00:00Z"
        }"#;
        let event: FeedEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type, FeedEventType::Left);
        assert!(event.habit.is_none());
        assert!(event.actor.is_none());
        assert!(event.achievement.is_none());
    }
}
