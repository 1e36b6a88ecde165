use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    api::error::ValidationError,
    calendar::FirstDayOfWeek,
    model::ValidateModel,
    types::Uuid,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub telegram_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub avatar_emoji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Calendar week-start preference
    #[serde(default)]
    pub first_day_of_week: FirstDayOfWeek,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn display_name(&self) -> String {
        self.first_name
            .clone()
            .or_else(|| self.username.clone())
            .unwrap_or_else(|| self.id.to_string())
    }
}

/// Edit payload; absent fields are left unchanged by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_day_of_week: Option<FirstDayOfWeek>,
}

impl ValidateModel for UpdateProfile {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        if let Some(emoji) = self.avatar_emoji.as_deref() {
            if emoji.trim().is_empty() {
                errors.push("Avatar emoji must not be empty".to_string());
            }
        }
        if let Some(username) = self.username.as_deref() {
            if username.trim().is_empty() {
                errors.push("Username must not be empty".to_string());
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                error_messages: errors,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_day_of_week_defaults_to_monday() {
        let json = r#"{
            "id": "6f0b6a4e-9f80-4f0f-9e1d-0c6a1c6f4e1a",
            "telegram_id": 42,
            "avatar_emoji": "🦊",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.first_day_of_week, FirstDayOfWeek::Monday);
    }

    #[test]
    fn blank_avatar_emoji_rejected() {
        let update = UpdateProfile {
            avatar_emoji: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
