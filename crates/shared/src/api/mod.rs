use chrono::NaiveDate;
use const_format::concatcp;

use crate::{calendar::DATE_FORMAT, types::Uuid};

pub mod error;
pub mod response_errors;

pub const API_BASE_PATH: &str = "/api/";

/// Auth material sourced from the host Telegram WebApp bridge; attached to
/// every request when present
pub const TELEGRAM_INIT_DATA_HEADER: &str = "X-Telegram-Init-Data";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    AuthMe,
    Habits,
    HabitId,
    HabitComplete,
    HabitLogDate,
    HabitInvitationAccept,
    HabitInvitationDecline,
    Friends,
    FriendsInvite,
    FriendId,
    HabitStats,
    YearlyReport,
    Profile,
    Feed,
    AchievementsMine,
}

impl Object {
    pub const fn path(&self) -> &str {
        use Object::*;
        match self {
            AuthMe => concatcp!(API_BASE_PATH, "auth/me"),
            Habits => concatcp!(API_BASE_PATH, "habits"),
            HabitId => concatcp!(API_BASE_PATH, "habits/:id"),
            HabitComplete => concatcp!(API_BASE_PATH, "habits/:id/complete"),
            HabitLogDate => concatcp!(API_BASE_PATH, "habits/:id/logs/:date"),
            HabitInvitationAccept => concatcp!(API_BASE_PATH, "habits/:id/invitation/accept"),
            HabitInvitationDecline => concatcp!(API_BASE_PATH, "habits/:id/invitation/decline"),
            Friends => concatcp!(API_BASE_PATH, "friends"),
            FriendsInvite => concatcp!(API_BASE_PATH, "friends/invite"),
            FriendId => concatcp!(API_BASE_PATH, "friends/:id"),
            HabitStats => concatcp!(API_BASE_PATH, "stats/habits/:id"),
            YearlyReport => concatcp!(API_BASE_PATH, "stats/yearly"),
            Profile => concatcp!(API_BASE_PATH, "profile"),
            Feed => concatcp!(API_BASE_PATH, "feed"),
            AchievementsMine => concatcp!(API_BASE_PATH, "achievements/my"),
        }
    }

    pub fn with_id(&self, id: &Uuid) -> String {
        self.path().replace(":id", &id.to_string())
    }

    pub fn with_id_and_date(&self, id: &Uuid, date: NaiveDate) -> String {
        self.with_id(id)
            .replace(":date", &date.format(DATE_FORMAT).to_string())
    }

    pub fn with_id_and_days(&self, id: &Uuid, days: u32) -> String {
        format!("{}?days={}", self.with_id(id), days)
    }

    pub fn with_year(&self, year: i32, habit_id: Option<&Uuid>) -> String {
        match habit_id {
            Some(id) => format!("{}?year={year}&habit_id={id}", self.path()),
            None => format!("{}?year={year}", self.path()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_substitution() {
        let id = Uuid::parse("6f0b6a4e-9f80-4f0f-9e1d-0c6a1c6f4e1a").unwrap();
        assert_eq!(
            Object::HabitId.with_id(&id),
            "/api/habits/6f0b6a4e-9f80-4f0f-9e1d-0c6a1c6f4e1a"
        );
    }

    #[test]
    fn id_and_date_substitution() {
        let id = Uuid::parse("6f0b6a4e-9f80-4f0f-9e1d-0c6a1c6f4e1a").unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(
            Object::HabitLogDate.with_id_and_date(&id, date),
            "/api/habits/6f0b6a4e-9f80-4f0f-9e1d-0c6a1c6f4e1a/logs/2024-01-02"
        );
    }

    #[test]
    fn stats_query_string() {
        let id = Uuid::parse("6f0b6a4e-9f80-4f0f-9e1d-0c6a1c6f4e1a").unwrap();
        assert_eq!(
            Object::HabitStats.with_id_and_days(&id, 30),
            "/api/stats/habits/6f0b6a4e-9f80-4f0f-9e1d-0c6a1c6f4e1a?days=30"
        );
    }

    #[test]
    fn yearly_report_query_string() {
        let id = Uuid::parse("6f0b6a4e-9f80-4f0f-9e1d-0c6a1c6f4e1a").unwrap();
        assert_eq!(
            Object::YearlyReport.with_year(2024, Some(&id)),
            "/api/stats/yearly?year=2024&habit_id=6f0b6a4e-9f80-4f0f-9e1d-0c6a1c6f4e1a"
        );
        assert_eq!(
            Object::YearlyReport.with_year(2024, None),
            "/api/stats/yearly?year=2024"
        );
    }

    #[test]
    fn feed_and_achievement_paths() {
        assert_eq!(Object::Feed.path(), "/api/feed");
        assert_eq!(Object::AchievementsMine.path(), "/api/achievements/my");
    }
}
