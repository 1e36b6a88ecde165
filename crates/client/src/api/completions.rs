use chrono::NaiveDate;
use gloo::net::http::Method;
use shared::{
    api::{
        self,
        error::{FrontendError, ServerError},
        response_errors::HabitError,
    },
    model::{CompleteHabit, CompletionLog},
    types::Uuid,
};

use super::{json_request, simple_request};

/// Idempotent intent; a duplicate completion for the date comes back as
/// `HabitError::AlreadyCompleted`
pub async fn complete_habit(
    id: &Uuid,
    payload: &CompleteHabit,
) -> Result<CompletionLog, FrontendError<ServerError<HabitError>>> {
    json_request(
        Method::POST,
        &api::Object::HabitComplete.with_id(id),
        Some(payload),
    )
    .await
}

pub async fn remove_log(
    id: &Uuid,
    date: NaiveDate,
) -> Result<(), FrontendError<ServerError<HabitError>>> {
    simple_request(
        Method::DELETE,
        &api::Object::HabitLogDate.with_id_and_date(id, date),
    )
    .await
    .map(|_| ())
}
