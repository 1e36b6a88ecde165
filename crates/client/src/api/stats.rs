use gloo::net::http::Method;
use shared::{
    api::{
        self,
        error::{FrontendError, ServerError},
        response_errors::{FetchError, HabitError},
    },
    model::{HabitStats, YearlyReport},
    types::Uuid,
};

use super::json_request;

pub async fn fetch_habit_stats(
    id: &Uuid,
    days: u32,
) -> Result<HabitStats, FrontendError<ServerError<HabitError>>> {
    json_request::<_, HabitStats, _>(
        Method::GET,
        &api::Object::HabitStats.with_id_and_days(id, days),
        None::<&()>,
    )
    .await
}

pub async fn fetch_yearly_report(
    year: i32,
    habit_id: Option<&Uuid>,
) -> Result<YearlyReport, FrontendError<ServerError<FetchError>>> {
    json_request::<_, YearlyReport, _>(
        Method::GET,
        &api::Object::YearlyReport.with_year(year, habit_id),
        None::<&()>,
    )
    .await
}
