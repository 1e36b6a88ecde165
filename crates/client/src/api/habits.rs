use gloo::net::http::Method;
use shared::{
    api::{
        self,
        error::{FrontendError, ServerError},
        response_errors::{FetchError, HabitError},
    },
    model::{Habit, NewHabit, UpdateHabit},
    types::Uuid,
};

use super::{json_request, simple_request};

pub async fn fetch_habits() -> Result<Vec<Habit>, FrontendError<ServerError<FetchError>>> {
    json_request::<_, Vec<Habit>, _>(Method::GET, api::Object::Habits.path(), None::<&()>).await
}

pub async fn fetch_habit(id: &Uuid) -> Result<Habit, FrontendError<ServerError<HabitError>>> {
    json_request::<_, Habit, _>(Method::GET, &api::Object::HabitId.with_id(id), None::<&()>).await
}

pub async fn create_habit(
    new_habit: &NewHabit,
) -> Result<Habit, FrontendError<ServerError<HabitError>>> {
    json_request(Method::POST, api::Object::Habits.path(), Some(new_habit)).await
}

pub async fn update_habit(
    id: &Uuid,
    update: &UpdateHabit,
) -> Result<Habit, FrontendError<ServerError<HabitError>>> {
    json_request(Method::PUT, &api::Object::HabitId.with_id(id), Some(update)).await
}

/// Owner only; the server cascades removal of the habit's logs
pub async fn delete_habit(id: &Uuid) -> Result<(), FrontendError<ServerError<HabitError>>> {
    simple_request(Method::DELETE, &api::Object::HabitId.with_id(id))
        .await
        .map(|_| ())
}
