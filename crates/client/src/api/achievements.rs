use gloo::net::http::Method;
use shared::{
    api::{
        self,
        error::{FrontendError, ServerError},
        response_errors::FetchError,
    },
    model::UserAchievement,
};

use super::json_request;

pub async fn fetch_my_achievements(
) -> Result<Vec<UserAchievement>, FrontendError<ServerError<FetchError>>> {
    json_request::<_, Vec<UserAchievement>, _>(
        Method::GET,
        api::Object::AchievementsMine.path(),
        None::<&()>,
    )
    .await
}
