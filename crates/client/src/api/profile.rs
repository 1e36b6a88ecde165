use gloo::net::http::Method;
use shared::{
    api::{
        self,
        error::{FrontendError, ServerError},
        response_errors::{FetchError, ProfileError},
    },
    model::{UpdateProfile, User},
};

use super::json_request;

pub async fn fetch_profile() -> Result<User, FrontendError<ServerError<FetchError>>> {
    json_request::<_, User, _>(Method::GET, api::Object::Profile.path(), None::<&()>).await
}

pub async fn update_profile(
    update: &UpdateProfile,
) -> Result<User, FrontendError<ServerError<ProfileError>>> {
    json_request(Method::PUT, api::Object::Profile.path(), Some(update)).await
}
