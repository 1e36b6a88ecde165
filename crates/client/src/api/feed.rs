use gloo::net::http::Method;
use shared::{
    api::{
        self,
        error::{FrontendError, ServerError},
        response_errors::FetchError,
    },
    model::FeedEvent,
};

use super::json_request;

/// Newest-first activity of the user's friends; the server caps the
/// window, the client paginates locally
pub async fn fetch_feed() -> Result<Vec<FeedEvent>, FrontendError<ServerError<FetchError>>> {
    json_request::<_, Vec<FeedEvent>, _>(Method::GET, api::Object::Feed.path(), None::<&()>).await
}
