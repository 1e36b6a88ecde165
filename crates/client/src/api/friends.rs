use gloo::net::http::Method;
use shared::{
    api::{
        self,
        error::{FrontendError, ServerError},
        response_errors::{FetchError, FriendError},
    },
    model::{FriendInvite, Friendship},
    types::Uuid,
};

use super::{json_request, simple_request};

pub async fn fetch_friends() -> Result<Vec<Friendship>, FrontendError<ServerError<FetchError>>> {
    json_request::<_, Vec<Friendship>, _>(Method::GET, api::Object::Friends.path(), None::<&()>)
        .await
}

pub async fn fetch_friend_invite() -> Result<FriendInvite, FrontendError<ServerError<FetchError>>>
{
    json_request::<_, FriendInvite, _>(Method::GET, api::Object::FriendsInvite.path(), None::<&()>)
        .await
}

// No add wrapper: friendships are created server-side when the invitee
// opens the referral link
pub async fn remove_friend(id: &Uuid) -> Result<(), FrontendError<ServerError<FriendError>>> {
    simple_request(Method::DELETE, &api::Object::FriendId.with_id(id))
        .await
        .map(|_| ())
}
