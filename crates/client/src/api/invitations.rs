use gloo::net::http::Method;
use shared::{
    api::{
        self,
        error::{FrontendError, ServerError},
        response_errors::HabitError,
    },
    model::{AcceptInvitation, Habit},
    types::Uuid,
};

use super::{json_request, simple_request};

pub async fn accept_invitation(
    id: &Uuid,
    payload: &AcceptInvitation,
) -> Result<Habit, FrontendError<ServerError<HabitError>>> {
    json_request(
        Method::POST,
        &api::Object::HabitInvitationAccept.with_id(id),
        Some(payload),
    )
    .await
}

pub async fn decline_invitation(id: &Uuid) -> Result<(), FrontendError<ServerError<HabitError>>> {
    simple_request(
        Method::POST,
        &api::Object::HabitInvitationDecline.with_id(id),
    )
    .await
    .map(|_| ())
}
