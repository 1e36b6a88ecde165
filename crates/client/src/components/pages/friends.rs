use leptos::{
    component, create_action, create_local_resource, create_signal, view, CollectView, IntoView,
    SignalGet, SignalUpdate, SignalWith, Transition,
};
use shared::{
    model::{Friendship, FriendshipStatus},
    types::Uuid,
};
use tracing::warn;

use crate::api::{fetch_friend_invite, fetch_friends, remove_friend};

#[component]
pub fn Friends() -> impl IntoView {
    let (reload, set_reload) = create_signal(0u32);
    let friends = create_local_resource(move || reload.get(), |_| fetch_friends());
    let invite = create_local_resource(|| (), |_| fetch_friend_invite());

    let (error, set_error) = create_signal(None::<String>);

    let remove = create_action(move |id: &Uuid| {
        let id = *id;
        async move {
            match remove_friend(&id).await {
                Ok(()) => {
                    set_error.update(|e| *e = None);
                    set_reload.update(|n| *n += 1);
                }
                Err(err) => {
                    let msg = format!("{err:?}");
                    warn!("Error removing friend: {msg}");
                    set_error.update(|e| *e = Some(msg));
                }
            }
        }
    });

    let friend_row = move |friendship: Friendship| {
        let id = friendship.friend_id;
        let pending = friendship.status == FriendshipStatus::Pending;
        let (emoji, name) = friendship
            .friend
            .as_ref()
            .map(|f| (f.avatar_emoji.clone(), f.display_name()))
            .unwrap_or_else(|| ("❔".to_string(), id.to_string()));
        view! {
            <div class="friend-row">
                <span class="friend-avatar">{emoji}</span>
                <span class="friend-name">{name}</span>
                {pending.then(|| view! { <span class="pending-badge">"pending"</span> })}
                <button
                    class="danger"
                    prop:disabled=move || remove.pending().get()
                    on:click=move |_| remove.dispatch(id)
                >
                    "Remove"
                </button>
            </div>
        }
    };

    view! {
        <div class="friends">
            <h1>"Friends"</h1>

            {move || error.with(|e| e.as_ref().map(|e| view! {
                <p style="color:red">{e.clone()}</p>
            }))}

            <Transition fallback=move || view! { <p>"Loading..."</p> }>
                {move || invite.get().map(|result| match result {
                    Ok(invite) => view! {
                        <div class="invite-card">
                            <p>"Share this link to add a friend:"</p>
                            <a href=invite.referral_url.clone()>{invite.referral_url}</a>
                            <p class="invite-code">{invite.referral_code}</p>
                        </div>
                    }
                    .into_view(),
                    Err(err) => {
                        view! { <p class="error">{format!("{err:?}")}</p> }.into_view()
                    }
                })}
            </Transition>

            <Transition fallback=move || view! { <p>"Loading..."</p> }>
                {move || friends.get().map(|result| match result {
                    Ok(friends) if friends.is_empty() => {
                        view! { <p>"No friends yet. Send someone your invite link."</p> }
                            .into_view()
                    }
                    Ok(friends) => friends.into_iter().map(friend_row).collect_view(),
                    Err(err) => view! { <p class="error">{format!("{err:?}")}</p> }.into_view(),
                })}
            </Transition>
        </div>
    }
}
