use leptos::{
    component, create_action, create_local_resource, create_signal, event_target_value, view,
    Action, CollectView, IntoView, Signal, SignalGet, SignalUpdate, SignalWith, Transition,
};
use leptos_router::A;
use shared::{
    calendar::FirstDayOfWeek,
    model::{UpdateProfile, User},
};
use tracing::warn;

use crate::api::{fetch_profile, update_profile};

#[component]
pub fn Profile() -> impl IntoView {
    let (reload, set_reload) = create_signal(0u32);
    let profile = create_local_resource(move || reload.get(), |_| fetch_profile());

    let (error, set_error) = create_signal(None::<String>);

    let save = create_action(move |update: &UpdateProfile| {
        let update = update.clone();
        async move {
            match update_profile(&update).await {
                Ok(_) => {
                    set_error.update(|e| *e = None);
                    set_reload.update(|n| *n += 1);
                }
                Err(err) => {
                    let msg = format!("{err:?}");
                    warn!("Error updating profile: {msg}");
                    set_error.update(|e| *e = Some(msg));
                }
            }
        }
    });

    view! {
        <div class="profile">
            <h1>"Profile"</h1>
            <div class="profile-links">
                <A href="/achievements">"Achievements"</A>
                <A href="/report">"Yearly report"</A>
            </div>
            <Transition fallback=move || view! { <p>"Loading..."</p> }>
                {move || profile.get().map(|result| match result {
                    Ok(user) => view! {
                        <ProfileForm user action=save error disabled=save.pending()/>
                    }
                    .into_view(),
                    Err(err) => view! { <p class="error">{format!("{err:?}")}</p> }.into_view(),
                })}
            </Transition>
        </div>
    }
}

#[component]
fn ProfileForm(
    user: User,
    action: Action<UpdateProfile, ()>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let (username, set_username) = create_signal(user.username.clone().unwrap_or_default());
    let (first_name, set_first_name) = create_signal(user.first_name.clone().unwrap_or_default());
    let (last_name, set_last_name) = create_signal(user.last_name.clone().unwrap_or_default());
    let (avatar_emoji, set_avatar_emoji) = create_signal(user.avatar_emoji.clone());
    let (bio, set_bio) = create_signal(user.bio.clone().unwrap_or_default());
    let (first_day, set_first_day) = create_signal(user.first_day_of_week);

    let dispatch_action = move || {
        let non_blank = |v: String| (!v.trim().is_empty()).then_some(v);
        action.dispatch(UpdateProfile {
            username: non_blank(username.get()),
            first_name: non_blank(first_name.get()),
            last_name: non_blank(last_name.get()),
            avatar_emoji: Some(avatar_emoji.get()),
            bio: non_blank(bio.get()),
            first_day_of_week: Some(first_day.get()),
        })
    };

    view! {
        <form class="profile-form" on:submit=|ev| ev.prevent_default()>
            {move || error.with(|e| e.as_ref().map(|e| view! {
                <p style="color:red">{e.clone()}</p>
            }))}

            <label>
                "Avatar"
                <input
                    type="text"
                    prop:value=move || avatar_emoji.get()
                    prop:disabled=move || disabled.get()
                    on:input=move |ev| {
                        let val = event_target_value(&ev);
                        set_avatar_emoji.update(|v| *v = val);
                    }
                />
            </label>

            <label>
                "Username"
                <input
                    type="text"
                    prop:value=move || username.get()
                    prop:disabled=move || disabled.get()
                    on:input=move |ev| {
                        let val = event_target_value(&ev);
                        set_username.update(|v| *v = val);
                    }
                />
            </label>

            <label>
                "First name"
                <input
                    type="text"
                    prop:value=move || first_name.get()
                    prop:disabled=move || disabled.get()
                    on:input=move |ev| {
                        let val = event_target_value(&ev);
                        set_first_name.update(|v| *v = val);
                    }
                />
            </label>

            <label>
                "Last name"
                <input
                    type="text"
                    prop:value=move || last_name.get()
                    prop:disabled=move || disabled.get()
                    on:input=move |ev| {
                        let val = event_target_value(&ev);
                        set_last_name.update(|v| *v = val);
                    }
                />
            </label>

            <label>
                "Bio"
                <textarea
                    prop:value=move || bio.get()
                    prop:disabled=move || disabled.get()
                    on:input=move |ev| {
                        let val = event_target_value(&ev);
                        set_bio.update(|v| *v = val);
                    }
                ></textarea>
            </label>

            <label>
                "Week starts on"
                <select
                    prop:disabled=move || disabled.get()
                    on:change=move |ev| {
                        let day = match event_target_value(&ev).as_str() {
                            "sunday" => FirstDayOfWeek::Sunday,
                            _ => FirstDayOfWeek::Monday,
                        };
                        set_first_day.update(|d| *d = day);
                    }
                >
                    {[
                        (FirstDayOfWeek::Monday, "monday", "Monday"),
                        (FirstDayOfWeek::Sunday, "sunday", "Sunday"),
                    ]
                    .into_iter()
                    .map(|(day, value, label)| view! {
                        <option value=value selected=move || first_day.get() == day>
                            {label}
                        </option>
                    })
                    .collect_view()}
                </select>
            </label>

            <button
                prop:disabled=move || disabled.get()
                on:click=move |_| dispatch_action()
            >
                "Save"
            </button>
        </form>
    }
}
