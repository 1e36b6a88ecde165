use leptos::{
    component, create_action, create_local_resource, create_signal, view, CollectView, IntoView,
    Show, SignalGet, SignalUpdate, Transition,
};
use shared::model::NewHabit;
use tracing::warn;

use crate::{
    api::{create_habit, fetch_friends, fetch_habits},
    components::{components::HabitCard, forms::HabitForm},
};

#[component]
pub fn Habits() -> impl IntoView {
    let (reload, set_reload) = create_signal(0u32);
    let habits = create_local_resource(move || reload.get(), |_| fetch_habits());
    let friends = create_local_resource(|| (), |_| fetch_friends());

    let (show_form, set_show_form) = create_signal(false);
    let (form_error, set_form_error) = create_signal(None::<String>);

    let create = create_action(move |new_habit: &NewHabit| {
        let new_habit = new_habit.clone();
        async move {
            match create_habit(&new_habit).await {
                Ok(_) => {
                    set_form_error.update(|e| *e = None);
                    set_show_form.update(|v| *v = false);
                    set_reload.update(|n| *n += 1);
                }
                Err(err) => {
                    let msg = format!("{err:?}");
                    warn!("Error creating habit: {msg}");
                    set_form_error.update(|e| *e = Some(msg));
                }
            }
        }
    });

    view! {
        <div class="habits">
            <div class="habits-header">
                <h1>"Habits"</h1>
                <button on:click=move |_| set_show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Cancel" } else { "New habit" }}
                </button>
            </div>

            <Show when=move || show_form.get() fallback=|| ()>
                {move || {
                    let friends = friends
                        .get()
                        .and_then(|r| r.ok())
                        .unwrap_or_default();
                    view! {
                        <HabitForm
                            action=create
                            friends
                            error=form_error
                            disabled=create.pending()
                            submit_label="Create"
                        />
                    }
                }}
            </Show>

            <Transition fallback=move || view! { <p>"Loading..."</p> }>
                {move || habits.get().map(|result| match result {
                    Ok(habits) if habits.is_empty() => {
                        view! { <p>"No habits yet."</p> }.into_view()
                    }
                    Ok(habits) => habits
                        .into_iter()
                        .map(|habit| view! { <HabitCard habit/> })
                        .collect_view(),
                    Err(err) => view! { <p class="error">{format!("{err:?}")}</p> }.into_view(),
                })}
            </Transition>
        </div>
    }
}
