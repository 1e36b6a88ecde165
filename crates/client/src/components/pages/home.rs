use chrono::Local;
use leptos::{component, create_local_resource, view, CollectView, IntoView, SignalGet, Transition};
use leptos_router::A;

use crate::{api::fetch_habits, components::components::HabitCard};

#[component]
pub fn Home() -> impl IntoView {
    let habits = create_local_resource(|| (), |_| fetch_habits());

    let date_label = Local::now().format("%A, %-d %B").to_string();

    view! {
        <div class="home">
            <p class="home-date">{date_label}</p>
            <h1>"Start your streak."</h1>
            <p class="home-subtitle">"Create a habit and check it off every day."</p>
            <A class="home-add-button" href="/habits">"+"</A>

            <h2>"My habits"</h2>
            <Transition fallback=move || view! { <p>"Loading..."</p> }>
                {move || habits.get().map(|result| match result {
                    Ok(habits) if habits.is_empty() => {
                        view! { <p>"No habits yet. Create your first one!"</p> }.into_view()
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
