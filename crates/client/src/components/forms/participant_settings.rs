use leptos::{
    component, create_signal, view, Action, CollectView, IntoView, Signal, SignalGet,
    SignalUpdate, SignalWith,
};
use shared::model::HabitColor;

/// Shown to an invited participant of a shared habit. The color picker is
/// restricted to palette entries no accepted participant holds yet.
#[component]
pub fn ParticipantSettingsForm(
    accept_action: Action<Option<HabitColor>, ()>,
    decline_action: Action<(), ()>,
    available: Vec<HabitColor>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let (color, set_color) = create_signal(available.first().copied());

    view! {
        <form class="participant-settings" on:submit=|ev| ev.prevent_default()>
            {move || error.with(|e| e.as_ref().map(|e| view! {
                <p style="color:red">{e.clone()}</p>
            }))}

            <p>"You have been invited to this habit. Pick your color:"</p>
            <div class="color-picker">
                {available.iter().map(|&entry| view! {
                    <button
                        type="button"
                        class="color-swatch"
                        class:active=move || color.get() == Some(entry)
                        style=format!("background: {}", entry.css_hex())
                        prop:disabled=move || disabled.get()
                        on:click=move |_| set_color.update(|c| *c = Some(entry))
                    ></button>
                }).collect_view()}
            </div>

            <button
                prop:disabled=move || disabled.get()
                on:click=move |_| accept_action.dispatch(color.get())
            >
                "Accept"
            </button>
            <button
                class="secondary"
                prop:disabled=move || disabled.get()
                on:click=move |_| decline_action.dispatch(())
            >
                "Decline"
            </button>
        </form>
    }
}
