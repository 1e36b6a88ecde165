use std::collections::BTreeSet;

use leptos::{
    component, create_signal, event_target_checked, event_target_value, view, Action, CollectView,
    IntoView, Show, Signal, SignalGet, SignalUpdate, SignalWith,
};
use shared::{
    calendar::FirstDayOfWeek,
    model::{Friendship, Habit, HabitColor, NewHabit},
    types::Uuid,
};
use tracing::debug;

/// Create/edit form. Always produces a `NewHabit`; edit call sites map it
/// onto an `UpdateHabit` themselves.
#[component]
pub fn HabitForm(
    action: Action<NewHabit, ()>,
    #[prop(optional)] initial: Option<Habit>,
    #[prop(optional)] friends: Vec<Friendship>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(optional, default = "Save")] submit_label: &'static str,
) -> impl IntoView {
    let (name, set_name) = create_signal(initial.as_ref().map(|h| h.name.clone()).unwrap_or_default());
    let (description, set_description) = create_signal(
        initial
            .as_ref()
            .and_then(|h| h.description.clone())
            .unwrap_or_default(),
    );
    let (color, set_color) =
        create_signal(initial.as_ref().map(|h| h.color).unwrap_or_default());

    // Exactly one schedule mode is active at a time
    let (use_weekly_goal, set_use_weekly_goal) =
        create_signal(initial.as_ref().map_or(false, |h| h.weekly_goal_days.is_some()));
    let (weekly_goal, set_weekly_goal) = create_signal(
        initial
            .as_ref()
            .and_then(|h| h.weekly_goal_days)
            .unwrap_or(4),
    );
    let (days_of_week, set_days_of_week) = create_signal(
        initial
            .as_ref()
            .and_then(|h| h.days_of_week.clone())
            .map(|days| days.into_iter().collect::<BTreeSet<u8>>())
            .unwrap_or_else(|| (1..=7).collect()),
    );

    let (is_shared, set_is_shared) =
        create_signal(initial.as_ref().map_or(false, |h| h.is_shared));
    let (participant_ids, set_participant_ids) = create_signal(Vec::<Uuid>::new());

    let (reminder_enabled, set_reminder_enabled) =
        create_signal(initial.as_ref().map_or(false, |h| h.reminder_enabled));
    let (reminder_time, set_reminder_time) = create_signal(
        initial
            .as_ref()
            .and_then(|h| h.reminder_time.clone())
            .unwrap_or_else(|| "09:00".to_string()),
    );

    let dispatch_action = move || {
        let habit = NewHabit {
            name: name.get(),
            description: description.with(|d| (!d.trim().is_empty()).then(|| d.clone())),
            is_shared: is_shared.get(),
            participant_ids: if is_shared.get() {
                participant_ids.get()
            } else {
                Vec::new()
            },
            color: color.get(),
            days_of_week: (!use_weekly_goal.get())
                .then(|| days_of_week.with(|days| days.iter().copied().collect())),
            weekly_goal_days: use_weekly_goal.get().then(|| weekly_goal.get()),
            reminder_enabled: reminder_enabled.get(),
            reminder_time: reminder_enabled.get().then(|| reminder_time.get()),
        };
        debug!("HabitForm::dispatch_action: {habit:?}");
        action.dispatch(habit)
    };

    let button_disabled =
        Signal::derive(move || disabled.get() || name.with(|n| n.trim().is_empty()));
    let day_labels = FirstDayOfWeek::Monday.day_labels();

    view! {
        <form class="habit-form" on:submit=|ev| ev.prevent_default()>
            {move || error.with(|e| e.as_ref().map(|e| view! {
                <p style="color:red">{e.clone()}</p>
            }))}

            <input
                type="text"
                required
                placeholder="Habit name"
                prop:value=move || name.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    set_name.update(|v| *v = val);
                }
            />

            <textarea
                placeholder="Description (optional)"
                prop:value=move || description.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    set_description.update(|v| *v = val);
                }
            ></textarea>

            <div class="color-picker">
                {HabitColor::PALETTE.iter().map(|&entry| view! {
                    <button
                        type="button"
                        class="color-swatch"
                        class:active=move || color.get() == entry
                        style=format!("background: {}", entry.css_hex())
                        prop:disabled=move || disabled.get()
                        on:click=move |_| set_color.update(|c| *c = entry)
                    ></button>
                }).collect_view()}
            </div>

            <label>
                <input
                    type="checkbox"
                    prop:checked=move || use_weekly_goal.get()
                    prop:disabled=move || disabled.get()
                    on:change=move |ev| {
                        let val = event_target_checked(&ev);
                        set_use_weekly_goal.update(|v| *v = val);
                    }
                />
                "Weekly goal instead of fixed days"
            </label>

            <Show
                when=move || use_weekly_goal.get()
                fallback=move || view! {
                    <div class="weekday-picker">
                        {(1..=7u8).map(|day| {
                            let label = day_labels[day as usize - 1];
                            view! {
                                <button
                                    type="button"
                                    class="weekday-toggle"
                                    class:active=move || days_of_week.with(|days| days.contains(&day))
                                    prop:disabled=move || disabled.get()
                                    on:click=move |_| set_days_of_week.update(|days| {
                                        if !days.remove(&day) {
                                            days.insert(day);
                                        }
                                    })
                                >
                                    {label}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                }
            >
                <label>
                    "Days per week"
                    <select
                        prop:disabled=move || disabled.get()
                        on:change=move |ev| {
                            if let Ok(goal) = event_target_value(&ev).parse::<u8>() {
                                set_weekly_goal.update(|g| *g = goal);
                            }
                        }
                    >
                        {(1..=7u8).map(|goal| view! {
                            <option value=goal.to_string() selected=move || weekly_goal.get() == goal>
                                {goal.to_string()}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
            </Show>

            <label>
                <input
                    type="checkbox"
                    prop:checked=move || is_shared.get()
                    prop:disabled=move || disabled.get()
                    on:change=move |ev| {
                        let val = event_target_checked(&ev);
                        set_is_shared.update(|v| *v = val);
                    }
                />
                "Shared habit"
            </label>

            <Show when=move || is_shared.get() fallback=|| ()>
                <div class="friend-picker">
                    {friends.iter().filter_map(|friendship| {
                        let friend = friendship.friend.clone()?;
                        let friend_id = friend.id;
                        Some(view! {
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || participant_ids.with(|ids| ids.contains(&friend_id))
                                    prop:disabled=move || disabled.get()
                                    on:change=move |_| set_participant_ids.update(|ids| {
                                        match ids.iter().position(|id| *id == friend_id) {
                                            Some(i) => {
                                                ids.remove(i);
                                            }
                                            None => ids.push(friend_id),
                                        }
                                    })
                                />
                                {format!("{} {}", friend.avatar_emoji, friend.display_name())}
                            </label>
                        })
                    }).collect_view()}
                </div>
            </Show>

            <label>
                <input
                    type="checkbox"
                    prop:checked=move || reminder_enabled.get()
                    prop:disabled=move || disabled.get()
                    on:change=move |ev| {
                        let val = event_target_checked(&ev);
                        set_reminder_enabled.update(|v| *v = val);
                    }
                />
                "Remind me"
            </label>

            <Show when=move || reminder_enabled.get() fallback=|| ()>
                <input
                    type="time"
                    prop:value=move || reminder_time.get()
                    prop:disabled=move || disabled.get()
                    on:input=move |ev| {
                        let val = event_target_value(&ev);
                        set_reminder_time.update(|v| *v = val);
                    }
                />
            </Show>

            <button
                prop:disabled=move || button_disabled.get()
                on:click=move |_| dispatch_action()
            >
                {submit_label}
            </button>
        </form>
    }
}
