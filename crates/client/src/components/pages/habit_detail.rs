use chrono::{Local, Months, NaiveDate};
use leptos::{
    component, create_action, create_local_resource, create_signal, view, IntoView, ReadSignal,
    Show, Signal, SignalGet, SignalUpdate, SignalWith, Transition, WriteSignal,
};
use leptos_router::{use_navigate, use_params_map, A};
use shared::{
    calendar::{participant_completions, project_month, Schedule},
    model::{available_colors, CompleteHabit, Habit, HabitColor, HabitStats, NewHabit, UpdateHabit, User},
    types::Uuid,
};
use tracing::warn;

use crate::{
    api::{
        accept_invitation, complete_habit, decline_invitation, delete_habit, fetch_habit,
        fetch_habit_stats, fetch_me, remove_log, update_habit,
    },
    components::{
        components::CalendarGrid,
        forms::{HabitForm, ParticipantSettingsForm},
    },
};

/// Enough history for a year of month navigation
const STATS_PERIOD_DAYS: u32 = 365;

#[component]
pub fn HabitDetail() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || {
        params.with(|p| p.get("id").and_then(|v| Uuid::parse(v).ok()))
    });

    let (reload, set_reload) = create_signal(0u32);
    let me = create_local_resource(|| (), |_| fetch_me());
    let habit = create_local_resource(
        move || (id.get(), reload.get()),
        |(id, _)| async move {
            match id {
                Some(id) => fetch_habit(&id).await.map(Some),
                None => Ok(None),
            }
        },
    );
    let stats = create_local_resource(
        move || (id.get(), reload.get()),
        |(id, _)| async move {
            match id {
                Some(id) => fetch_habit_stats(&id, STATS_PERIOD_DAYS).await.map(Some),
                None => Ok(None),
            }
        },
    );

    let (month, set_month) = create_signal(Local::now().date_naive());

    view! {
        <div class="habit-detail">
            <A class="back-link" href="/habits">"< Back"</A>
            <Transition fallback=move || view! { <p>"Loading..."</p> }>
                {move || habit.get().map(|result| match result {
                    Ok(Some(habit)) => {
                        let stats = stats.get().and_then(|r| r.ok()).flatten();
                        let user = me.get().and_then(|r| r.ok());
                        view! {
                            <HabitView habit stats user month set_month set_reload/>
                        }
                        .into_view()
                    }
                    Ok(None) => view! { <p class="error">"Habit not found"</p> }.into_view(),
                    Err(err) => view! { <p class="error">{format!("{err:?}")}</p> }.into_view(),
                })}
            </Transition>
        </div>
    }
}

#[component]
fn HabitView(
    habit: Habit,
    stats: Option<HabitStats>,
    user: Option<User>,
    month: ReadSignal<NaiveDate>,
    set_month: WriteSignal<NaiveDate>,
    set_reload: WriteSignal<u32>,
) -> impl IntoView {
    let habit_id = habit.id;
    let (error, set_error) = create_signal(None::<String>);
    let (editing, set_editing) = create_signal(false);

    // Full refetch after every mutation, no local patching
    let refetch = move || set_reload.update(|n| *n += 1);

    let toggle = create_action(move |&(date, completed): &(NaiveDate, bool)| async move {
        let result = if completed {
            remove_log(&habit_id, date).await
        } else {
            complete_habit(&habit_id, &CompleteHabit::for_date(date))
                .await
                .map(|_| ())
        };
        match result {
            Ok(()) => {
                set_error.update(|e| *e = None);
                refetch();
            }
            Err(err) => {
                let msg = format!("{err:?}");
                warn!("Error toggling completion: {msg}");
                set_error.update(|e| *e = Some(msg));
            }
        }
    });

    let update = create_action(move |new_habit: &NewHabit| {
        let update = UpdateHabit {
            name: Some(new_habit.name.clone()),
            description: new_habit.description.clone(),
            color: Some(new_habit.color),
            days_of_week: new_habit.days_of_week.clone(),
            weekly_goal_days: new_habit.weekly_goal_days,
            reminder_enabled: Some(new_habit.reminder_enabled),
            reminder_time: new_habit.reminder_time.clone(),
        };
        async move {
            match update_habit(&habit_id, &update).await {
                Ok(_) => {
                    set_error.update(|e| *e = None);
                    set_editing.update(|v| *v = false);
                    refetch();
                }
                Err(err) => {
                    let msg = format!("{err:?}");
                    warn!("Error updating habit: {msg}");
                    set_error.update(|e| *e = Some(msg));
                }
            }
        }
    });

    let navigate = use_navigate();
    let delete = create_action(move |_: &()| {
        let navigate = navigate.clone();
        async move {
            match delete_habit(&habit_id).await {
                Ok(()) => navigate("/habits", Default::default()),
                Err(err) => {
                    let msg = format!("{err:?}");
                    warn!("Error deleting habit: {msg}");
                    set_error.update(|e| *e = Some(msg));
                }
            }
        }
    });

    let accept = create_action(move |color: &Option<HabitColor>| {
        let payload = shared::model::AcceptInvitation { color: *color };
        async move {
            match accept_invitation(&habit_id, &payload).await {
                Ok(_) => {
                    set_error.update(|e| *e = None);
                    refetch();
                }
                Err(err) => {
                    let msg = format!("{err:?}");
                    warn!("Error accepting invitation: {msg}");
                    set_error.update(|e| *e = Some(msg));
                }
            }
        }
    });

    let navigate = use_navigate();
    let decline = create_action(move |_: &()| {
        let navigate = navigate.clone();
        async move {
            match decline_invitation(&habit_id).await {
                Ok(()) => navigate("/habits", Default::default()),
                Err(err) => {
                    let msg = format!("{err:?}");
                    warn!("Error declining invitation: {msg}");
                    set_error.update(|e| *e = Some(msg));
                }
            }
        }
    });

    let in_flight = Signal::derive(move || {
        toggle.pending().get()
            || update.pending().get()
            || delete.pending().get()
            || accept.pending().get()
            || decline.pending().get()
    });

    let first_day = user
        .as_ref()
        .map(|u| u.first_day_of_week)
        .unwrap_or_default();
    let is_owner = user.as_ref().map_or(false, |u| u.id == habit.created_by);
    let pending_invite = user.as_ref().is_some_and(|u| {
        habit
            .participants
            .iter()
            .any(|p| p.user_id == u.id && !p.is_accepted())
    });

    let schedule = Schedule::from_habit(habit.days_of_week.as_deref(), habit.weekly_goal_days)
        .unwrap_or_else(|err| {
            warn!("Unusable schedule from server: {err}");
            Schedule::Unrestricted
        });
    let completed = stats
        .as_ref()
        .map(|s| s.completed_dates())
        .unwrap_or_default();
    let marks = habit.is_shared.then(|| {
        participant_completions(
            &habit.participants,
            stats
                .as_ref()
                .map(|s| s.participant_completions.as_slice())
                .unwrap_or(&[]),
        )
    });

    let today = Local::now().date_naive();
    let completed_today = completed.contains(&today);

    let calendar = move || {
        let grid = project_month(
            month.get(),
            first_day,
            &schedule,
            &completed,
            marks.as_ref(),
            today,
        );
        view! { <CalendarGrid grid/> }
    };

    let stats_row = stats.as_ref().map(|stats| {
        view! {
            <div class="stats-row">
                <div class="stat">
                    <span class="stat-value">{stats.current_streak}</span>
                    <span class="stat-label">"day streak"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{stats.total_completions}</span>
                    <span class="stat-label">"total"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{stats.above_norm_count}</span>
                    <span class="stat-label">"over norm"</span>
                </div>
            </div>
        }
    });

    let available = available_colors(&habit.participants);
    let habit_for_form = habit.clone();

    view! {
        <div class="habit-view">
            {move || error.with(|e| e.as_ref().map(|e| view! {
                <p style="color:red">{e.clone()}</p>
            }))}

            <div class="habit-title" style=format!("border-color: {}", habit.color.css_hex())>
                <h1>{habit.name.clone()}</h1>
                {habit.is_shared.then(|| view! { <span class="shared-badge">"shared"</span> })}
            </div>
            {habit.description.clone().map(|d| view! { <p class="habit-description">{d}</p> })}

            {stats_row}

            <Show when=move || pending_invite fallback=|| ()>
                <ParticipantSettingsForm
                    accept_action=accept
                    decline_action=decline
                    available=available.clone()
                    error=error
                    disabled=in_flight
                />
            </Show>

            <div class="month-nav">
                <button
                    prop:disabled=move || in_flight.get()
                    on:click=move |_| set_month.update(|m| {
                        if let Some(prev) = m.checked_sub_months(Months::new(1)) {
                            *m = prev;
                        }
                    })
                >
                    "<"
                </button>
                <span class="month-label">{move || month.get().format("%B %Y").to_string()}</span>
                <button
                    prop:disabled=move || in_flight.get()
                    on:click=move |_| set_month.update(|m| {
                        if let Some(next) = m.checked_add_months(Months::new(1)) {
                            *m = next;
                        }
                    })
                >
                    ">"
                </button>
            </div>

            {calendar}

            <button
                class="toggle-today"
                prop:disabled=move || toggle.pending().get()
                on:click=move |_| toggle.dispatch((today, completed_today))
            >
                {if completed_today { "Undo today" } else { "Done today" }}
            </button>

            <Show when=move || is_owner fallback=|| ()>
                <div class="owner-controls">
                    <button on:click=move |_| set_editing.update(|v| *v = !*v)>
                        {move || if editing.get() { "Cancel" } else { "Edit" }}
                    </button>
                    <button
                        class="danger"
                        prop:disabled=move || in_flight.get()
                        on:click=move |_| delete.dispatch(())
                    >
                        "Delete"
                    </button>
                </div>
            </Show>

            {move || editing.get().then(|| view! {
                <HabitForm
                    action=update
                    initial=habit_for_form.clone()
                    error=error
                    disabled=in_flight
                />
            })}
        </div>
    }
}
