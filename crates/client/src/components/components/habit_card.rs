use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};
use leptos::{component, view, CollectView, IntoView};
use leptos_router::A;
use shared::{
    calendar::{current_week, FirstDayOfWeek},
    model::Habit,
};

/// List-view card with the current-week completion strip. The strip always
/// starts on Monday; only the full calendar follows the profile preference.
#[component]
pub fn HabitCard(habit: Habit) -> impl IntoView {
    let color = habit.color.css_hex();
    let week = current_week(Local::now().date_naive(), FirstDayOfWeek::Monday);
    let completed: BTreeSet<NaiveDate> = habit.current_week_completions.iter().copied().collect();
    let participant_count = habit.participants.len();

    view! {
        <A class="habit-card" href=format!("/habits/{}", habit.id)>
            <div class="habit-card-header" style=format!("border-color: {color}")>
                <h3>{habit.name.clone()}</h3>
                {habit.is_shared.then(|| view! {
                    <span class="shared-badge">{format!("{participant_count} participants")}</span>
                })}
            </div>
            {habit.description.clone().map(|d| view! { <p class="habit-description">{d}</p> })}
            <div class="habit-week-strip">
                {week.iter().map(|date| {
                    let done = completed.contains(date);
                    view! { <span class="day-square" class:completed=done></span> }
                }).collect_view()}
            </div>
            {habit.current_streak.map(|streak| view! {
                <p class="habit-streak">{format!("{streak} day streak")}</p>
            })}
        </A>
    }
}
