use chrono::{Datelike, Local, NaiveDate};
use leptos::{
    component, create_local_resource, create_signal, event_target_value, view, CollectView,
    IntoView, SignalGet, SignalUpdate, Transition,
};
use leptos_router::A;
use shared::{
    calendar::project_year,
    types::Uuid,
};

use crate::{
    api::{fetch_habits, fetch_profile, fetch_yearly_report},
    components::components::CalendarGrid,
};

#[component]
pub fn YearlyReport() -> impl IntoView {
    let profile = create_local_resource(|| (), |_| fetch_profile());
    let habits = create_local_resource(|| (), |_| fetch_habits());

    let (year, set_year) = create_signal(Local::now().year());
    // None means all habits combined
    let (habit_id, set_habit_id) = create_signal(None::<Uuid>);

    let report = create_local_resource(
        move || (year.get(), habit_id.get()),
        |(year, habit_id)| async move { fetch_yearly_report(year, habit_id.as_ref()).await },
    );

    let habit_select = move || {
        habits.get().and_then(|r| r.ok()).map(|habits| {
            if habits.is_empty() {
                return view! {
                    <div class="yearly-empty">
                        <p>"No habits yet. Create your first one!"</p>
                        <A href="/habits">"Go to habits"</A>
                    </div>
                }
                .into_view();
            }
            let options = habits
                .into_iter()
                .map(|habit| {
                    let id = habit.id;
                    view! {
                        <option
                            value=id.to_string()
                            selected=move || habit_id.get() == Some(id)
                        >
                            {habit.name.clone()}
                        </option>
                    }
                })
                .collect_view();
            view! {
                <label>
                    "Habit"
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let selected = Uuid::parse(&value).ok();
                        set_habit_id.update(|id| *id = selected);
                    }>
                        <option value="all" selected=move || habit_id.get().is_none()>
                            "All habits"
                        </option>
                        {options}
                    </select>
                </label>
            }
            .into_view()
        })
    };

    view! {
        <div class="yearly-report">
            <A class="back-link" href="/profile">"< Back"</A>
            <h1>"Yearly report"</h1>

            <Transition fallback=move || view! { <p>"Loading..."</p> }>
                {move || report.get().map(|result| match result {
                    Ok(report) => {
                        let years = if report.years.is_empty() {
                            vec![year.get()]
                        } else {
                            report.years.clone()
                        };
                        let year_options = years
                            .into_iter()
                            .map(|y| view! {
                                <option value=y.to_string() selected=move || year.get() == y>
                                    {y.to_string()}
                                </option>
                            })
                            .collect_view();

                        let first_day = profile
                            .get()
                            .and_then(|r| r.ok())
                            .map(|u| u.first_day_of_week)
                            .unwrap_or_default();
                        let completed = report.completed_dates();
                        let today = Local::now().date_naive();
                        let months = project_year(year.get(), first_day, &completed, today)
                            .into_iter()
                            .map(|grid| {
                                let label = NaiveDate::from_ymd_opt(grid.year, grid.month, 1)
                                    .map(|d| d.format("%B").to_string())
                                    .unwrap_or_default();
                                view! {
                                    <div class="yearly-month">
                                        <div class="yearly-month-title">{label}</div>
                                        <CalendarGrid grid/>
                                    </div>
                                }
                            })
                            .collect_view();

                        view! {
                            <div class="yearly-controls">
                                <label>
                                    "Year"
                                    <select on:change=move |ev| {
                                        if let Ok(y) = event_target_value(&ev).parse::<i32>() {
                                            set_year.update(|v| *v = y);
                                        }
                                    }>
                                        {year_options}
                                    </select>
                                </label>
                                {habit_select}
                            </div>
                            <div class="yearly-calendars">{months}</div>
                        }
                        .into_view()
                    }
                    Err(err) => view! { <p class="error">{format!("{err:?}")}</p> }.into_view(),
                })}
            </Transition>
        </div>
    }
}
