use chrono::Datelike;
use leptos::{component, view, CollectView, IntoView};
use shared::calendar::MonthGrid;

/// Renders a projected month. Display only; cells carry their status as
/// classes and shared-habit blending as an inline background.
#[component]
pub fn CalendarGrid(grid: MonthGrid) -> impl IntoView {
    let labels = grid.first_day.day_labels();

    view! {
        <div class="calendar-grid">
            <div class="calendar-row calendar-header">
                {labels.iter().map(|label| view! {
                    <span class="calendar-label">{*label}</span>
                }).collect_view()}
            </div>
            {grid.weeks.iter().map(|week| view! {
                <div class="calendar-row">
                    {week.iter().map(|cell| {
                        if !cell.in_current_month {
                            return view! { <span class="calendar-day empty"></span> }.into_view();
                        }
                        let style = cell
                            .background
                            .as_ref()
                            .map(|b| format!("background: {}", b.css()));
                        view! {
                            <span
                                class="calendar-day"
                                class:completed=cell.completed
                                class:disabled=cell.disabled
                                class:today=cell.is_today
                                style=style
                            >
                                {cell.date.day().to_string()}
                            </span>
                        }
                        .into_view()
                    }).collect_view()}
                </div>
            }).collect_view()}
        </div>
    }
}
