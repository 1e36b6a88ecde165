use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use leptos::{
    component, create_local_resource, create_signal, view, CollectView, IntoView, Show, SignalGet,
    SignalUpdate, Transition,
};
use shared::model::{FeedEvent, FeedEventType};

use crate::api::{fetch_feed, fetch_friend_invite, fetch_friends};

const PAGE_SIZE: usize = 20;

fn event_text(event: &FeedEvent) -> String {
    let name = event
        .actor
        .as_ref()
        .map(|a| a.display_name())
        .unwrap_or_else(|| "A friend".to_string());
    let habit = event
        .habit
        .as_ref()
        .map(|h| format!(" \u{201c}{}\u{201d}", h.name))
        .unwrap_or_default();

    use FeedEventType::*;
    match event.event_type {
        Invited => format!("{name} invited you to the habit{habit}"),
        Joined => format!("{name} joined your habit{habit}"),
        Declined => format!("{name} declined your habit{habit}"),
        Left => format!("{name} left your habit{habit}"),
        Completed => format!("{name} completed the habit{habit}"),
        Removed => format!("{name} removed you from the habit{habit}"),
        Achievement => {
            let title = event
                .achievement
                .as_ref()
                .map(|a| a.kind.title())
                .unwrap_or("a new achievement");
            format!("{name} earned the achievement \u{201c}{title}\u{201d}")
        }
        Unknown => format!("{name}: new activity{habit}"),
    }
}

#[component]
pub fn Feed() -> impl IntoView {
    let feed = create_local_resource(|| (), |_| fetch_feed());
    let friends = create_local_resource(|| (), |_| fetch_friends());
    let invite = create_local_resource(|| (), |_| fetch_friend_invite());

    let has_friends = move || {
        friends
            .get()
            .and_then(|r| r.ok())
            .is_some_and(|f| !f.is_empty())
    };

    view! {
        <div class="feed">
            <header class="feed-header">
                <h1>"Feed"</h1>
                <p class="feed-subtitle">"Your friends' progress and activity"</p>
            </header>

            <Show when=move || !has_friends() fallback=|| ()>
                <div class="invite-card">
                    <p>"Share this link to invite a friend:"</p>
                    {move || invite.get().map(|result| match result {
                        Ok(invite) => view! {
                            <a href=invite.referral_url.clone()>{invite.referral_url}</a>
                        }
                        .into_view(),
                        Err(err) => {
                            view! { <p class="error">{format!("{err:?}")}</p> }.into_view()
                        }
                    })}
                </div>
            </Show>

            <Transition fallback=move || view! { <p>"Loading..."</p> }>
                {move || feed.get().map(|result| match result {
                    Ok(events) if events.is_empty() => view! {
                        <p>"No activity yet. Add friends and build habits together."</p>
                    }
                    .into_view(),
                    Ok(events) => view! { <FeedList events/> }.into_view(),
                    Err(err) => view! { <p class="error">{format!("{err:?}")}</p> }.into_view(),
                })}
            </Transition>
        </div>
    }
}

#[component]
fn FeedList(events: Vec<FeedEvent>) -> impl IntoView {
    let mut events = events;
    // Newest first; local pagination over the server-capped window
    events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let total = events.len();
    let page_count = total.div_ceil(PAGE_SIZE);

    let (page, set_page) = create_signal(0usize);

    let page_view = move || {
        let start = page.get() * PAGE_SIZE;
        let page_items = events.iter().skip(start).take(PAGE_SIZE);

        let mut by_day: BTreeMap<NaiveDate, Vec<&FeedEvent>> = BTreeMap::new();
        for event in page_items {
            by_day
                .entry(event.created_at.with_timezone(&Local).date_naive())
                .or_default()
                .push(event);
        }

        by_day
            .iter()
            .rev()
            .map(|(date, day_events)| {
                let rows = day_events
                    .iter()
                    .map(|event| {
                        let avatar = event
                            .actor
                            .as_ref()
                            .map(|a| a.avatar_emoji.clone())
                            .unwrap_or_else(|| "👤".to_string());
                        let time = event
                            .created_at
                            .with_timezone(&Local)
                            .format("%H:%M")
                            .to_string();
                        view! {
                            <li class="feed-item">
                                <span class="feed-item-avatar">{avatar}</span>
                                <span class="feed-item-text">{event_text(event)}</span>
                                <span class="feed-item-time">{time}</span>
                            </li>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="feed-group">
                        <div class="feed-group-date">{date.format("%d.%m.%Y").to_string()}</div>
                        <ul>{rows}</ul>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="feed-list">
            {page_view}
            <Show when=move || (page_count > 1) fallback=|| ()>
                <div class="feed-pagination">
                    <button
                        prop:disabled=move || page.get() == 0
                        on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1))
                    >
                        "< Newer"
                    </button>
                    <span>{move || format!("{} / {}", page.get() + 1, page_count)}</span>
                    <button
                        prop:disabled=move || page.get() + 1 >= page_count
                        on:click=move |_| set_page.update(|p| {
                            if *p + 1 < page_count {
                                *p += 1;
                            }
                        })
                    >
                        "Older >"
                    </button>
                </div>
            </Show>
        </div>
    }
}
