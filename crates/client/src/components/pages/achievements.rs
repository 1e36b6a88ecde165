use std::collections::{BTreeMap, BTreeSet};

use leptos::{component, create_local_resource, view, CollectView, IntoView, SignalGet, Transition};
use leptos_router::A;
use shared::model::{AchievementKind, UserAchievement};

use crate::api::fetch_my_achievements;

#[component]
pub fn Achievements() -> impl IntoView {
    let achievements = create_local_resource(|| (), |_| fetch_my_achievements());

    view! {
        <div class="achievements">
            <A class="back-link" href="/profile">"< Back"</A>
            <h1>"Achievements"</h1>
            <Transition fallback=move || view! { <p>"Loading..."</p> }>
                {move || achievements.get().map(|result| match result {
                    Ok(rows) => view! { <AchievementBlocks rows/> }.into_view(),
                    Err(err) => view! { <p class="error">{format!("{err:?}")}</p> }.into_view(),
                })}
            </Transition>
        </div>
    }
}

#[component]
fn AchievementBlocks(rows: Vec<UserAchievement>) -> impl IntoView {
    let mut earned: BTreeMap<AchievementKind, BTreeSet<u8>> = BTreeMap::new();
    for row in &rows {
        earned.entry(row.kind).or_default().insert(row.tier);
    }

    AchievementKind::ALL
        .iter()
        .map(|&kind| {
            let earned_tiers = earned.get(&kind).cloned().unwrap_or_default();
            let medals = kind
                .tier_thresholds()
                .iter()
                .enumerate()
                .map(|(i, threshold)| {
                    let tier = i as u8 + 1;
                    let achieved = earned_tiers.contains(&tier);
                    view! {
                        <div
                            class=format!("medal medal-tier-{tier}")
                            class:achieved=achieved
                            class:locked=!achieved
                        >
                            <span class="medal-threshold">{threshold.to_string()}</span>
                        </div>
                    }
                })
                .collect_view();
            view! {
                <div class="achievement-block">
                    <div class="achievement-title">{kind.title()}</div>
                    <div class="achievement-medals">{medals}</div>
                </div>
            }
        })
        .collect_view()
}
