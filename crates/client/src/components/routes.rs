use leptos::{component, view, IntoView};
use leptos_router::{Route, Routes, A};

use crate::components::pages::{
    Achievements, Feed, Friends, HabitDetail, Habits, Home, Profile, YearlyReport,
};

macro_rules! routes {
    ($(($path:literal, $view:ident, $ui_text:literal, $in_nav:literal),)+) => {
        #[component]
        pub fn AppNav() -> impl IntoView {
            view! {
                <ul class="nav full-width">
                $(
                    {$in_nav.then(|| view! {
                        <li>
                            <A href=$path>$ui_text</A>
                        </li>
                    })}
                )+
                    <li id="right">
                        <small>{
                            format!("Version: {}{}",
                                env!("CARGO_PKG_VERSION"),
                                option_env!("BUILD_TIME")
                                    .map(|v| format!(" - {v}"))
                                    .unwrap_or("".to_string()))
                        }</small>
                    </li>
                </ul>
            }
        }

        #[derive(Debug, Clone, Copy)]
        pub enum ClientRoutes {
            $(
                $view,
            )+
        }

        impl ClientRoutes {
            #[allow(dead_code)]
            pub fn path(self) -> &'static str {
                match self {
                    $(
                        Self::$view => $path,
                    )+
                }
            }

            #[allow(dead_code)]
            pub fn ui_text(self) -> &'static str {
                match self {
                    $(
                        Self::$view => $ui_text,
                    )+
                }
            }
        }

        #[component(transparent)]
        pub fn AppRoutes() -> impl IntoView {
            view! {
                <Routes>
                $(
                    <Route
                        path=$path
                        view=$view
                    />
                )+
                </Routes>
            }
        }
    };
}

routes!(
    ("/", Home, "Home", true),
    ("/habits", Habits, "Habits", true),
    ("/habits/:id", HabitDetail, "Habit", false),
    ("/feed", Feed, "Feed", true),
    ("/friends", Friends, "Friends", true),
    ("/profile", Profile, "Profile", true),
    ("/achievements", Achievements, "Achievements", false),
    ("/report", YearlyReport, "Yearly report", false),
);
