use leptos::{component, view, CollectView, ErrorBoundary, IntoView, SignalWith};
use leptos_router::Router;

use crate::components::{AppNav, AppRoutes};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <div style="color:red">
                <p>Error:</p>
                <ul>
                { move || errors.with(|v|
                    v.iter()
                    .map(|(_, e)| view! { <li> { format!("{:?}", e) } </li>})
                    .collect_view())
                }
                </ul>
            </div>
        }>
            <Router>
                <main class="app-main">
                    <AppRoutes/>
                </main>
                <AppNav/>
            </Router>
        </ErrorBoundary>
    }
}
