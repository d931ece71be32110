use crate::pages::DashboardPage;
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext(AppState::new()));

    // The bot hands out both `/?u=<id>` and `/dashboard?u=<id>` links.
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                <Route path=path!("dashboard") view=DashboardPage />
                <Route path=path!("") view=DashboardPage />
            </Routes>
        </Router>
    }
}
