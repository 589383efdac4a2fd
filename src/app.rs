//! Pinboard App
//!
//! One shell for every visitor: routes are guarded by the in-memory session,
//! and `/` shows the feed or the configured guest page.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pinboard_core::{home_view, Access, AnonymousHome, ClientConfig, HomeView, Route as Page};

use crate::components::{Guarded, LoginForm, NavBar, SignupForm};
use crate::context::{use_session, Services, SessionContext};
use crate::pages::{BoardPinsPage, BoardsPage, FeedPage, PinDetailPage, SearchResultsPage};

/// Configuration baked in at compile time
fn build_config() -> ClientConfig {
    let lookup = |key: &str| {
        let value = match key {
            "PINBOARD_API_BASE" => option_env!("PINBOARD_API_BASE"),
            "PINBOARD_ASSET_BASE" => option_env!("PINBOARD_ASSET_BASE"),
            "PINBOARD_DISCARD_STALE" => option_env!("PINBOARD_DISCARD_STALE"),
            "PINBOARD_SURFACE_READ_ERRORS" => option_env!("PINBOARD_SURFACE_READ_ERRORS"),
            "PINBOARD_ROLLBACK_TOGGLES" => option_env!("PINBOARD_ROLLBACK_TOGGLES"),
            "PINBOARD_ANONYMOUS_HOME" => option_env!("PINBOARD_ANONYMOUS_HOME"),
            _ => None,
        };
        value.map(str::to_string)
    };

    ClientConfig::from_lookup(lookup).unwrap_or_else(|err| {
        log::error!("{}; falling back to default configuration", err);
        ClientConfig::default()
    })
}

/// What `/` renders for the current session
#[component]
fn Home(anonymous_home: AnonymousHome) -> impl IntoView {
    let session = use_session();

    move || match home_view(session.is_authenticated(), anonymous_home) {
        HomeView::Feed => view! { <FeedPage /> }.into_any(),
        HomeView::Login => view! { <LoginForm /> }.into_any(),
        HomeView::Boards => view! { <BoardsPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let services = Services::new(build_config());
    let anonymous_home = services.config.anonymous_home;
    let session = SessionContext::new();

    // Provide context to all children
    provide_context(session);
    provide_context(services);

    view! {
        <Router>
            <Show when=move || session.is_authenticated()>
                <NavBar />
            </Show>

            <main class="main-content">
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=move || view! { <Home anonymous_home=anonymous_home /> } />
                    <Route
                        path=path!("/login")
                        view=|| view! { <Guarded access=Page::Login.access()><LoginForm /></Guarded> }
                    />
                    <Route
                        path=path!("/signup")
                        view=|| view! { <Guarded access=Page::Signup.access()><SignupForm /></Guarded> }
                    />
                    <Route
                        path=path!("/boards")
                        view=|| view! { <Guarded access=Page::Boards.access()><BoardsPage /></Guarded> }
                    />
                    <Route
                        path=path!("/boards/:bid")
                        view=|| view! { <Guarded access=Access::Protected><BoardPinsPage /></Guarded> }
                    />
                    <Route
                        path=path!("/pins/:pid")
                        view=|| view! { <Guarded access=Access::Protected><PinDetailPage /></Guarded> }
                    />
                    <Route
                        path=path!("/search")
                        view=|| view! { <Guarded access=Page::Search.access()><SearchResultsPage /></Guarded> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
