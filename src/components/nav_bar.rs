//! Navigation Bar Component
//!
//! Shown only with a session: page links, search, logout.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use pinboard_core::{Route, AFTER_LOGOUT};

use crate::components::SearchBar;
use crate::context::use_session;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let username = move || {
        session
            .identity()
            .and_then(|identity| identity.username().map(str::to_string))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session.logout();
        navigate(AFTER_LOGOUT, Default::default());
    };

    view! {
        <nav class="nav-bar">
            <A href=Route::Home.path()>"Feed"</A>
            <A href=Route::Boards.path()>"Boards"</A>
            <SearchBar />
            <span class="nav-user">{username}</span>
            <button class="logout-btn" on:click=on_logout>"Log out"</button>
        </nav>
    }
}
