use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use pinboard_core::search_path;

/// Query box; submitting navigates to the results page
#[component]
pub fn SearchBar() -> impl IntoView {
    let navigate = use_navigate();
    let (query, set_query) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        navigate(&search_path(&query.get()), Default::default());
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                type="search"
                placeholder="search pins…"
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <button type="submit">"Go"</button>
        </form>
    }
}
