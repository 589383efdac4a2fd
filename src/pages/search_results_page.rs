use leptos::prelude::*;
use leptos_router::hooks::use_location;
use pinboard_core::query_from_search;

use crate::components::{ErrorMessage, PinGrid};
use crate::hooks::{collection_error, collection_items, collection_loading, use_remote_collection};

/// Results for `?q=`; an empty query loads nothing
#[component]
pub fn SearchResultsPage() -> impl IntoView {
    let location = use_location();
    let query = Memo::new(move |_| query_from_search(&location.search.get()));

    let results = use_remote_collection(
        "search",
        move || query.get(),
        |client, q: String| async move { client.search(&q).await },
    );
    let loading = collection_loading(results);

    view! {
        <div class="search-results-page">
            <h2>"Results"</h2>
            {move || query.get().map(|q| view! { <p class="search-query">"for \"" {q} "\""</p> })}
            <Show when=move || loading.get()>
                <p class="loading">"Searching..."</p>
            </Show>
            <ErrorMessage message=collection_error(results) />
            <PinGrid pins=collection_items(results) />
        </div>
    }
}
