use leptos::prelude::*;
use leptos_router::components::A;
use pinboard_core::{Board, Route};

#[component]
pub fn BoardCard(board: Board) -> impl IntoView {
    let Board { board_id, name, description } = board;
    let href = Route::BoardPins(board_id).path();

    view! {
        <li class="board-card">
            <A href=href>{name}</A>
            {(!description.is_empty())
                .then(|| view! { <span class="board-description">{description}</span> })}
        </li>
    }
}
