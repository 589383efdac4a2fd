use leptos::prelude::*;
use leptos_router::components::A;
use pinboard_core::{Pin, Route};

use crate::components::LikeButton;
use crate::context::use_services;

#[component]
pub fn PinCard(pin: Pin) -> impl IntoView {
    let services = use_services();
    let image = services.config.image_url(&pin);
    let Pin { pin_id, title, board_name, .. } = pin;
    let alt = title.clone();

    view! {
        <div class="pin-card">
            {image.map(|src| view! { <img src=src alt=alt width="100%" /> })}
            <h4>
                <A href=Route::PinDetail(pin_id).path()>{title}</A>
            </h4>
            {board_name.map(|name| view! { <p class="pin-board">{name}</p> })}
            <LikeButton pin_id=pin_id />
        </div>
    }
}
