use leptos::prelude::*;
use pinboard_core::Pin;

use crate::components::PinCard;

/// Pins in server order
#[component]
pub fn PinGrid(#[prop(into)] pins: Signal<Vec<Pin>>) -> impl IntoView {
    view! {
        <div class="pin-grid">
            <For
                each=move || pins.get()
                key=|pin| pin.pin_id
                children=|pin| view! { <PinCard pin=pin /> }
            />
        </div>
    }
}
