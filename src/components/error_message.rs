use leptos::prelude::*;

/// Single inline error line, rendered only when there is a message
#[component]
pub fn ErrorMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|msg| view! { <p class="error-message">{msg}</p> })
}
