//! Route Guard Component

use leptos::prelude::*;
use leptos_router::components::Redirect;
use pinboard_core::{guard, Access, Guard};

use crate::context::use_session;

/// Renders `children` only when the session satisfies `access`, otherwise redirects.
///
/// Checked synchronously on every render; the server is never asked.
#[component]
pub fn Guarded(access: Access, children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    move || match guard(access, session.is_authenticated()) {
        Guard::Render => children().into_any(),
        Guard::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
    }
}
