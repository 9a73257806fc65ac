//! Route guard for pages that need a signed-in user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Shows "Loading…" until the session resolves, then either the children or
/// a redirect to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.with(|a| a.user.is_some())
            fallback=|| view! { <p class="page-loading">"Loading…"</p> }
        >
            {children()}
        </Show>
    }
}
