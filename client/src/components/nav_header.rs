//! Top navigation with session greeting and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::LOGIN_PATH;
use crate::state::auth::AuthState;
use crate::util::session;

#[component]
pub fn NavHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session::logout(auth);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="nav-header">
            <a href="/" class="nav-header__brand">"Meal Planner"</a>
            <nav class="nav-header__links">
                <a href="/">"Recipes"</a>
                <a href="/calendar">"Calendar"</a>
                <a href="/plans">"Plans"</a>
                <a href="/shopping">"Shopping"</a>
            </nav>
            <span class="nav-header__spacer"></span>
            <Show
                when=move || auth.with(|a| a.user.is_some())
                fallback=|| {
                    view! {
                        <a href="/login" class="nav-header__auth">"Login"</a>
                        <a href="/signup" class="nav-header__auth">"Signup"</a>
                    }
                }
            >
                <span class="nav-header__greeting">
                    {move || auth.with(AuthState::greeting).unwrap_or_default()}
                </span>
                <button class="btn nav-header__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
