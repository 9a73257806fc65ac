//! Account creation page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Validated signup fields.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct SignupInput {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_signup_input(&email.get(), &username.get(), &password.get()) {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::util::session::signup(auth, &input.email, &input.username, &input.password).await {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(e) => info.set(crate::util::session::failure_text("Signup failed.", &e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (auth, &navigate, input);
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign up"</h1>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Username"
                    required=true
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    required=true
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account…" } else { "Create account" }}
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-switch">"Already registered? " <a href="/login">"Login"</a></p>
            </form>
        </div>
    }
}

pub(crate) fn validate_signup_input(email: &str, username: &str, password: &str) -> Result<SignupInput, &'static str> {
    let email = email.trim();
    let username = username.trim();
    if email.is_empty() || username.is_empty() || password.is_empty() {
        return Err("All fields are required.");
    }
    Ok(SignupInput { email: email.to_owned(), username: username.to_owned(), password: password.to_owned() })
}
