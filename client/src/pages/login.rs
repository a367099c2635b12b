//! Sign-in page: email + password against `POST /auth/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page performs the network call and hands the validated response to
//! the session handle. If the page unmounts mid-request the session still
//! commits when the response lands; page-local signals are only touched with
//! `try_set` so a disposed view is never updated.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::types::LoginRequest;
use crate::state::session_handle::use_session;

/// Trim the email and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Whether the `registered` query flag asks for the post-registration notice.
pub(crate) fn shows_registered_notice(flag: Option<&str>) -> bool {
    matches!(flag, Some("1" | "true"))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let query = use_query_map();
    let registered = move || query.with(|q| shows_registered_notice(q.get("registered").as_deref()));

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&request, session.token().as_deref()).await {
                // The public-only gate redirects as soon as the session flips.
                Ok(response) => {
                    if let Err(e) = session.login(response) {
                        log::warn!("sign-in not fully committed: {e}");
                    }
                }
                Err(e) => {
                    log::info!("login rejected: {e}");
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, session);
    };

    view! {
        <div class="auth-card">
            <h1>"Login"</h1>
            <Show when=registered>
                <p class="auth-message auth-message--success">"Registration successful! You can now log in."</p>
            </Show>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label" for="email">"Email"</label>
                <input
                    id="email"
                    class="auth-input"
                    type="email"
                    required=true
                    placeholder="Enter your email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label class="auth-form__label" for="password">"Password"</label>
                <input
                    id="password"
                    class="auth-input"
                    type="password"
                    required=true
                    placeholder="Enter your password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary btn--full" type="submit" disabled=move || busy.get()>
                    "Login"
                </button>
            </form>
            <p class="auth-card__links">
                "Don't have an account? "
                <a href="/register">"Register"</a>
                " · "
                <a href="/forgot-password">"Forgot password?"</a>
            </p>
        </div>
    }
}
