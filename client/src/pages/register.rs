//! Registration page posting to `POST /auth/register`.
//!
//! Registration never signs the visitor in; on success the page sends them
//! to sign-in with a confirmation flag.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterRequest;
use crate::state::session_handle::use_session;

/// Sign-in path that shows the "registration complete" notice.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const REGISTERED_REDIRECT: &str = "/login?registered=1";

/// Raw form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub(crate) fn validate_registration(form: &RegistrationForm) -> Result<RegisterRequest, &'static str> {
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    let email = form.email.trim();
    if first_name.is_empty() || last_name.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err("All fields are required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match");
    }
    Ok(RegisterRequest {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let form = RwSignal::new(RegistrationForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match form.with(validate_registration) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&request, session.token().as_deref()).await {
                    Ok(_) => navigate(REGISTERED_REDIRECT, NavigateOptions::default()),
                    Err(e) => {
                        log::info!("registration rejected: {e}");
                        let _ = error.try_set(Some(e.to_string()));
                    }
                }
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, session, &navigate);
    };

    let field = move |label: &'static str,
                      id: &'static str,
                      kind: &'static str,
                      get: fn(&RegistrationForm) -> String,
                      set: fn(&mut RegistrationForm, String)| {
        view! {
            <label class="auth-form__label" for=id>{label}</label>
            <input
                id=id
                class="auth-input"
                type=kind
                required=true
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        }
    };

    view! {
        <div class="auth-card">
            <h1>"Register"</h1>
            <form class="auth-form" on:submit=on_submit>
                {field("First Name", "first-name", "text", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                {field("Last Name", "last-name", "text", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                {field("Email", "email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                {field("Password", "password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                {field(
                    "Confirm Password",
                    "confirm-password",
                    "password",
                    |f| f.confirm_password.clone(),
                    |f, v| f.confirm_password = v,
                )}
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary btn--full" type="submit" disabled=move || busy.get()>
                    "Register"
                </button>
            </form>
            <p class="auth-card__links">
                "Already have an account? "
                <a href="/login">"Login"</a>
            </p>
        </div>
    }
}
