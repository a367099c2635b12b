//! Password-reset request page.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;

use crate::net::types::ForgotPasswordRequest;
use crate::state::session_handle::use_session;

pub(crate) fn validate_forgot_password(email: &str) -> Result<ForgotPasswordRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter the email you registered with.");
    }
    Ok(ForgotPasswordRequest { email: email.to_owned() })
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let session = use_session();
    let email = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<(bool, String)>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_forgot_password(&email.get()) {
            Ok(request) => request,
            Err(message) => {
                notice.set(Some((false, message.to_owned())));
                return;
            }
        };
        busy.set(true);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = match crate::net::api::forgot_password(&request, session.token().as_deref()).await {
                Ok(_) => (true, "Password reset email sent".to_owned()),
                Err(e) => {
                    log::info!("forgot-password rejected: {e}");
                    (false, format!("Failed to send email: {e}"))
                }
            };
            let _ = notice.try_set(Some(outcome));
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, session);
    };

    view! {
        <div class="auth-card">
            <h1>"Forgot Password"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label" for="email">"Email"</label>
                <input
                    id="email"
                    class="auth-input"
                    type="email"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                {move || {
                    notice
                        .get()
                        .map(|(ok, text)| {
                            view! {
                                <p class="auth-message" class:auth-message--error=!ok class:auth-message--success=ok>
                                    {text}
                                </p>
                            }
                        })
                }}
                <button class="btn btn--primary btn--full" type="submit" disabled=move || busy.get()>
                    "Send Reset Link"
                </button>
            </form>
            <p class="auth-card__links">
                <a href="/login">"Back to login"</a>
            </p>
        </div>
    }
}
