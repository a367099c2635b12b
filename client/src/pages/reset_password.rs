//! Password reset page reached from the emailed `?token=` link.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::types::ResetPasswordRequest;
use crate::state::session_handle::use_session;

pub(crate) fn validate_reset_password(
    token: Option<&str>,
    new_password: &str,
) -> Result<ResetPasswordRequest, &'static str> {
    let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
        return Err("This reset link is missing its token.");
    };
    if new_password.is_empty() {
        return Err("Enter a new password.");
    }
    Ok(ResetPasswordRequest { token: token.to_owned(), new_password: new_password.to_owned() })
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let session = use_session();
    let query = use_query_map();
    let new_password = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<(bool, String)>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let reset_token = query.with(|q| q.get("token"));
        let request = match validate_reset_password(reset_token.as_deref(), &new_password.get()) {
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
            let outcome = match crate::net::api::reset_password(&request, session.token().as_deref()).await {
                Ok(_) => {
                    let _ = new_password.try_set(String::new());
                    (true, "Password updated successfully".to_owned())
                }
                Err(e) => {
                    log::info!("reset-password rejected: {e}");
                    (false, format!("Failed to reset password: {e}"))
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
            <h1>"Reset Password"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label" for="new-password">"New Password"</label>
                <input
                    id="new-password"
                    class="auth-input"
                    type="password"
                    required=true
                    prop:value=move || new_password.get()
                    on:input=move |ev| new_password.set(event_target_value(&ev))
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
                    "Reset Password"
                </button>
            </form>
            <p class="auth-card__links">
                <a href="/login">"Back to login"</a>
            </p>
        </div>
    }
}
