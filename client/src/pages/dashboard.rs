//! Dashboard landing screen and the placeholder for record sections.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::navigation::label_for_path;
use crate::state::session::SessionUser;
use crate::state::session_handle::use_session;

pub(crate) fn greeting(user: Option<&SessionUser>) -> String {
    match user {
        Some(user) if !user.first_name.trim().is_empty() => format!("Welcome back, {}", user.first_name.trim()),
        _ => "Welcome back".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Dashboard"</h1>
            </header>
            <p class="page__lead">{move || greeting(session.current_user().as_ref())}</p>
            {move || {
                session.current_user().map(|user| {
                    view! {
                        <dl class="profile-summary">
                            <dt>"Email"</dt>
                            <dd>{user.email.clone()}</dd>
                            <dt>"Role"</dt>
                            <dd>{user.role.label()}</dd>
                        </dl>
                    }
                })
            }}
        </section>
    }
}

/// Titled placeholder for record-management sections rendered elsewhere.
#[component]
pub fn SectionPage(path: &'static str) -> impl IntoView {
    let title = label_for_path(path).unwrap_or("Section");

    view! {
        <section class="page">
            <header class="page__header">
                <h1>{title}</h1>
            </header>
        </section>
    }
}
