//! Full-height loading indicator shown while the session is being restored.

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-page" role="status" aria-live="polite">
            <div class="spinner"></div>
            <span class="visually-hidden">"Loading..."</span>
        </div>
    }
}
