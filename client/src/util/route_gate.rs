//! Session-driven route gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected screens sit under [`ProtectedRoute`]; sign-in, registration and
//! password screens sit under [`PublicOnlyRoute`]. Both are pure functions of
//! the current session snapshot and re-run on every session change, not only
//! on navigation.
//!
//! A forced redirect to sign-in drops the requested destination; after
//! signing in the visitor lands on [`DEFAULT_PROTECTED_PATH`].

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use crate::components::shell::ConsoleShell;
use crate::components::spinner::Spinner;
use crate::state::session::{Session, SessionStatus};
use crate::state::session_handle::{SessionHandle, use_session};

/// Where unauthenticated visitors are sent.
pub const SIGN_IN_PATH: &str = "/login";
/// Where authenticated visitors are sent away from public-only screens.
pub const DEFAULT_PROTECTED_PATH: &str = "/";

/// What a gate renders for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Persisted state not read yet; no routing decision is made.
    Loading,
    /// Navigate elsewhere.
    Redirect(&'static str),
    /// Render the gated content.
    Render,
}

pub fn protected_decision(session: &Session) -> GateDecision {
    match session.status() {
        SessionStatus::Uninitialized => GateDecision::Loading,
        SessionStatus::Unauthenticated => GateDecision::Redirect(SIGN_IN_PATH),
        SessionStatus::Authenticated => GateDecision::Render,
    }
}

pub fn public_only_decision(session: &Session) -> GateDecision {
    match session.status() {
        SessionStatus::Uninitialized => GateDecision::Loading,
        SessionStatus::Authenticated => GateDecision::Redirect(DEFAULT_PROTECTED_PATH),
        SessionStatus::Unauthenticated => GateDecision::Render,
    }
}

/// Decision for `session`, recomputed on every session change.
///
/// Memoized so a transition that keeps the same decision does not rebuild the
/// gated view.
pub(crate) fn gate_decision(session: SessionHandle, decide: fn(&Session) -> GateDecision) -> Memo<GateDecision> {
    Memo::new(move |_| session.with(decide))
}

/// Layout route for screens that require a signed-in visitor.
#[component]
pub fn ProtectedRoute() -> impl IntoView {
    let decision = gate_decision(use_session(), protected_decision);
    move || match decision.get() {
        GateDecision::Loading => view! { <Spinner/> }.into_any(),
        GateDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        GateDecision::Render => view! { <ConsoleShell/> }.into_any(),
    }
}

/// Layout route for screens only signed-out visitors should see.
#[component]
pub fn PublicOnlyRoute() -> impl IntoView {
    let decision = gate_decision(use_session(), public_only_decision);
    move || match decision.get() {
        GateDecision::Loading => view! { <Spinner/> }.into_any(),
        GateDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        GateDecision::Render => view! {
            <div class="public-page">
                <Outlet/>
            </div>
        }
        .into_any(),
    }
}
