//! Root application component with routing and the session context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates the page's single [`SessionHandle`] and provides it to every
//! route. The persisted session is read in an effect, which only runs in the
//! browser after hydration: SSR and the first client render both show the
//! loading branch, and no gate decides a route before `initialize` finishes.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::pages::dashboard::{DashboardPage, SectionPage};
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::state::session_handle::SessionHandle;
use crate::util::route_gate::{DEFAULT_PROTECTED_PATH, ProtectedRoute, PublicOnlyRoute};
use crate::util::session_store::BrowserStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionHandle::new(BrowserStore);
    provide_context(session);
    Effect::new(move || session.initialize());

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-console.css"/>
        <Title text="Admin Console"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=DEFAULT_PROTECTED_PATH/> }>
                <ParentRoute path=StaticSegment("") view=PublicOnlyRoute>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("") view=ProtectedRoute>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("branches") view=|| view! { <SectionPage path="/branches"/> }/>
                    <Route path=StaticSegment("users") view=|| view! { <SectionPage path="/users"/> }/>
                    <Route path=StaticSegment("reports") view=|| view! { <SectionPage path="/reports"/> }/>
                    <Route path=StaticSegment("notifications") view=|| view! { <SectionPage path="/notifications"/> }/>
                    <Route path=StaticSegment("chats") view=|| view! { <SectionPage path="/chats"/> }/>
                    <Route path=StaticSegment("settings") view=|| view! { <SectionPage path="/settings"/> }/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
