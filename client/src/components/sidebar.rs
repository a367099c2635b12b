//! Collapsible sidebar: brand toggle, navigation, and the signed-in user box.
//!
//! ARCHITECTURE
//! ============
//! The collapse flag is local to the shell; user identity comes from the
//! session handle so the avatar box disappears the moment a logout lands.

use leptos::prelude::*;

use crate::components::navigation::Navigation;
use crate::state::session_handle::use_session;

#[component]
pub fn Sidebar(expanded: RwSignal<bool>) -> impl IntoView {
    view! {
        <aside class="sidebar" class:sidebar--expanded=move || expanded.get()>
            <div class="sidebar__top">
                <button
                    class="sidebar__brand"
                    title="Toggle sidebar"
                    on:click=move |_| expanded.update(|open| *open = !*open)
                >
                    <span class="sidebar__logo">"AC"</span>
                    <Show when=move || expanded.get()>
                        <span class="sidebar__title">"Admin Console"</span>
                    </Show>
                </button>
                <Navigation expanded=expanded.into()/>
            </div>
            <AvatarBox expanded=expanded.into()/>
        </aside>
    }
}

/// Current user's initials, name and email with a logout action.
#[component]
fn AvatarBox(expanded: Signal<bool>) -> impl IntoView {
    let session = use_session();
    let on_logout = move |_| session.logout();

    move || {
        session.current_user().map(|user| {
            let initials = user.initials();
            let name = user.full_name();
            let email = user.email.clone();
            let role = user.role.label();
            view! {
                <div class="avatar-box">
                    <span class="avatar-box__badge" title=name.clone()>{initials}</span>
                    <Show when=move || expanded.get()>
                        <div class="avatar-box__identity">
                            <strong>{name.clone()}</strong>
                            <small>{email.clone()}</small>
                            <small class="avatar-box__role">{role}</small>
                        </div>
                    </Show>
                    <button class="btn btn--danger btn--small" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            }
        })
    }
}
