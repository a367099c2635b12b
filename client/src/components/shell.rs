//! Authenticated console frame: sidebar plus the nested protected screen.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::sidebar::Sidebar;

#[component]
pub fn ConsoleShell() -> impl IntoView {
    let expanded = RwSignal::new(false);

    view! {
        <div class="console-shell">
            <Sidebar expanded=expanded/>
            <main class="console-shell__main">
                <Outlet/>
            </main>
        </div>
    }
}
