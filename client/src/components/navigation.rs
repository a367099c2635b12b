//! Sidebar navigation entries and active-route highlighting.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// One sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    /// Short glyph shown when the sidebar is collapsed.
    pub glyph: &'static str,
    /// Unread badge count, if the section shows one.
    pub count: Option<u32>,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", path: "/", glyph: "D", count: None },
    NavItem { label: "Branches", path: "/branches", glyph: "B", count: None },
    NavItem { label: "Users", path: "/users", glyph: "U", count: None },
    NavItem { label: "Reports", path: "/reports", glyph: "R", count: None },
    NavItem { label: "Notifications", path: "/notifications", glyph: "N", count: Some(24) },
    NavItem { label: "Chat", path: "/chats", glyph: "C", count: Some(8) },
    NavItem { label: "Settings", path: "/settings", glyph: "S", count: None },
];

/// Exact path match, ignoring a trailing slash on non-root paths.
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    let normalize = |p: &str| {
        let trimmed = p.trim_end_matches('/');
        if trimmed.is_empty() { "/".to_owned() } else { trimmed.to_owned() }
    };
    normalize(item_path) == normalize(current_path)
}

/// Label for the navigation item owning `path`, if any.
pub fn label_for_path(path: &str) -> Option<&'static str> {
    NAV_ITEMS.iter().find(|item| is_active(item.path, path)).map(|item| item.label)
}

/// Vertical list of navigation links.
#[component]
pub fn Navigation(expanded: Signal<bool>) -> impl IntoView {
    let location = use_location();

    view! {
        <ul class="nav-list">
            {NAV_ITEMS
                .iter()
                .map(|item| {
                    let item = *item;
                    let active = move || location.pathname.with(|p| is_active(item.path, p));
                    view! {
                        <li>
                            <a
                                href=item.path
                                class="nav-item"
                                class:nav-item--active=active
                                title=item.label
                            >
                                <span class="nav-item__glyph">{item.glyph}</span>
                                <Show when=move || expanded.get()>
                                    <span class="nav-item__label">{item.label}</span>
                                </Show>
                                {item.count.map(|count| view! { <span class="nav-item__count">{count}</span> })}
                            </a>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}
