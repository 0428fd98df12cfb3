//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Menu toggle button for the side navigation
//! - Branded application title
//! - Global icon actions (help, notifications, user)
//! - Theme cycle button

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::use_theme;
use leptos::prelude::*;

/// TopHeader component - main application top bar.
///
/// Uses AppGlobalContext for navigation visibility control. The menu button
/// stops propagation of its own pointer event so the document-level
/// outside-click handler never sees the same interaction; without that, a
/// toggle-open would be immediately undone by the outside-close.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let theme = use_theme();

    let is_nav_visible = move || ctx.nav_open.get();

    view! {
        <header class="top-header">
            // Left section - menu toggle and brand
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn top-header__menu-btn"
                    class:top-header__menu-btn--active=is_nav_visible
                    on:mousedown=move |ev| ev.stop_propagation()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.toggle_nav();
                    }
                    title=move || if is_nav_visible() { "Close menu" } else { "Open menu" }
                >
                    {icon("menu")}
                </button>

                <span class="top-header__prefix">"Atlas"</span>
                <span class="top-header__title">"Operations Platform"</span>
            </div>

            // Right section - global actions
            <div class="top-header__actions">
                <button class="top-header__icon-btn" title="Help">
                    {icon("help-circle")}
                </button>

                <button class="top-header__icon-btn" title="Notifications">
                    {icon("bell")}
                </button>

                // Theme cycle
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| theme.cycle_theme()
                    title="Switch theme"
                >
                    {icon("palette")}
                </button>

                <button class="top-header__icon-btn" title="User">
                    {icon("user")}
                </button>
            </div>
        </header>
    }
}
