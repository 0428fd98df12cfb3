//! Collapsible side navigation with outside-click dismissal.

use crate::shared::dom::DocumentListener;
use crate::shared::icons::icon;
use leptos::html;
use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen::JsCast;

/// Fixed navigation destinations: (path, label, icon).
const DESTINATIONS: [(&str, &str, &str); 4] = [
    ("/applications", "Applications", "grid"),
    ("/technical-templates", "Technical templates", "file-text"),
    ("/business-demo-templates", "Business demo templates", "briefcase"),
    ("/services-catalog", "Services catalog", "layers"),
];

/// Whether a document-level pointer event should collapse the navigation.
///
/// Only an expanded, closeable menu reacts, and only to interactions that
/// originated outside its own subtree.
fn should_collapse(expanded: bool, can_close: bool, inside_nav: bool) -> bool {
    expanded && can_close && !inside_nav
}

/// Collapsible side navigation menu.
///
/// Expansion is fully controlled by the `expanded` signal; the component
/// never opens itself. When `on_close` is provided, a `mousedown` anywhere
/// outside the `<nav>` subtree while expanded invokes it once. Without
/// `on_close` the component is a read-only view and the document listener is
/// an inert guard.
#[component]
pub fn SideNav(
    #[prop(into)] expanded: Signal<bool>,
    #[prop(optional, into)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    let nav_ref = NodeRef::<html::Nav>::new();

    // One document-level listener per mount. The handler reads current state
    // through signals at event time, so it never goes stale and never needs
    // re-registration. The returned guard is owned by the effect; dropping it
    // (on unmount) removes the listener.
    Effect::new(move |_| {
        DocumentListener::attach("mousedown", move |ev: web_sys::MouseEvent| {
            let inside_nav = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
                .is_some_and(|target| {
                    nav_ref
                        .get_untracked()
                        .is_some_and(|nav| nav.contains(Some(&target)))
                });

            if should_collapse(expanded.get_untracked(), on_close.is_some(), inside_nav) {
                if let Some(on_close) = on_close {
                    on_close.run(());
                }
            }
        })
    });

    view! {
        <nav
            node_ref=nav_ref
            class="side-nav"
            class:side-nav--expanded=move || expanded.get()
            aria-label="Side navigation"
        >
            <ul class="side-nav__items">
                {DESTINATIONS
                    .into_iter()
                    .map(|(path, label, icon_name)| {
                        view! {
                            <li class="side-nav__item">
                                <A href=path>
                                    {icon(icon_name)}
                                    <span>{label}</span>
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_click_collapses_when_expanded() {
        assert!(should_collapse(true, true, false));
    }

    #[test]
    fn inside_click_is_ignored() {
        assert!(!should_collapse(true, true, true));
    }

    #[test]
    fn collapsed_menu_ignores_everything() {
        assert!(!should_collapse(false, true, false));
        assert!(!should_collapse(false, true, true));
    }

    #[test]
    fn without_close_capability_nothing_happens() {
        assert!(!should_collapse(true, false, false));
        assert!(!should_collapse(true, false, true));
        assert!(!should_collapse(false, false, false));
    }
}
