use leptos::prelude::*;

/// Application-wide UI state shared through Leptos context.
///
/// `nav_open` is the single source of truth for side navigation expansion.
/// Writers go through `toggle_nav`/`close_nav` so every legal transition is
/// named: the header menu button toggles, the outside-click detector only
/// ever closes.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub nav_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            nav_open: RwSignal::new(false),
        }
    }

    /// Flip navigation visibility. Used by the header menu button.
    pub fn toggle_nav(&self) {
        self.nav_open.update(|val| *val = !*val);
        leptos::logging::log!(
            "toggle_nav: nav_open = {}",
            self.nav_open.get_untracked()
        );
    }

    /// Force the navigation closed. Never opens it.
    pub fn close_nav(&self) {
        leptos::logging::log!("close_nav: forcing nav_open = false");
        self.nav_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let ctx = AppGlobalContext::new();
        assert!(!ctx.nav_open.get_untracked());
    }

    #[test]
    fn toggle_flips_from_either_state() {
        let ctx = AppGlobalContext::new();
        ctx.toggle_nav();
        assert!(ctx.nav_open.get_untracked());
        ctx.toggle_nav();
        assert!(!ctx.nav_open.get_untracked());
    }

    #[test]
    fn close_never_opens() {
        let ctx = AppGlobalContext::new();
        ctx.close_nav();
        assert!(!ctx.nav_open.get_untracked());

        ctx.toggle_nav();
        ctx.close_nav();
        assert!(!ctx.nav_open.get_untracked());
    }
}
