pub mod global_context;
pub mod left;
pub mod top_header;

use global_context::AppGlobalContext;
use left::SideNav;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  SideNav  |         Content              |
/// +------------------------------------------+
/// ```
///
/// The shell owns the wiring between the navigation visibility flag and the
/// two components that act on it: `TopHeader` toggles it, `SideNav` reads it
/// and may only force it closed.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <SideNav
                    expanded=ctx.nav_open
                    on_close=Callback::new(move |_| ctx.close_nav())
                />

                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
