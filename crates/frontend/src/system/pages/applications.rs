use leptos::prelude::*;

/// Landing page. Lists the applications deployed on the platform.
#[component]
pub fn ApplicationsPage() -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__title">"Applications"</h1>
            <p class="page__lead">
                "Deployed applications and their runtime status."
            </p>
        </section>
    }
}
