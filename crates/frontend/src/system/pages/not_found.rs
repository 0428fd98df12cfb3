use leptos::prelude::*;
use leptos_router::components::A;

/// Fallback for unknown routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page page--not-found">
            <h1 class="page__title">"Page not found"</h1>
            <p class="page__lead">
                "The address does not match any platform page. "
                <A href="/applications">"Back to applications"</A>
            </p>
        </section>
    }
}
