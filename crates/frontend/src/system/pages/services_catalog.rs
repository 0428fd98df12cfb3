use leptos::prelude::*;

#[component]
pub fn ServicesCatalogPage() -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__title">"Services catalog"</h1>
            <p class="page__lead">
                "Browsable catalog of platform services available to order."
            </p>
        </section>
    }
}
