use leptos::prelude::*;

#[component]
pub fn BusinessDemoTemplatesPage() -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__title">"Business demo templates"</h1>
            <p class="page__lead">
                "End-to-end demo scenarios for customer-facing walkthroughs."
            </p>
        </section>
    }
}
