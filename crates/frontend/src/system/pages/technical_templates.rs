use leptos::prelude::*;

#[component]
pub fn TechnicalTemplatesPage() -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__title">"Technical templates"</h1>
            <p class="page__lead">
                "Infrastructure and middleware templates ready to provision."
            </p>
        </section>
    }
}
