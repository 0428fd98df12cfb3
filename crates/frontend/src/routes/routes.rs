use crate::layout::Shell;
use crate::system::pages::{
    ApplicationsPage, BusinessDemoTemplatesPage, NotFoundPage, ServicesCatalogPage,
    TechnicalTemplatesPage,
};
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

/// Top-level route table. Every side navigation destination lands here.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=|| view! { <Redirect path="/applications" /> } />
                    <Route path=path!("/applications") view=ApplicationsPage />
                    <Route path=path!("/technical-templates") view=TechnicalTemplatesPage />
                    <Route path=path!("/business-demo-templates") view=BusinessDemoTemplatesPage />
                    <Route path=path!("/services-catalog") view=ServicesCatalogPage />
                </Routes>
            </Shell>
        </Router>
    }
}
